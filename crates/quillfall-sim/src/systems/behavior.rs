//! Behavior system — runs the archetype FSM for every live enemy.
//!
//! Calls the FSM from quillfall-ai to compute state transitions and
//! velocities, applies the results to ECS components, then resolves the
//! attack intents (projectile volleys, surface strikes, heal pulses).
//! Enemies must not depend on sibling update order within a tick: the FSM
//! reads only pre-update component state collected up front.

use glam::Vec2;
use hecs::World;
use quillfall_ai::fsm::{evaluate, BehaviorAction, BehaviorContext, BehaviorUpdate};
use quillfall_ai::profiles::get_profile;
use quillfall_core::components::*;
use quillfall_core::constants::GROUND_Y;
use quillfall_core::enums::{BehaviorState, EnemyArchetype};
use quillfall_core::events::GameEvent;
use quillfall_core::target::PlayerTarget;
use quillfall_core::types::{Position, Velocity};
use rand_chacha::ChaCha8Rng;

struct PendingAction {
    enemy_id: u32,
    archetype: EnemyArchetype,
    position: Vec2,
    damage: f32,
    action: BehaviorAction,
}

/// Run the behavior system for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut dyn PlayerTarget,
    now_secs: f32,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let target = player.position();
    let target_alive = player.is_alive();

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(hecs::Entity, BehaviorUpdate)> = Vec::new();
    let mut actions: Vec<PendingAction> = Vec::new();

    {
        let mut query = world.query::<(
            &EnemyInfo,
            &Position,
            &Velocity,
            &Health,
            &CombatStats,
            &BehaviorCtl,
        )>();
        for (entity, (info, pos, vel, health, stats, ctl)) in query.iter() {
            if ctl.state == BehaviorState::Dead {
                continue;
            }

            let grounded =
                !info.archetype.is_airborne() && pos.0.y >= GROUND_Y - 0.5;

            let ctx = BehaviorContext {
                archetype: info.archetype,
                state: ctl.state,
                position: pos.0,
                velocity: vel.0,
                target,
                target_alive,
                grounded,
                health_frac: health.fraction(),
                speed: stats.speed,
                now_secs,
                state_entered_secs: ctl.state_entered_secs,
                last_fire_secs: ctl.last_fire_secs,
                last_special_secs: ctl.last_special_secs,
                committed: ctl.committed,
                dt,
            };

            let update = evaluate(&ctx, rng);
            if let Some(action) = update.action {
                actions.push(PendingAction {
                    enemy_id: info.id,
                    archetype: info.archetype,
                    position: pos.0,
                    damage: stats.damage,
                    action,
                });
            }
            updates.push((entity, update));
        }
    }

    // Apply updates
    for (entity, update) in updates {
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            vel.0 = update.velocity;
        }
        if let Ok(mut ctl) = world.get::<&mut BehaviorCtl>(entity) {
            if update.state_changed {
                ctl.state_entered_secs = now_secs;
            }
            ctl.state = update.state;
            ctl.committed = update.committed;
            ctl.last_fire_secs = update.last_fire_secs;
            ctl.last_special_secs = update.last_special_secs;
            ctl.boss_phase = update.boss_phase;

            // Committed maneuvers keep their facing until they resolve
            if ctl.state != BehaviorState::Special {
                if let Ok(pos) = world.get::<&Position>(entity) {
                    if let Ok(mut info) = world.get::<&mut EnemyInfo>(entity) {
                        info.facing_right = target.x >= pos.0.x;
                    }
                }
            }
        }
    }

    // Resolve attack intents
    for pending in actions {
        match pending.action {
            BehaviorAction::Fire { burst } => {
                let profile = get_profile(pending.archetype);
                events.push(GameEvent::EnemyFired {
                    enemy_id: pending.enemy_id,
                    position: pending.position,
                    aim: (target - pending.position).normalize_or_zero(),
                    projectile_speed: profile.projectile_speed,
                    damage: pending.damage,
                    burst,
                });
            }
            BehaviorAction::SurfaceStrike => {
                events.push(GameEvent::EnemySurfaced {
                    enemy_id: pending.enemy_id,
                    position: pending.position,
                });
                if let Some(burrow) = get_profile(pending.archetype).burrow {
                    if target_alive && pending.position.distance(target) <= burrow.strike_radius {
                        player.take_damage(pending.damage);
                    }
                }
            }
            BehaviorAction::HealPulse => {
                heal_nearest_wounded(world, pending.enemy_id, pending.position, events);
            }
        }
    }
}

/// Heal the nearest wounded ally within the healer's pulse range.
fn heal_nearest_wounded(
    world: &mut World,
    healer_id: u32,
    healer_pos: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let Some(heal) = get_profile(EnemyArchetype::Mender).heal else {
        return;
    };

    let mut nearest: Option<(hecs::Entity, u32, f32)> = None;
    {
        let mut query = world.query::<(&EnemyInfo, &Position, &Health, &BehaviorCtl)>();
        for (entity, (info, pos, health, ctl)) in query.iter() {
            if info.id == healer_id || ctl.state == BehaviorState::Dead {
                continue;
            }
            if health.current >= health.max {
                continue;
            }
            let dist = healer_pos.distance(pos.0);
            if dist > heal.range {
                continue;
            }
            if nearest.is_none_or(|(_, _, best)| dist < best) {
                nearest = Some((entity, info.id, dist));
            }
        }
    }

    if let Some((entity, target_id, _)) = nearest {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            let amount = heal.amount.min(health.max - health.current);
            health.current += amount;
            events.push(GameEvent::EnemyHealed {
                healer_id,
                target_id,
                amount,
            });
        }
    }
}
