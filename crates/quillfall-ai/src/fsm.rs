//! Enemy behavior finite state machine.
//!
//! Pure functions that compute state transitions, velocity adjustments,
//! and attack intents for enemy entities based on their archetype, current
//! state, and situation. No ECS dependency, operates on plain data. All
//! randomness comes through the caller's RNG so runs stay reproducible.

use glam::Vec2;
use quillfall_core::constants::*;
use quillfall_core::enums::{BehaviorState, EnemyArchetype};
use quillfall_core::types::angle_difference;
use rand::Rng;

use crate::profiles::{get_profile, BehaviorProfile};

/// Input to the enemy FSM for a single entity.
pub struct BehaviorContext {
    pub archetype: EnemyArchetype,
    pub state: BehaviorState,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current target position (the player).
    pub target: Vec2,
    pub target_alive: bool,
    /// Whether the entity is resting on the ground plane.
    pub grounded: bool,
    /// Current health fraction, drives boss phase selection.
    pub health_frac: f32,
    /// Movement speed after wave scaling (px/s).
    pub speed: f32,
    pub now_secs: f32,
    /// When the current state was entered.
    pub state_entered_secs: f32,
    /// Last shot or heal pulse.
    pub last_fire_secs: f32,
    /// Last special maneuver start.
    pub last_special_secs: f32,
    /// Locked destination for in-flight dives, rolls and charges.
    pub committed: Option<Vec2>,
    pub dt: f32,
}

/// Attack intent produced by the FSM. The simulation turns these into
/// projectiles, strikes, and heals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BehaviorAction {
    /// Fire `burst` projectiles at the target.
    Fire { burst: u32 },
    /// Area strike on emerging from underground.
    SurfaceStrike,
    /// Heal nearby wounded allies.
    HealPulse,
}

/// Output from the enemy FSM.
pub struct BehaviorUpdate {
    pub state: BehaviorState,
    pub state_changed: bool,
    pub velocity: Vec2,
    pub committed: Option<Vec2>,
    pub last_fire_secs: f32,
    pub last_special_secs: f32,
    /// 1-based boss phase, 0 for regular enemies.
    pub boss_phase: u8,
    pub action: Option<BehaviorAction>,
}

/// Probability that a rate-gated trigger fires during a step of `dt` seconds.
///
/// Uses the hazard form `1 - exp(-rate * dt)` so per-second trigger
/// frequency does not depend on the step size.
pub fn trigger_probability(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

fn hazard<R: Rng>(rng: &mut R, rate: f32, dt: f32) -> bool {
    rng.gen::<f32>() < trigger_probability(rate, dt)
}

/// Index into the profile's phase table for the given health fraction.
pub fn boss_phase_index(profile: &BehaviorProfile, health_frac: f32) -> usize {
    profile
        .phases
        .iter()
        .position(|p| health_frac > p.min_health_frac)
        .unwrap_or(profile.phases.len().saturating_sub(1))
}

/// Whether a frontal blocker deflects a hit arriving from `origin_angle`.
///
/// `origin_angle` is the bearing from the enemy toward the damage source.
/// Blocking only applies while walking; rolling and recovering enemies
/// take full damage.
pub fn blocks_damage(
    archetype: EnemyArchetype,
    state: BehaviorState,
    facing_right: bool,
    origin_angle: f32,
) -> bool {
    let Some(half_angle) = get_profile(archetype).block_half_angle else {
        return false;
    };
    if !matches!(state, BehaviorState::Approach | BehaviorState::Engage) {
        return false;
    }
    let facing = if facing_right { 0.0 } else { std::f32::consts::PI };
    angle_difference(origin_angle, facing) <= half_angle
}

/// Evaluate the FSM for one enemy. Returns the updated state, velocity,
/// timers, and any attack intent raised this step.
pub fn evaluate<R: Rng>(ctx: &BehaviorContext, rng: &mut R) -> BehaviorUpdate {
    let profile = get_profile(ctx.archetype);
    let boss_phase = if profile.phases.is_empty() {
        0
    } else {
        boss_phase_index(&profile, ctx.health_frac) as u8 + 1
    };

    let mut up = BehaviorUpdate {
        state: ctx.state,
        state_changed: false,
        velocity: ctx.velocity,
        committed: ctx.committed,
        last_fire_secs: ctx.last_fire_secs,
        last_special_secs: ctx.last_special_secs,
        boss_phase,
        action: None,
    };

    // Terminal state — no transitions
    if ctx.state == BehaviorState::Dead {
        up.velocity = Vec2::ZERO;
        return up;
    }

    // With no live target, hold position rather than wander
    if !ctx.target_alive {
        up.velocity = if ctx.archetype.is_airborne() {
            Vec2::ZERO
        } else {
            Vec2::new(0.0, ctx.velocity.y)
        };
        return up;
    }

    match ctx.state {
        BehaviorState::Approach => evaluate_approach(ctx, &profile, &mut up, rng),
        BehaviorState::Engage => evaluate_engage(ctx, &profile, &mut up, rng),
        BehaviorState::Special => evaluate_special(ctx, &profile, &mut up),
        BehaviorState::Recover => evaluate_recover(ctx, &profile, &mut up),
        BehaviorState::Dead => {}
    }

    up
}

fn enter(up: &mut BehaviorUpdate, state: BehaviorState) {
    up.state = state;
    up.state_changed = true;
}

/// Horizontal chase toward the target, with a rate-gated hop when the
/// target is well above the enemy.
fn ground_chase<R: Rng>(
    ctx: &BehaviorContext,
    speed: f32,
    can_jump: bool,
    up: &mut BehaviorUpdate,
    rng: &mut R,
) {
    let dir = (ctx.target.x - ctx.position.x).signum();
    let mut vy = ctx.velocity.y;
    if can_jump
        && ctx.grounded
        && ctx.target.y < ctx.position.y - JUMP_HEIGHT_THRESHOLD
        && hazard(rng, JUMP_HAZARD_RATE, ctx.dt)
    {
        vy = JUMP_VELOCITY;
    }
    up.velocity = Vec2::new(dir * speed, vy);
}

/// Fly toward a swaying point above the target.
fn hover_track(ctx: &BehaviorContext, profile: &BehaviorProfile, sway_rate: f32) -> Vec2 {
    let hover = Vec2::new(
        ctx.target.x + (ctx.now_secs * sway_rate).sin() * profile.sway_amplitude,
        ctx.target.y - profile.hover_height,
    );
    (hover - ctx.position).normalize_or_zero() * ctx.speed
}

fn evaluate_approach<R: Rng>(
    ctx: &BehaviorContext,
    profile: &BehaviorProfile,
    up: &mut BehaviorUpdate,
    rng: &mut R,
) {
    // Tunnellers dig in immediately on spawn
    if profile.burrow.is_some() {
        enter(up, BehaviorState::Special);
        up.last_special_secs = ctx.now_secs;
        let dir = (ctx.target.x - ctx.position.x).signum();
        up.velocity = Vec2::new(dir * ctx.speed, ctx.velocity.y);
        return;
    }

    let dist = ctx.position.distance(ctx.target);
    if dist <= profile.engage_range {
        enter(up, BehaviorState::Engage);
    }

    if ctx.archetype.is_airborne() {
        up.velocity = hover_track(ctx, profile, 2.0);
    } else {
        ground_chase(ctx, ctx.speed, profile.can_jump, up, rng);
    }
}

fn evaluate_engage<R: Rng>(
    ctx: &BehaviorContext,
    profile: &BehaviorProfile,
    up: &mut BehaviorUpdate,
    rng: &mut R,
) {
    let dist = ctx.position.distance(ctx.target);
    let dx = ctx.target.x - ctx.position.x;

    match ctx.archetype {
        EnemyArchetype::Scurrier | EnemyArchetype::Splitter | EnemyArchetype::Splitling => {
            ground_chase(ctx, ctx.speed, profile.can_jump, up, rng);
        }

        EnemyArchetype::Spitter => {
            // Kite: back off when crowded, advance when out of band, strafe in it
            let vx = if dist < profile.retreat_range {
                -dx.signum() * ctx.speed
            } else if dist > profile.preferred_range {
                dx.signum() * ctx.speed
            } else if ctx.now_secs.sin() > 0.0 {
                ctx.speed * 0.5
            } else {
                -ctx.speed * 0.5
            };
            up.velocity = Vec2::new(vx, ctx.velocity.y);

            if ctx.now_secs - ctx.last_fire_secs >= profile.fire_interval {
                up.action = Some(BehaviorAction::Fire { burst: 1 });
                up.last_fire_secs = ctx.now_secs;
            }
        }

        EnemyArchetype::Swooper => {
            // Dive once lined up above the target
            if dx.abs() < 50.0 && ctx.position.y < ctx.target.y - 100.0 {
                enter(up, BehaviorState::Special);
                up.committed = Some(ctx.target);
                up.last_special_secs = ctx.now_secs;
                up.velocity =
                    (ctx.target - ctx.position).normalize_or_zero() * profile.special_speed;
                return;
            }
            up.velocity = hover_track(ctx, profile, 2.0);
        }

        EnemyArchetype::Shellback => {
            if ctx.now_secs - ctx.last_special_secs >= profile.special_cooldown
                && dist >= profile.special_min_range
                && dist <= profile.special_max_range
            {
                enter(up, BehaviorState::Special);
                up.committed = Some(ctx.target);
                up.last_special_secs = ctx.now_secs;
                up.velocity = Vec2::new(dx.signum() * profile.special_speed, ctx.velocity.y);
                return;
            }
            ground_chase(ctx, ctx.speed, profile.can_jump, up, rng);
        }

        EnemyArchetype::Burrower => {
            // Surfaced window, then dig back in
            if let Some(burrow) = &profile.burrow {
                if ctx.now_secs - ctx.state_entered_secs >= burrow.surface_secs {
                    enter(up, BehaviorState::Special);
                    up.last_special_secs = ctx.now_secs;
                    up.velocity = Vec2::new(dx.signum() * ctx.speed, ctx.velocity.y);
                    return;
                }
            }
            ground_chase(ctx, ctx.speed * 0.6, false, up, rng);
        }

        EnemyArchetype::Mender => {
            if let Some(heal) = &profile.heal {
                let vx = if dist < heal.flee_range {
                    -dx.signum() * ctx.speed
                } else if dist > profile.preferred_range {
                    dx.signum() * ctx.speed * 0.5
                } else {
                    0.0
                };
                up.velocity = Vec2::new(vx, ctx.velocity.y);

                if ctx.now_secs - ctx.last_fire_secs >= heal.interval {
                    up.action = Some(BehaviorAction::HealPulse);
                    up.last_fire_secs = ctx.now_secs;
                }
            }
        }

        EnemyArchetype::Boss => {
            let phase = &profile.phases[boss_phase_index(profile, ctx.health_frac)];

            if dist < profile.special_max_range
                && ctx.now_secs - ctx.last_special_secs >= profile.special_cooldown
                && hazard(rng, profile.special_hazard_rate, ctx.dt)
            {
                enter(up, BehaviorState::Special);
                up.committed = Some(ctx.target);
                up.last_special_secs = ctx.now_secs;
                up.velocity =
                    (ctx.target - ctx.position).normalize_or_zero() * profile.special_speed;
                return;
            }

            let vx = if dist > phase.preferred_range + 40.0 {
                dx.signum() * ctx.speed
            } else if dist < phase.preferred_range - 40.0 {
                -dx.signum() * ctx.speed * 0.6
            } else {
                (ctx.now_secs * phase.strafe_rate).sin() * ctx.speed * 0.6
            };
            let mut vy = ctx.velocity.y;
            if ctx.grounded
                && ctx.target.y < ctx.position.y - JUMP_HEIGHT_THRESHOLD
                && hazard(rng, JUMP_HAZARD_RATE, ctx.dt)
            {
                vy = JUMP_VELOCITY;
            }
            up.velocity = Vec2::new(vx, vy);

            if ctx.now_secs - ctx.last_fire_secs >= phase.fire_interval {
                up.action = Some(BehaviorAction::Fire { burst: phase.burst });
                up.last_fire_secs = ctx.now_secs;
            }
        }

        EnemyArchetype::SkyBoss => {
            let phase = &profile.phases[boss_phase_index(profile, ctx.health_frac)];

            if dx.abs() < 60.0
                && ctx.position.y < ctx.target.y - 120.0
                && ctx.now_secs - ctx.last_special_secs >= profile.special_cooldown
                && hazard(rng, profile.special_hazard_rate, ctx.dt)
            {
                enter(up, BehaviorState::Special);
                up.committed = Some(ctx.target);
                up.last_special_secs = ctx.now_secs;
                up.velocity =
                    (ctx.target - ctx.position).normalize_or_zero() * profile.special_speed;
                return;
            }

            up.velocity = hover_track(ctx, profile, phase.strafe_rate);

            if ctx.now_secs - ctx.last_fire_secs >= phase.fire_interval {
                up.action = Some(BehaviorAction::Fire { burst: phase.burst });
                up.last_fire_secs = ctx.now_secs;
            }
        }
    }
}

fn evaluate_special(ctx: &BehaviorContext, profile: &BehaviorProfile, up: &mut BehaviorUpdate) {
    let elapsed = ctx.now_secs - ctx.state_entered_secs;

    // Tunnellers surface after the burrow timer, everyone else runs a
    // committed dash toward a locked point.
    if let Some(burrow) = &profile.burrow {
        if elapsed >= burrow.burrow_secs {
            enter(up, BehaviorState::Engage);
            up.action = Some(BehaviorAction::SurfaceStrike);
            up.velocity = Vec2::new(0.0, ctx.velocity.y);
            return;
        }
        let dir = (ctx.target.x - ctx.position.x).signum();
        up.velocity = Vec2::new(dir * ctx.speed, ctx.velocity.y);
        return;
    }

    let mark = ctx.committed.unwrap_or(ctx.target);

    match ctx.archetype {
        EnemyArchetype::Swooper | EnemyArchetype::SkyBoss => {
            let done = ctx.position.distance(mark) < 30.0 || ctx.position.y > mark.y + 50.0;
            if done {
                enter(up, BehaviorState::Recover);
                up.committed = None;
                up.velocity = ctx.velocity * 0.2;
                return;
            }
            up.velocity = (mark - ctx.position).normalize_or_zero() * profile.special_speed;
        }

        EnemyArchetype::Shellback => {
            let done = (ctx.position.x - mark.x).abs() < 40.0 || elapsed > 1.5;
            if done {
                enter(up, BehaviorState::Recover);
                up.committed = None;
                up.velocity = Vec2::new(0.0, ctx.velocity.y);
                return;
            }
            let dir = (mark.x - ctx.position.x).signum();
            up.velocity = Vec2::new(dir * profile.special_speed, ctx.velocity.y);
        }

        EnemyArchetype::Boss => {
            let done = ctx.position.distance(mark) < 50.0 || elapsed > 2.0;
            if done {
                enter(up, BehaviorState::Recover);
                up.committed = None;
                up.velocity = Vec2::new(0.0, ctx.velocity.y);
                return;
            }
            up.velocity = (mark - ctx.position).normalize_or_zero() * profile.special_speed;
        }

        // Remaining archetypes have no committed special
        _ => {
            enter(up, BehaviorState::Engage);
            up.committed = None;
        }
    }
}

fn evaluate_recover(ctx: &BehaviorContext, profile: &BehaviorProfile, up: &mut BehaviorUpdate) {
    if ctx.now_secs - ctx.state_entered_secs >= profile.recover_secs {
        enter(up, BehaviorState::Engage);
        return;
    }
    up.velocity = if ctx.archetype.is_airborne() {
        ctx.velocity * 0.8
    } else {
        Vec2::new(ctx.velocity.x * 0.8, ctx.velocity.y)
    };
}
