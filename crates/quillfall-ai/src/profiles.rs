//! Archetype-specific behavioral profiles.
//!
//! Consolidates per-archetype parameters for the enemy FSM, plus the
//! wave scaling applied to base stats at spawn time.

use quillfall_core::enums::EnemyArchetype;

/// Burrow cycle parameters for tunnelling archetypes.
pub struct BurrowParams {
    /// Time spent underground per cycle (s).
    pub burrow_secs: f32,
    /// Time spent surfaced per cycle (s).
    pub surface_secs: f32,
    /// Radius of the surfacing strike (px).
    pub strike_radius: f32,
}

/// Support-pulse parameters for healer archetypes.
pub struct HealParams {
    /// Seconds between heal pulses.
    pub interval: f32,
    /// Pulse range (px).
    pub range: f32,
    /// Health restored per pulse per recipient.
    pub amount: f32,
    /// Range below which the healer flees the target.
    pub flee_range: f32,
}

/// One boss phase. Phases are listed strongest-health first; the active
/// phase is the first whose threshold the boss is still above.
pub struct BossPhase {
    /// Health fraction above which this phase applies.
    pub min_health_frac: f32,
    /// Seconds between shots in this phase.
    pub fire_interval: f32,
    /// Projectiles per shot in this phase.
    pub burst: u32,
    /// Strafe oscillation rate (rad/s).
    pub strafe_rate: f32,
    /// Distance the boss tries to hold from the target (px).
    pub preferred_range: f32,
}

/// Behavioral profile for an enemy archetype.
pub struct BehaviorProfile {
    /// Base health before wave scaling.
    pub base_health: f32,
    /// Base contact/projectile damage before wave scaling.
    pub base_damage: f32,
    /// Base movement speed (px/s) before wave scaling.
    pub base_speed: f32,
    /// Score awarded on kill.
    pub points: u32,
    /// Range at which the enemy leaves Approach for Engage (px).
    pub engage_range: f32,
    /// Ranged units back away inside this range (px).
    pub retreat_range: f32,
    /// Ranged units advance outside this range (px).
    pub preferred_range: f32,
    /// Seconds between shots, 0.0 for archetypes that never fire.
    pub fire_interval: f32,
    /// Launch speed of fired projectiles (px/s).
    pub projectile_speed: f32,
    /// Cooldown between special maneuvers (s).
    pub special_cooldown: f32,
    /// Speed of the special maneuver (dive, roll, charge) (px/s).
    pub special_speed: f32,
    /// Minimum range to start the special maneuver (px).
    pub special_min_range: f32,
    /// Maximum range to start the special maneuver (px).
    pub special_max_range: f32,
    /// Per-second hazard rate gating the special, 0.0 for deterministic triggers.
    pub special_hazard_rate: f32,
    /// Time spent in Recover after a special (s).
    pub recover_secs: f32,
    /// Whether the enemy hops over obstacles while chasing on the ground.
    pub can_jump: bool,
    /// Hover height above the target for airborne archetypes (px).
    pub hover_height: f32,
    /// Lateral sway amplitude while hovering (px).
    pub sway_amplitude: f32,
    /// Half-angle of the frontal block cone (rad), None for non-blockers.
    pub block_half_angle: Option<f32>,
    /// Burrow cycle, None for surface archetypes.
    pub burrow: Option<BurrowParams>,
    /// Heal pulse, None for non-healers.
    pub heal: Option<HealParams>,
    /// Boss phase table, empty for regular enemies.
    pub phases: &'static [BossPhase],
}

const NO_PHASES: &[BossPhase] = &[];

const BOSS_PHASES: &[BossPhase] = &[
    BossPhase {
        min_health_frac: 0.5,
        fire_interval: 0.6,
        burst: 1,
        strafe_rate: 3.3,
        preferred_range: 200.0,
    },
    BossPhase {
        min_health_frac: 0.0,
        fire_interval: 0.45,
        burst: 3,
        strafe_rate: 5.0,
        preferred_range: 150.0,
    },
];

const SKY_BOSS_PHASES: &[BossPhase] = &[
    BossPhase {
        min_health_frac: 2.0 / 3.0,
        fire_interval: 1.5,
        burst: 1,
        strafe_rate: 2.0,
        preferred_range: 0.0,
    },
    BossPhase {
        min_health_frac: 1.0 / 3.0,
        fire_interval: 1.0,
        burst: 2,
        strafe_rate: 3.0,
        preferred_range: 0.0,
    },
    BossPhase {
        min_health_frac: 0.0,
        fire_interval: 0.6,
        burst: 3,
        strafe_rate: 4.5,
        preferred_range: 0.0,
    },
];

/// Get the behavioral profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> BehaviorProfile {
    let base = BehaviorProfile {
        base_health: 30.0,
        base_damage: 10.0,
        base_speed: 120.0,
        points: 10,
        engage_range: 4000.0,
        retreat_range: 0.0,
        preferred_range: 0.0,
        fire_interval: 0.0,
        projectile_speed: 0.0,
        special_cooldown: 0.0,
        special_speed: 0.0,
        special_min_range: 0.0,
        special_max_range: 0.0,
        special_hazard_rate: 0.0,
        recover_secs: 0.0,
        can_jump: true,
        hover_height: 0.0,
        sway_amplitude: 0.0,
        block_half_angle: None,
        burrow: None,
        heal: None,
        phases: NO_PHASES,
    };

    match archetype {
        EnemyArchetype::Scurrier => base,
        EnemyArchetype::Spitter => BehaviorProfile {
            base_health: 25.0,
            base_damage: 15.0,
            base_speed: 60.0,
            points: 20,
            engage_range: 450.0,
            retreat_range: 150.0,
            preferred_range: 250.0,
            fire_interval: 3.0,
            projectile_speed: 250.0,
            can_jump: false,
            ..base
        },
        EnemyArchetype::Swooper => BehaviorProfile {
            base_health: 15.0,
            base_damage: 20.0,
            base_speed: 200.0,
            points: 25,
            engage_range: 600.0,
            special_speed: 400.0,
            recover_secs: 0.4,
            can_jump: false,
            hover_height: 150.0,
            sway_amplitude: 100.0,
            ..base
        },
        EnemyArchetype::Shellback => BehaviorProfile {
            base_health: 80.0,
            base_damage: 15.0,
            base_speed: 50.0,
            points: 40,
            special_cooldown: 5.0,
            special_speed: 320.0,
            special_min_range: 120.0,
            special_max_range: 400.0,
            recover_secs: 0.8,
            block_half_angle: Some(std::f32::consts::FRAC_PI_4),
            ..base
        },
        EnemyArchetype::Burrower => BehaviorProfile {
            base_health: 40.0,
            base_damage: 18.0,
            base_speed: 70.0,
            points: 30,
            can_jump: false,
            burrow: Some(BurrowParams {
                burrow_secs: 3.0,
                surface_secs: 2.5,
                strike_radius: 90.0,
            }),
            ..base
        },
        EnemyArchetype::Splitter => BehaviorProfile {
            base_health: 35.0,
            base_damage: 12.0,
            base_speed: 110.0,
            points: 25,
            ..base
        },
        EnemyArchetype::Splitling => BehaviorProfile {
            base_health: 12.0,
            base_damage: 6.0,
            base_speed: 150.0,
            points: 5,
            ..base
        },
        EnemyArchetype::Mender => BehaviorProfile {
            base_health: 30.0,
            base_damage: 0.0,
            base_speed: 90.0,
            points: 35,
            preferred_range: 350.0,
            can_jump: false,
            heal: Some(HealParams {
                interval: 4.0,
                range: 260.0,
                amount: 12.0,
                flee_range: 200.0,
            }),
            ..base
        },
        EnemyArchetype::Boss => BehaviorProfile {
            base_health: 300.0,
            base_damage: 25.0,
            base_speed: 100.0,
            points: 500,
            projectile_speed: 400.0,
            special_cooldown: 4.0,
            special_speed: 350.0,
            special_max_range: 250.0,
            special_hazard_rate: 1.2,
            recover_secs: 0.6,
            phases: BOSS_PHASES,
            ..base
        },
        EnemyArchetype::SkyBoss => BehaviorProfile {
            base_health: 260.0,
            base_damage: 22.0,
            base_speed: 140.0,
            points: 600,
            projectile_speed: 420.0,
            special_cooldown: 5.0,
            special_speed: 450.0,
            special_hazard_rate: 1.0,
            recover_secs: 0.6,
            can_jump: false,
            hover_height: 180.0,
            sway_amplitude: 140.0,
            phases: SKY_BOSS_PHASES,
            ..base
        },
    }
}

/// Health, damage and speed after wave scaling.
pub struct ScaledStats {
    pub health: f32,
    pub damage: f32,
    pub speed: f32,
}

/// Scale an archetype's base stats for the wave it spawns in.
///
/// Health and damage grow linearly per wave up to a hard cap; speed grows
/// more slowly with a lower cap. During the infinite swarm the difficulty
/// multiplier replaces the wave-based health/damage scale entirely, so
/// escalation restarts from base stats; speed keeps its own capped curve.
pub fn scaled_stats(
    profile: &BehaviorProfile,
    wave: u32,
    swarm_multiplier: Option<f32>,
) -> ScaledStats {
    use quillfall_core::constants::*;

    let waves_in = wave.saturating_sub(1) as f32;
    let spd_scale = (1.0 + waves_in * ENEMY_SPEED_PER_WAVE).min(ENEMY_MAX_SPEED_SCALE);
    let (hp_scale, dmg_scale) = match swarm_multiplier {
        Some(m) => (m, m),
        None => (
            (1.0 + waves_in * ENEMY_HEALTH_PER_WAVE).min(ENEMY_MAX_SCALE),
            (1.0 + waves_in * ENEMY_DAMAGE_PER_WAVE).min(ENEMY_MAX_SCALE),
        ),
    };

    ScaledStats {
        health: profile.base_health * hp_scale,
        damage: profile.base_damage * dmg_scale,
        speed: profile.base_speed * spd_scale,
    }
}
