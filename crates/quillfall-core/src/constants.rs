//! Simulation constants and tuning parameters.
//!
//! All gameplay numbers live here so balance passes never touch logic.

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 1440.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 810.0;

/// Ground level for walking enemies (y grows downward).
pub const GROUND_Y: f32 = ARENA_HEIGHT - 100.0;

/// Downward acceleration applied to grounded archetypes (px/s²).
pub const GRAVITY: f32 = 1200.0;

/// Upward jump impulse (px/s, negative = up).
pub const JUMP_VELOCITY: f32 = -620.0;

/// Target must be at least this many pixels above before an enemy jumps.
pub const JUMP_HEIGHT_THRESHOLD: f32 = 60.0;

/// Continuous-time hazard rate for jump decisions (events per second).
/// Tuned so one simulated frame at 60 fps carries ~3% trigger probability.
pub const JUMP_HAZARD_RATE: f32 = 1.8;

// --- Wave scheduling ---

/// Enemy count in wave 1.
pub const WAVE_BASE_ENEMY_COUNT: u32 = 5;

/// Geometric growth of enemy count per wave (+20%). Kept f64 so the
/// decimal value survives into the wave-size formula exactly.
pub const WAVE_ENEMY_SCALE: f64 = 1.2;

/// Hard cap on enemies scheduled in a single wave.
pub const MAX_ENEMIES_PER_WAVE: u32 = 100;

/// Boss wave every N waves.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Spawn interval at the start of wave 1 (seconds).
pub const SPAWN_INTERVAL_START: f32 = 2.0;

/// The start interval steps down by this much every `SPAWN_SCALING_INTERVAL` waves.
pub const SPAWN_INTERVAL_STEP: f32 = 0.15;

/// Waves between start-interval step-downs.
pub const SPAWN_SCALING_INTERVAL: u32 = 3;

/// Floor for the wave-dependent start interval (seconds).
pub const SPAWN_INTERVAL_START_FLOOR: f32 = 0.8;

/// Spawn interval at the end of every wave (seconds).
pub const SPAWN_INTERVAL_END: f32 = 0.35;

/// Wave number at which discrete waves end and the infinite swarm begins.
pub const INFINITE_SWARM_WAVE: u32 = 20;

/// Effective wave number used for archetype selection during the swarm
/// (high enough that every archetype is unlocked).
pub const SWARM_EFFECTIVE_WAVE: u32 = 99;

// --- Enemy stat scaling ---

/// Health gained per wave (+8%).
pub const ENEMY_HEALTH_PER_WAVE: f32 = 0.08;

/// Damage gained per wave (+5%).
pub const ENEMY_DAMAGE_PER_WAVE: f32 = 0.05;

/// Speed gained per wave (+2%, subtle).
pub const ENEMY_SPEED_PER_WAVE: f32 = 0.02;

/// Cap on the health/damage multiplier.
pub const ENEMY_MAX_SCALE: f32 = 3.0;

/// Lower cap for speed to keep movement playable.
pub const ENEMY_MAX_SPEED_SCALE: f32 = 1.5;

// --- XP / levels ---

/// XP required to clear level 1.
pub const BASE_XP_TO_LEVEL: f64 = 100.0;

/// Geometric growth of the XP requirement per level. f64: the nearest
/// f32 to 1.15 lies *below* it, which would floor level 2 to 114.
pub const XP_SCALING_FACTOR: f64 = 1.15;

/// Base XP dropped by a non-boss enemy.
pub const XP_DROP_BASE: f32 = 5.0;

/// Boss XP multiplier.
pub const XP_DROP_BOSS_MULT: f32 = 10.0;

/// Extra XP per wave (+10% per wave).
pub const XP_WAVE_BONUS: f32 = 0.1;

// --- Chests / prosperity ---

/// Chest drop chance with zero prosperity.
pub const CHEST_BASE_DROP_CHANCE: f32 = 0.10;

/// The first N chests of a run are rigged to contain rare-or-better loot.
pub const RIGGED_CHEST_COUNT: u32 = 3;

/// Prosperity is clamped to this before every derived formula.
pub const MAX_PROSPERITY: f32 = 50.0;

/// Chest drop chance gained per prosperity point.
pub const CHEST_DROP_BONUS_PER_POINT: f32 = 0.005;

/// Crit chance gained per prosperity point.
pub const CRIT_BONUS_PER_POINT: f32 = 0.002;

/// Rarity-weight shift fraction per prosperity point.
pub const RARITY_SHIFT_PER_POINT: f32 = 0.01;

// --- Infinite swarm escalation ---

/// Spawn interval when the swarm starts (seconds).
pub const SWARM_BASE_SPAWN_INTERVAL: f32 = 2.0;

/// Spawn interval floor (seconds).
pub const SWARM_MIN_SPAWN_INTERVAL: f32 = 0.25;

/// Per-tick decay base; the interval is multiplied by
/// `SWARM_INTERVAL_DECAY ^ (dt_secs * SWARM_DECAY_TICK_RATE)` each tick.
pub const SWARM_INTERVAL_DECAY: f32 = 0.9998;

/// Tick rate the decay exponent is normalized against.
pub const SWARM_DECAY_TICK_RATE: f32 = 60.0;

/// Seconds per difficulty tier; multiplier = 1 + (elapsed / tier)².
pub const SWARM_TIER_INTERVAL: f32 = 60.0;

// --- Combat ---

/// Base crit damage multiplier before flat CritDamage modifiers.
pub const BASE_CRIT_MULTIPLIER: f32 = 2.0;

/// Upgrade choices offered per level-up or chest.
pub const UPGRADE_CHOICES: usize = 3;

/// Base rarity weights for upgrade selection, common-first.
pub const RARITY_WEIGHTS: [f32; 5] = [60.0, 25.0, 10.0, 4.0, 1.0];

/// Rarity-shift split into rare/epic/legendary.
pub const RARITY_SHIFT_SPLIT: [f32; 3] = [0.5, 0.3, 0.2];

/// Fraction of the shift taken from common weight.
pub const RARITY_SHIFT_FROM_COMMON: f32 = 0.5;

/// Fraction of the shift taken from uncommon weight.
pub const RARITY_SHIFT_FROM_UNCOMMON: f32 = 0.3;
