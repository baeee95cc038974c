//! Progression engine — XP, levels, prosperity, chests, swarm escalation.
//!
//! Pure run-scoped state with derived quantities consumed by the scheduler
//! (swarm spawn interval, difficulty multiplier), the upgrade selection
//! (rarity shift), and external collaborators (chest drop chance, crit
//! bonus). Reset only at run start.

use quillfall_core::constants::*;
use quillfall_core::enums::EnemyArchetype;

/// Run-scoped progression state.
#[derive(Debug, Clone)]
pub struct ProgressionState {
    pub level: u32,
    /// XP accumulated toward the next level.
    pub xp: f32,
    /// Level-ups earned but not yet consumed by the upgrade UI. A counter,
    /// not a flag, so a double level-up in one award is never lost.
    pub pending_level_ups: u32,
    pub chests_collected: u32,
    /// Rigged-chest guarantees not yet applied to an upgrade selection.
    pub rigged_pending: u32,

    // --- Infinite swarm ---
    pub swarm_active: bool,
    pub swarm_started_secs: f32,
    pub difficulty_multiplier: f32,
    pub swarm_spawn_interval: f32,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0.0,
            pending_level_ups: 0,
            chests_collected: 0,
            rigged_pending: 0,
            swarm_active: false,
            swarm_started_secs: 0.0,
            difficulty_multiplier: 1.0,
            swarm_spawn_interval: SWARM_BASE_SPAWN_INTERVAL,
        }
    }
}

/// XP required to pass level `level`.
///
/// Computed in f64 with a tolerance before flooring: 1.15 is not exactly
/// representable, and `100 * 1.15` must come out as 115, not 114.
pub fn xp_for_level(level: u32) -> f32 {
    let exact = BASE_XP_TO_LEVEL * XP_SCALING_FACTOR.powi(level as i32 - 1);
    (exact + 1e-6).floor() as f32
}

/// XP awarded for killing an enemy of `archetype` spawned in `wave`.
pub fn enemy_xp(archetype: EnemyArchetype, wave: u32) -> u32 {
    let boss_mult = if archetype.is_boss() {
        XP_DROP_BOSS_MULT
    } else {
        1.0
    };
    (XP_DROP_BASE * boss_mult * (1.0 + wave as f32 * XP_WAVE_BONUS)).floor() as u32
}

/// Prosperity clamped to the cap used by every derived formula.
pub fn clamped_prosperity(raw: f32) -> f32 {
    raw.clamp(0.0, MAX_PROSPERITY)
}

/// Chest drop chance at a given (clamped) prosperity.
pub fn chest_drop_chance(prosperity: f32) -> f32 {
    CHEST_BASE_DROP_CHANCE + prosperity * CHEST_DROP_BONUS_PER_POINT
}

/// Additive crit chance granted by prosperity.
pub fn crit_bonus(prosperity: f32) -> f32 {
    prosperity * CRIT_BONUS_PER_POINT
}

impl ProgressionState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Award XP, looping over level thresholds so one large award can grant
    /// several levels. Returns the number of levels gained.
    pub fn add_xp(&mut self, amount: u32) -> u32 {
        self.xp += amount as f32;
        let mut gained = 0;
        while self.xp >= xp_for_level(self.level) {
            self.xp -= xp_for_level(self.level);
            self.level += 1;
            self.pending_level_ups += 1;
            gained += 1;
        }
        gained
    }

    /// Hand one pending level-up to the upgrade UI, if any.
    pub fn consume_level_up(&mut self) -> bool {
        if self.pending_level_ups > 0 {
            self.pending_level_ups -= 1;
            true
        } else {
            false
        }
    }

    /// Record a chest pickup. Returns whether this was one of the rigged
    /// chests that force a rare-or-better upgrade guarantee.
    pub fn collect_chest(&mut self) -> bool {
        self.chests_collected += 1;
        let rigged = self.chests_collected <= RIGGED_CHEST_COUNT;
        if rigged {
            self.rigged_pending += 1;
        }
        rigged
    }

    /// Consume one pending rigged-chest guarantee, if any.
    pub fn take_rigged(&mut self) -> bool {
        if self.rigged_pending > 0 {
            self.rigged_pending -= 1;
            true
        } else {
            false
        }
    }

    /// Switch to infinite-swarm escalation.
    pub fn activate_swarm(&mut self, now_secs: f32) {
        self.swarm_active = true;
        self.swarm_started_secs = now_secs;
        self.difficulty_multiplier = 1.0;
        self.swarm_spawn_interval = SWARM_BASE_SPAWN_INTERVAL;
    }

    /// Recompute the swarm curves. Spawn interval decays exponentially per
    /// elapsed second toward a floor; difficulty grows quadratically with
    /// elapsed time over the tier interval. Frozen while swarm is inactive.
    pub fn update_swarm(&mut self, now_secs: f32) {
        if !self.swarm_active {
            return;
        }
        let elapsed = (now_secs - self.swarm_started_secs).max(0.0);
        self.swarm_spawn_interval = (SWARM_BASE_SPAWN_INTERVAL
            * SWARM_INTERVAL_DECAY.powf(elapsed * SWARM_DECAY_TICK_RATE))
        .max(SWARM_MIN_SPAWN_INTERVAL);
        let tiers = elapsed / SWARM_TIER_INTERVAL;
        self.difficulty_multiplier = 1.0 + tiers * tiers;
    }
}
