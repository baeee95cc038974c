//! Modifier pipeline — aggregates acquired upgrades into named numeric deltas.
//!
//! Every damage/speed/rate computation in the game reads from here. The
//! totals map is a pure function of the multiset of acquired upgrades:
//! `recompute` sums every effect of every upgrade, so acquisition order
//! never matters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::BASE_CRIT_MULTIPLIER;
use crate::upgrades::Upgrade;

/// Named numeric quantity derived by summing upgrade effects.
///
/// Two semantic families: relative deltas that multiply a baseline of 1.0
/// (e.g. `Damage: 0.2` means ×1.2) and flat deltas added to a base quantity
/// (e.g. `MaxQuills: +5`). `CritDamage` is flat-added to the fixed 2.0 base
/// crit multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    Damage,
    FireRate,
    MaxQuills,
    RegenRate,
    MoveSpeed,
    JumpHeight,
    ProjectileCount,
    ProjectileSpeed,
    CritChance,
    CritDamage,
    Piercing,
    Bouncing,
    AoeRadius,
    MaxHealth,
    ExplosionRadius,
    ProjectileSize,
    ShieldCharges,
    CompanionCount,
    HomingStrength,
    Vampirism,
    Prosperity,
}

/// Aggregates the upgrades chosen this run into a flat modifier map.
///
/// The acquired list is append-only and reset only at run start. The totals
/// are fully recomputed on every acquisition — the list is small and
/// bounded, so incremental caching buys nothing.
#[derive(Debug, Clone, Default)]
pub struct ModifierPipeline {
    acquired: Vec<Upgrade>,
    totals: HashMap<ModifierKind, f32>,
}

impl ModifierPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an upgrade and recompute the modifier map.
    pub fn add_upgrade(&mut self, upgrade: Upgrade) {
        self.acquired.push(upgrade);
        self.recompute();
    }

    /// Accumulated delta for a modifier kind. Untouched kinds read as 0.
    pub fn modifier(&self, kind: ModifierKind) -> f32 {
        self.totals.get(&kind).copied().unwrap_or(0.0)
    }

    /// Relative-family convenience: baseline 1.0 plus the accumulated delta.
    pub fn multiplier(&self, kind: ModifierKind) -> f32 {
        1.0 + self.modifier(kind)
    }

    /// Crit damage multiplier: fixed 2.0 base plus flat CritDamage deltas.
    pub fn crit_damage_multiplier(&self) -> f32 {
        BASE_CRIT_MULTIPLIER + self.modifier(ModifierKind::CritDamage)
    }

    /// How many copies of an upgrade have been acquired (for max-stack checks).
    pub fn upgrade_count(&self, id: &str) -> u32 {
        self.acquired.iter().filter(|u| u.id == id).count() as u32
    }

    /// All upgrades acquired this run, in acquisition order.
    pub fn acquired(&self) -> &[Upgrade] {
        &self.acquired
    }

    /// Clear everything. Called at run start.
    pub fn reset(&mut self) {
        self.acquired.clear();
        self.totals.clear();
    }

    fn recompute(&mut self) {
        self.totals.clear();
        for upgrade in &self.acquired {
            for &(kind, value) in &upgrade.effects {
                *self.totals.entry(kind).or_insert(0.0) += value;
            }
        }
    }
}
