//! The static upgrade catalog.
//!
//! Catalog records are immutable configuration: loaded once, never mutated.
//! Effects are sparse — each upgrade names only the modifiers it touches.

use serde::{Deserialize, Serialize};

use crate::enums::Rarity;
use crate::modifiers::ModifierKind;

/// Immutable catalog record for one upgrade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    /// Sparse effect list: (modifier kind, delta).
    pub effects: Vec<(ModifierKind, f32)>,
    /// Acquisition cap. `None` = unlimited stacking.
    pub max_stacks: Option<u32>,
}

impl Upgrade {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        rarity: Rarity,
        effects: &[(ModifierKind, f32)],
        max_stacks: Option<u32>,
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            rarity,
            effects: effects.to_vec(),
            max_stacks,
        }
    }
}

/// Build the base upgrade catalog.
pub fn base_catalog() -> Vec<Upgrade> {
    use ModifierKind::*;
    use Rarity::*;

    vec![
        // --- Common ---
        Upgrade::new(
            "damage_1",
            "Sharp Quills",
            "Your quills deal more damage.",
            Common,
            &[(Damage, 0.1)],
            None,
        ),
        Upgrade::new(
            "fire_rate_1",
            "Quick Draw",
            "Shoot quills faster.",
            Common,
            &[(FireRate, 0.15)],
            None,
        ),
        Upgrade::new(
            "max_quills_1",
            "Extra Quills",
            "Grow more quills on your back.",
            Common,
            &[(MaxQuills, 5.0)],
            None,
        ),
        Upgrade::new(
            "regen_1",
            "Quick Recovery",
            "Regenerate quills faster.",
            Common,
            &[(RegenRate, 0.2)],
            None,
        ),
        Upgrade::new(
            "speed_1",
            "Light Feet",
            "Move faster.",
            Common,
            &[(MoveSpeed, 0.1)],
            None,
        ),
        Upgrade::new(
            "projectile_speed_1",
            "Aerodynamic Quills",
            "Quills fly faster.",
            Common,
            &[(ProjectileSpeed, 0.2)],
            None,
        ),
        Upgrade::new(
            "health_1",
            "Thick Hide",
            "Increase your maximum health.",
            Common,
            &[(MaxHealth, 20.0)],
            None,
        ),
        Upgrade::new(
            "prosperity_1",
            "Shiny Pebble",
            "A little luck goes a long way.",
            Common,
            &[(Prosperity, 5.0)],
            None,
        ),
        // --- Uncommon ---
        Upgrade::new(
            "damage_2",
            "Razor Quills",
            "Significantly sharper quills.",
            Uncommon,
            &[(Damage, 0.2)],
            None,
        ),
        Upgrade::new(
            "fire_rate_2",
            "Rapid Fire",
            "Greatly increased fire rate.",
            Uncommon,
            &[(FireRate, 0.25)],
            None,
        ),
        Upgrade::new(
            "max_quills_2",
            "Quill Overload",
            "Grow many more quills.",
            Uncommon,
            &[(MaxQuills, 10.0)],
            None,
        ),
        Upgrade::new(
            "crit_1",
            "Vital Points",
            "Chance to deal critical damage.",
            Uncommon,
            &[(CritChance, 0.1)],
            None,
        ),
        Upgrade::new(
            "multi_1",
            "Double Shot",
            "Fire an additional quill per shot.",
            Uncommon,
            &[(ProjectileCount, 1.0)],
            Some(4),
        ),
        Upgrade::new(
            "jump_1",
            "Strong Legs",
            "Jump higher.",
            Uncommon,
            &[(JumpHeight, 0.2)],
            None,
        ),
        Upgrade::new(
            "combo_damage_speed",
            "Combat Training",
            "Balanced improvement to damage and speed.",
            Uncommon,
            &[(Damage, 0.1), (MoveSpeed, 0.1)],
            None,
        ),
        Upgrade::new(
            "prosperity_2",
            "Lucky Pinecone",
            "Fortune favors the spiky.",
            Uncommon,
            &[(Prosperity, 10.0)],
            None,
        ),
        // --- Rare ---
        Upgrade::new(
            "pierce_1",
            "Piercing Quills",
            "Quills pass through one enemy.",
            Rare,
            &[(Piercing, 1.0)],
            Some(5),
        ),
        Upgrade::new(
            "bounce_1",
            "Bouncing Quills",
            "Quills bounce off walls twice.",
            Rare,
            &[(Bouncing, 2.0)],
            Some(3),
        ),
        Upgrade::new(
            "crit_2",
            "Deadly Precision",
            "Increased critical hit chance and damage.",
            Rare,
            &[(CritChance, 0.15), (CritDamage, 0.5)],
            None,
        ),
        Upgrade::new(
            "damage_3",
            "Lethal Quills",
            "Massive damage increase.",
            Rare,
            &[(Damage, 0.35)],
            None,
        ),
        Upgrade::new(
            "multi_2",
            "Triple Shot",
            "Fire two additional quills per shot.",
            Rare,
            &[(ProjectileCount, 2.0)],
            Some(2),
        ),
        Upgrade::new(
            "sustain_1",
            "Endless Quills",
            "Massive quill capacity and regeneration.",
            Rare,
            &[(MaxQuills, 15.0), (RegenRate, 0.3)],
            None,
        ),
        Upgrade::new(
            "glass_cannon",
            "Glass Cannon",
            "Huge damage boost but reduced health.",
            Rare,
            &[(Damage, 0.5), (MaxHealth, -30.0)],
            None,
        ),
        Upgrade::new(
            "vampire_1",
            "Thorned Embrace",
            "Recover a sliver of health on every hit.",
            Rare,
            &[(Vampirism, 0.03)],
            Some(3),
        ),
        Upgrade::new(
            "prosperity_3",
            "Dragon's Hoard",
            "Luck and a keen eye for weak spots.",
            Rare,
            &[(Prosperity, 15.0), (CritChance, 0.05)],
            None,
        ),
        // --- Epic ---
        Upgrade::new(
            "pierce_2",
            "Impaling Quills",
            "Quills pass through multiple enemies.",
            Epic,
            &[(Piercing, 3.0)],
            Some(2),
        ),
        Upgrade::new(
            "multi_3",
            "Shotgun Burst",
            "Fire a spread of quills.",
            Epic,
            &[(ProjectileCount, 4.0)],
            Some(2),
        ),
        Upgrade::new(
            "berserker",
            "Berserker",
            "Move and shoot faster, but deal less damage per hit.",
            Epic,
            &[(FireRate, 0.5), (MoveSpeed, 0.3), (Damage, -0.2)],
            None,
        ),
        Upgrade::new(
            "crit_master",
            "Critical Master",
            "High crit chance with devastating crits.",
            Epic,
            &[(CritChance, 0.25), (CritDamage, 1.0)],
            None,
        ),
        Upgrade::new(
            "tank",
            "Armored Porcupine",
            "Greatly increased health and quill capacity.",
            Epic,
            &[(MaxHealth, 50.0), (MaxQuills, 20.0)],
            None,
        ),
        Upgrade::new(
            "speed_demon",
            "Speed Demon",
            "Extreme movement and projectile speed.",
            Epic,
            &[(MoveSpeed, 0.4), (ProjectileSpeed, 0.5)],
            None,
        ),
        Upgrade::new(
            "guardian",
            "Guardian Shell",
            "Shield charges absorb hits outright.",
            Epic,
            &[(ShieldCharges, 2.0)],
            Some(3),
        ),
        Upgrade::new(
            "companion",
            "Quill Kin",
            "A small companion fights at your side.",
            Epic,
            &[(CompanionCount, 1.0)],
            Some(2),
        ),
        // --- Legendary ---
        Upgrade::new(
            "machine_gun",
            "Quill Storm",
            "Unleash a torrent of quills! Massive fire rate boost.",
            Legendary,
            &[(FireRate, 1.0), (ProjectileCount, 2.0), (Damage, -0.1)],
            Some(1),
        ),
        Upgrade::new(
            "sniper",
            "Sniper Quills",
            "Slower but devastating piercing shots.",
            Legendary,
            &[
                (Damage, 1.0),
                (Piercing, 5.0),
                (FireRate, -0.3),
                (ProjectileSpeed, 0.8),
            ],
            Some(1),
        ),
        Upgrade::new(
            "bouncy_doom",
            "Pinball Wizard",
            "Quills bounce everywhere, gaining damage each bounce.",
            Legendary,
            &[(Bouncing, 5.0), (Damage, 0.3), (ProjectileSpeed, 0.3)],
            Some(1),
        ),
        Upgrade::new(
            "infinite_quills",
            "Quill Infinity",
            "Absurd quill capacity with incredible regeneration.",
            Legendary,
            &[(MaxQuills, 50.0), (RegenRate, 1.0)],
            Some(1),
        ),
        Upgrade::new(
            "glass_god",
            "Glass God",
            "Incredible power, but you become very fragile.",
            Legendary,
            &[
                (Damage, 1.5),
                (CritChance, 0.3),
                (CritDamage, 1.0),
                (MaxHealth, -50.0),
            ],
            Some(1),
        ),
        Upgrade::new(
            "homing_storm",
            "Seeker Swarm",
            "Quills curve toward their prey.",
            Legendary,
            &[(HomingStrength, 0.6), (ExplosionRadius, 40.0)],
            Some(1),
        ),
    ]
}
