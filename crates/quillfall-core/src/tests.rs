#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::modifiers::{ModifierKind, ModifierPipeline};
    use crate::state::GameStateSnapshot;
    use crate::types::{angle_difference, Position, SimTime};
    use crate::upgrades::{base_catalog, Upgrade};

    fn find(catalog: &[Upgrade], id: &str) -> Upgrade {
        catalog
            .iter()
            .find(|u| u.id == id)
            .unwrap_or_else(|| panic!("missing catalog entry {id}"))
            .clone()
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_archetype_serde() {
        let variants = vec![
            EnemyArchetype::Scurrier,
            EnemyArchetype::Spitter,
            EnemyArchetype::Swooper,
            EnemyArchetype::Shellback,
            EnemyArchetype::Burrower,
            EnemyArchetype::Splitter,
            EnemyArchetype::Splitling,
            EnemyArchetype::Mender,
            EnemyArchetype::Boss,
            EnemyArchetype::SkyBoss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_behavior_state_serde() {
        let variants = vec![
            BehaviorState::Approach,
            BehaviorState::Engage,
            BehaviorState::Special,
            BehaviorState::Recover,
            BehaviorState::Dead,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BehaviorState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::AcquireUpgrade {
            upgrade_id: "damage_1".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"AcquireUpgrade\""));
    }

    #[test]
    fn test_event_serde_tagged() {
        let event = GameEvent::WaveComplete { wave: 7 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WaveComplete\""));
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.enemies.is_empty());
    }

    // ---- Types ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_difference_wraps() {
        let a = 0.1;
        let b = std::f32::consts::TAU - 0.1;
        assert!((angle_difference(a, b) - 0.2).abs() < 1e-5);
        assert!(angle_difference(0.0, std::f32::consts::PI) <= std::f32::consts::PI + 1e-6);
    }

    #[test]
    fn test_position_angle_to() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, 0.0);
        assert!(a.angle_to(&b).abs() < 1e-6);
        let below = Position::new(0.0, 10.0);
        // +y is down, so "below" is +PI/2 in screen space.
        assert!((a.angle_to(&below) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    // ---- Modifier pipeline ----

    #[test]
    fn test_modifier_defaults_to_zero() {
        let pipeline = ModifierPipeline::new();
        assert_eq!(pipeline.modifier(ModifierKind::Damage), 0.0);
        assert_eq!(pipeline.modifier(ModifierKind::Vampirism), 0.0);
        assert_eq!(pipeline.multiplier(ModifierKind::MoveSpeed), 1.0);
    }

    #[test]
    fn test_modifier_aggregation_is_commutative() {
        let catalog = base_catalog();
        let a = find(&catalog, "damage_1");
        let b = find(&catalog, "combo_damage_speed");

        let mut forward = ModifierPipeline::new();
        forward.add_upgrade(a.clone());
        forward.add_upgrade(b.clone());

        let mut reverse = ModifierPipeline::new();
        reverse.add_upgrade(b);
        reverse.add_upgrade(a);

        for kind in [
            ModifierKind::Damage,
            ModifierKind::MoveSpeed,
            ModifierKind::FireRate,
        ] {
            assert_eq!(forward.modifier(kind), reverse.modifier(kind));
        }
        assert!((forward.modifier(ModifierKind::Damage) - 0.2).abs() < 1e-6);
        assert!((forward.modifier(ModifierKind::MoveSpeed) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_modifier_plateaus_at_stack_cap_total() {
        let catalog = base_catalog();
        let multi = find(&catalog, "multi_1");
        assert_eq!(multi.max_stacks, Some(4));

        let mut pipeline = ModifierPipeline::new();
        for _ in 0..4 {
            pipeline.add_upgrade(multi.clone());
        }
        assert_eq!(pipeline.upgrade_count("multi_1"), 4);
        assert!((pipeline.modifier(ModifierKind::ProjectileCount) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_crit_damage_multiplier_base() {
        let catalog = base_catalog();
        let mut pipeline = ModifierPipeline::new();
        assert!((pipeline.crit_damage_multiplier() - 2.0).abs() < 1e-6);

        pipeline.add_upgrade(find(&catalog, "crit_2"));
        assert!((pipeline.crit_damage_multiplier() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_pipeline_reset() {
        let catalog = base_catalog();
        let mut pipeline = ModifierPipeline::new();
        pipeline.add_upgrade(find(&catalog, "damage_1"));
        pipeline.reset();
        assert_eq!(pipeline.acquired().len(), 0);
        assert_eq!(pipeline.modifier(ModifierKind::Damage), 0.0);
    }

    // ---- Catalog sanity ----

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = base_catalog();
        for (i, u) in catalog.iter().enumerate() {
            for other in &catalog[i + 1..] {
                assert_ne!(u.id, other.id, "duplicate catalog id {}", u.id);
            }
        }
    }

    #[test]
    fn test_catalog_covers_every_rarity() {
        let catalog = base_catalog();
        for rarity in Rarity::ALL {
            assert!(
                catalog.iter().any(|u| u.rarity == rarity),
                "no catalog entry with rarity {rarity:?}"
            );
        }
    }

    #[test]
    fn test_catalog_has_prosperity_source() {
        let catalog = base_catalog();
        assert!(catalog
            .iter()
            .any(|u| u.effects.iter().any(|(k, v)| *k == ModifierKind::Prosperity && *v > 0.0)));
    }
}
