#[cfg(test)]
mod tests {
    use glam::Vec2;
    use quillfall_core::constants::*;
    use quillfall_core::enums::{BehaviorState, EnemyArchetype};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::fsm::{
        blocks_damage, evaluate, trigger_probability, BehaviorAction, BehaviorContext,
    };
    use crate::profiles::{get_profile, scaled_stats};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn make_context(
        archetype: EnemyArchetype,
        state: BehaviorState,
        position: Vec2,
        target: Vec2,
    ) -> BehaviorContext {
        let profile = get_profile(archetype);
        BehaviorContext {
            archetype,
            state,
            position,
            velocity: Vec2::ZERO,
            target,
            target_alive: true,
            grounded: !archetype.is_airborne(),
            health_frac: 1.0,
            speed: profile.base_speed,
            now_secs: 100.0,
            state_entered_secs: 100.0,
            last_fire_secs: -100.0,
            last_special_secs: -100.0,
            committed: None,
            dt: 1.0 / 60.0,
        }
    }

    #[test]
    fn test_scurrier_engages_and_chases() {
        let ctx = make_context(
            EnemyArchetype::Scurrier,
            BehaviorState::Approach,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.state_changed);
        assert_eq!(update.state, BehaviorState::Engage);
        assert!(update.velocity.x > 0.0, "should chase rightward");

        // Target to the left reverses the chase
        let ctx = make_context(
            EnemyArchetype::Scurrier,
            BehaviorState::Engage,
            Vec2::new(700.0, GROUND_Y),
            Vec2::new(200.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.velocity.x < 0.0);
    }

    #[test]
    fn test_scurrier_no_jump_at_same_height() {
        // Jump requires the target to be meaningfully above
        let ctx = make_context(
            EnemyArchetype::Scurrier,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        let mut r = rng();
        for _ in 0..200 {
            let update = evaluate(&ctx, &mut r);
            assert_eq!(update.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_scurrier_jumps_eventually_when_target_above() {
        let ctx = make_context(
            EnemyArchetype::Scurrier,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y - 200.0),
        );
        let mut r = rng();
        let jumped = (0..600).any(|_| evaluate(&ctx, &mut r).velocity.y == JUMP_VELOCITY);
        assert!(jumped, "hazard-gated jump should fire within 10 simulated seconds");
    }

    #[test]
    fn test_trigger_probability_step_invariant() {
        // Two half-steps compose to the same probability as one full step
        let p_full = trigger_probability(1.8, 1.0 / 30.0);
        let p_half = trigger_probability(1.8, 1.0 / 60.0);
        let composed = 1.0 - (1.0 - p_half) * (1.0 - p_half);
        assert!((p_full - composed).abs() < 1e-6);
        assert!(p_full > p_half);
        assert!(p_full > 0.0 && p_full < 1.0);
    }

    #[test]
    fn test_spitter_fires_on_interval() {
        let mut ctx = make_context(
            EnemyArchetype::Spitter,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(450.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.action, Some(BehaviorAction::Fire { burst: 1 }));
        assert_eq!(update.last_fire_secs, ctx.now_secs);

        // Just fired, interval not yet elapsed
        ctx.last_fire_secs = ctx.now_secs - 1.0;
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.action, None);
    }

    #[test]
    fn test_spitter_keeps_its_distance() {
        // Crowded: backs away
        let ctx = make_context(
            EnemyArchetype::Spitter,
            BehaviorState::Engage,
            Vec2::new(400.0, GROUND_Y),
            Vec2::new(450.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.velocity.x < 0.0, "should retreat from a close target");

        // Too far: advances
        let ctx = make_context(
            EnemyArchetype::Spitter,
            BehaviorState::Engage,
            Vec2::new(100.0, GROUND_Y),
            Vec2::new(450.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.velocity.x > 0.0);
    }

    #[test]
    fn test_swooper_commits_to_dive_when_aligned() {
        let target = Vec2::new(700.0, GROUND_Y);
        let ctx = make_context(
            EnemyArchetype::Swooper,
            BehaviorState::Engage,
            Vec2::new(710.0, GROUND_Y - 200.0),
            target,
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Special);
        assert_eq!(update.committed, Some(target));
        assert!(update.velocity.y > 0.0, "dive heads downward");
    }

    #[test]
    fn test_swooper_dive_ends_in_recover() {
        let target = Vec2::new(700.0, GROUND_Y);
        let mut ctx = make_context(
            EnemyArchetype::Swooper,
            BehaviorState::Special,
            Vec2::new(705.0, GROUND_Y - 10.0),
            target,
        );
        ctx.committed = Some(target);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Recover);
        assert_eq!(update.committed, None);

        // Recover hands back to Engage after the pause
        let mut ctx = make_context(
            EnemyArchetype::Swooper,
            BehaviorState::Recover,
            Vec2::new(705.0, GROUND_Y - 10.0),
            target,
        );
        ctx.state_entered_secs = ctx.now_secs - 1.0;
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Engage);
    }

    #[test]
    fn test_shellback_rolls_in_band_after_cooldown() {
        let ctx = make_context(
            EnemyArchetype::Shellback,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(400.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Special);
        assert_eq!(update.last_special_secs, ctx.now_secs);
        assert!(update.velocity.x.abs() > ctx.speed, "roll is faster than walking");

        // Cooldown still running: keeps walking
        let mut ctx = make_context(
            EnemyArchetype::Shellback,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(400.0, GROUND_Y),
        );
        ctx.last_special_secs = ctx.now_secs - 1.0;
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Engage);
    }

    #[test]
    fn test_shellback_blocks_frontal_cone_only() {
        // Facing right, hit arriving from straight ahead
        assert!(blocks_damage(
            EnemyArchetype::Shellback,
            BehaviorState::Engage,
            true,
            0.0,
        ));
        // Hit from behind goes through
        assert!(!blocks_damage(
            EnemyArchetype::Shellback,
            BehaviorState::Engage,
            true,
            std::f32::consts::PI,
        ));
        // Facing left flips the cone
        assert!(blocks_damage(
            EnemyArchetype::Shellback,
            BehaviorState::Engage,
            false,
            std::f32::consts::PI,
        ));
        // No blocking while rolling
        assert!(!blocks_damage(
            EnemyArchetype::Shellback,
            BehaviorState::Special,
            true,
            0.0,
        ));
        // Other archetypes never block
        assert!(!blocks_damage(
            EnemyArchetype::Scurrier,
            BehaviorState::Engage,
            true,
            0.0,
        ));
    }

    #[test]
    fn test_burrower_digs_in_on_spawn() {
        let ctx = make_context(
            EnemyArchetype::Burrower,
            BehaviorState::Approach,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Special);
    }

    #[test]
    fn test_burrower_surfaces_with_strike_then_reburrows() {
        let profile = get_profile(EnemyArchetype::Burrower);
        let burrow = profile.burrow.as_ref().unwrap();

        // Underground timer elapsed: surfaces and strikes
        let mut ctx = make_context(
            EnemyArchetype::Burrower,
            BehaviorState::Special,
            Vec2::new(600.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        ctx.state_entered_secs = ctx.now_secs - burrow.burrow_secs - 0.1;
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Engage);
        assert_eq!(update.action, Some(BehaviorAction::SurfaceStrike));

        // Surfaced timer elapsed: digs back in
        let mut ctx = make_context(
            EnemyArchetype::Burrower,
            BehaviorState::Engage,
            Vec2::new(600.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        ctx.state_entered_secs = ctx.now_secs - burrow.surface_secs - 0.1;
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Special);
    }

    #[test]
    fn test_mender_flees_and_pulses() {
        let ctx = make_context(
            EnemyArchetype::Mender,
            BehaviorState::Engage,
            Vec2::new(600.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert!(update.velocity.x < 0.0, "should flee a close target");
        assert_eq!(update.action, Some(BehaviorAction::HealPulse));
        assert_eq!(update.last_fire_secs, ctx.now_secs);
    }

    #[test]
    fn test_boss_phase_shifts_at_half_health() {
        let mut ctx = make_context(
            EnemyArchetype::Boss,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(900.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.boss_phase, 1);

        ctx.health_frac = 0.4;
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.boss_phase, 2);

        // Enraged phase fires faster and in bursts
        let profile = get_profile(EnemyArchetype::Boss);
        assert!(profile.phases[1].fire_interval < profile.phases[0].fire_interval);
        assert!(profile.phases[1].burst > profile.phases[0].burst);
    }

    #[test]
    fn test_boss_charge_is_cooldown_gated() {
        // In charge range but cooldown fresh: never charges
        let mut ctx = make_context(
            EnemyArchetype::Boss,
            BehaviorState::Engage,
            Vec2::new(700.0, GROUND_Y),
            Vec2::new(850.0, GROUND_Y),
        );
        ctx.last_special_secs = ctx.now_secs - 1.0;
        let mut r = rng();
        for _ in 0..300 {
            let update = evaluate(&ctx, &mut r);
            assert_ne!(update.state, BehaviorState::Special);
        }

        // Cooldown elapsed: hazard gate opens within a few seconds
        ctx.last_special_secs = -100.0;
        let charged = (0..600).any(|_| evaluate(&ctx, &mut r).state == BehaviorState::Special);
        assert!(charged);
    }

    #[test]
    fn test_sky_boss_runs_three_phases() {
        let mut ctx = make_context(
            EnemyArchetype::SkyBoss,
            BehaviorState::Engage,
            Vec2::new(200.0, 200.0),
            Vec2::new(900.0, GROUND_Y),
        );
        for (frac, phase) in [(0.9, 1), (0.5, 2), (0.2, 3)] {
            ctx.health_frac = frac;
            let update = evaluate(&ctx, &mut rng());
            assert_eq!(update.boss_phase, phase);
        }
    }

    #[test]
    fn test_no_target_holds_position() {
        let mut ctx = make_context(
            EnemyArchetype::Scurrier,
            BehaviorState::Engage,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        ctx.target_alive = false;
        ctx.velocity = Vec2::new(80.0, 5.0);
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.velocity.x, 0.0);
        assert_eq!(update.velocity.y, 5.0, "gravity still owns the vertical axis");
        assert!(!update.state_changed);
    }

    #[test]
    fn test_dead_is_terminal() {
        let ctx = make_context(
            EnemyArchetype::Scurrier,
            BehaviorState::Dead,
            Vec2::new(200.0, GROUND_Y),
            Vec2::new(700.0, GROUND_Y),
        );
        let update = evaluate(&ctx, &mut rng());
        assert_eq!(update.state, BehaviorState::Dead);
        assert_eq!(update.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_scaled_stats_respect_caps() {
        let profile = get_profile(EnemyArchetype::Scurrier);

        let base = scaled_stats(&profile, 1, None);
        assert_eq!(base.health, profile.base_health);
        assert_eq!(base.speed, profile.base_speed);

        let late = scaled_stats(&profile, 100, None);
        assert_eq!(late.health, profile.base_health * ENEMY_MAX_SCALE);
        assert_eq!(late.damage, profile.base_damage * ENEMY_MAX_SCALE);
        assert_eq!(late.speed, profile.base_speed * ENEMY_MAX_SPEED_SCALE);

        // The swarm difficulty multiplier replaces the wave scale outright:
        // escalation restarts from base health/damage, not from the cap
        let swarm_start = scaled_stats(&profile, 100, Some(1.0));
        assert_eq!(swarm_start.health, profile.base_health);
        assert_eq!(swarm_start.damage, profile.base_damage);
        // Speed keeps its own capped wave curve, untouched by the multiplier
        assert_eq!(swarm_start.speed, late.speed);

        let swarm = scaled_stats(&profile, 100, Some(2.0));
        assert_eq!(swarm.health, profile.base_health * 2.0);
        assert_eq!(swarm.damage, profile.base_damage * 2.0);
        assert_eq!(swarm.speed, late.speed);
    }
}
