//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering dependency), enabling deterministic testing: the player is
//! handed in as a `&mut dyn PlayerTarget` each tick and never owned.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use quillfall_ai::fsm::blocks_damage;
use quillfall_core::commands::PlayerCommand;
use quillfall_core::components::{BehaviorCtl, EnemyInfo, Health};
use quillfall_core::constants::*;
use quillfall_core::enums::{BehaviorState, EnemyArchetype, GamePhase};
use quillfall_core::events::GameEvent;
use quillfall_core::modifiers::{ModifierKind, ModifierPipeline};
use quillfall_core::state::GameStateSnapshot;
use quillfall_core::target::PlayerTarget;
use quillfall_core::types::SimTime;
use quillfall_core::upgrades::{base_catalog, Upgrade};

use crate::loot::{self, SelectionOptions};
use crate::progression::{self, ProgressionState};
use crate::scheduler::{self, WaveState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub enemies_killed: u32,
    pub waves_cleared: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    wave: WaveState,
    progression: ProgressionState,
    pipeline: ModifierPipeline,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            wave: WaveState::default(),
            progression: ProgressionState::default(),
            pipeline: ModifierPipeline::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. `player` is the external target collaborator; the engine
    /// reads its position and calls its two mutators, nothing more.
    pub fn tick(&mut self, dt: f32, player: &mut dyn PlayerTarget) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let now = self.time.elapsed_secs;

            systems::spawner::run(
                &mut self.world,
                &mut self.rng,
                &mut self.wave,
                &self.progression,
                &mut self.next_enemy_id,
                now,
                dt,
                &mut self.events,
            );
            systems::behavior::run(&mut self.world, &mut self.rng, player, now, dt, &mut self.events);
            systems::movement::run(&mut self.world, dt);

            self.progression.update_swarm(now);
            self.check_wave_completion();

            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
            self.time.advance(dt);

            if !player.is_alive() {
                self.phase = GamePhase::GameOver;
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.progression,
            self.prosperity(),
            &self.score,
            events,
        )
    }

    /// Apply damage to an enemy from the external collider.
    ///
    /// `origin_angle` is the bearing from the enemy toward the damage
    /// source; mandatory for blockers, ignored by everyone else. Returns
    /// whether the hit killed the enemy. Burrowed enemies take no damage;
    /// blocked hits leave health unchanged.
    pub fn damage_enemy(&mut self, enemy_id: u32, amount: f32, origin_angle: Option<f32>) -> bool {
        let Some((entity, archetype, state, facing_right, spawn_wave, points)) =
            self.find_enemy(enemy_id)
        else {
            return false;
        };

        if state == BehaviorState::Dead {
            return false;
        }

        // Underground enemies cannot be hit
        if archetype == EnemyArchetype::Burrower && state == BehaviorState::Special {
            return false;
        }

        debug_assert!(
            archetype != EnemyArchetype::Shellback || origin_angle.is_some(),
            "blocker damage requires an origin angle"
        );
        if let Some(angle) = origin_angle {
            if blocks_damage(archetype, state, facing_right, angle) {
                self.events.push(GameEvent::DamageBlocked { enemy_id });
                return false;
            }
        }

        let killed = match self.world.get::<&mut Health>(entity) {
            Ok(mut health) => {
                health.current = (health.current - amount).max(0.0);
                health.current <= 0.0
            }
            Err(_) => false,
        };

        if killed {
            self.kill_enemy(entity, enemy_id, archetype, spawn_wave, points);
        }
        killed
    }

    /// Draw an upgrade choice set for the UI, applying any pending
    /// rigged-chest guarantee.
    pub fn upgrade_choices(&mut self, count: usize) -> Vec<Upgrade> {
        let prosperity = self.prosperity();
        let options = if self.progression.take_rigged() {
            SelectionOptions {
                exclude_common: true,
                guarantee_rare: true,
            }
        } else {
            SelectionOptions::default()
        };
        loot::random_upgrades(&self.pipeline, count, prosperity, options, &mut self.rng)
    }

    /// Hand one pending level-up to the upgrade UI, if any.
    pub fn consume_level_up(&mut self) -> bool {
        self.progression.consume_level_up()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the modifier pipeline.
    pub fn pipeline(&self) -> &ModifierPipeline {
        &self.pipeline
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    #[cfg(test)]
    pub fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    #[cfg(test)]
    pub fn progression(&self) -> &ProgressionState {
        &self.progression
    }

    /// Spawn a single enemy directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, archetype: EnemyArchetype, wave: u32) -> u32 {
        let now = self.time.elapsed_secs;
        let (id, _) = world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            archetype,
            wave,
            None,
            now,
        );
        id
    }

    /// Clamped prosperity from the modifier pipeline.
    fn prosperity(&self) -> f32 {
        progression::clamped_prosperity(self.pipeline.modifier(ModifierKind::Prosperity))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.world.clear();
                    self.wave = WaveState::default();
                    self.progression.reset();
                    self.pipeline.reset();
                    self.score = ScoreState::default();
                    self.events.clear();
                    self.next_enemy_id = 0;
                    self.time = SimTime::default();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::StartWave => {
                if self.phase == GamePhase::Active {
                    if let Some(wave) = self.wave.start_wave(&mut self.rng) {
                        if scheduler::is_boss_wave(wave) {
                            self.events.push(GameEvent::BossWaveWarning { wave });
                        }
                    }
                }
            }
            PlayerCommand::AcquireUpgrade { upgrade_id } => {
                match base_catalog().into_iter().find(|u| u.id == upgrade_id) {
                    Some(upgrade) => {
                        let capped = upgrade
                            .max_stacks
                            .is_some_and(|cap| self.pipeline.upgrade_count(&upgrade.id) >= cap);
                        if !capped {
                            self.pipeline.add_upgrade(upgrade);
                        }
                    }
                    None => debug_assert!(false, "unknown upgrade id {upgrade_id}"),
                }
            }
            PlayerCommand::CollectChest => {
                let rigged = self.progression.collect_chest();
                self.events.push(GameEvent::ChestCollected { rigged });
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Locate an enemy by stable id and copy out what the damage path needs.
    fn find_enemy(
        &self,
        enemy_id: u32,
    ) -> Option<(hecs::Entity, EnemyArchetype, BehaviorState, bool, u32, u32)> {
        let mut query = self.world.query::<(&EnemyInfo, &BehaviorCtl)>();
        query
            .iter()
            .find(|(_, (info, _))| info.id == enemy_id)
            .map(|(entity, (info, ctl))| {
                (
                    entity,
                    info.archetype,
                    ctl.state,
                    info.facing_right,
                    info.spawn_wave,
                    info.points,
                )
            })
    }

    /// Death accounting: terminal state, kill event, score, XP, and
    /// splitter children. Runs exactly once per enemy.
    fn kill_enemy(
        &mut self,
        entity: hecs::Entity,
        enemy_id: u32,
        archetype: EnemyArchetype,
        spawn_wave: u32,
        points: u32,
    ) {
        let position = self
            .world
            .get::<&quillfall_core::types::Position>(entity)
            .map(|p| p.0)
            .unwrap_or_default();

        if let Ok(mut ctl) = self.world.get::<&mut BehaviorCtl>(entity) {
            ctl.state = BehaviorState::Dead;
            ctl.state_entered_secs = self.time.elapsed_secs;
        }

        self.score.score += points;
        self.score.enemies_killed += 1;

        let xp = progression::enemy_xp(archetype, spawn_wave);
        let before = self.progression.level;
        let gained = self.progression.add_xp(xp);
        for level in before + 1..=before + gained {
            self.events.push(GameEvent::LevelUp { level });
        }

        self.events.push(GameEvent::EnemyKilled {
            enemy_id,
            archetype,
            position,
            points,
            xp,
        });

        if archetype == EnemyArchetype::Splitter {
            let swarm_multiplier = self
                .progression
                .swarm_active
                .then_some(self.progression.difficulty_multiplier);
            let children = world_setup::spawn_splitlings(
                &mut self.world,
                &mut self.next_enemy_id,
                position,
                spawn_wave,
                swarm_multiplier,
                self.time.elapsed_secs,
            );
            for (id, pos) in children {
                self.events.push(GameEvent::EnemySpawned {
                    enemy_id: id,
                    archetype: EnemyArchetype::Splitling,
                    position: pos,
                });
            }
        }
    }

    /// Count enemies that are not in the terminal state.
    fn live_enemy_count(&self) -> u32 {
        self.world
            .query::<&BehaviorCtl>()
            .iter()
            .filter(|(_, ctl)| ctl.state != BehaviorState::Dead)
            .count() as u32
    }

    /// Close out a finished wave, and roll into the infinite swarm once the
    /// threshold wave has been cleared.
    fn check_wave_completion(&mut self) {
        if !self.wave.complete(self.live_enemy_count()) {
            return;
        }

        self.wave.is_active = false;
        self.score.waves_cleared += 1;
        self.events.push(GameEvent::WaveComplete {
            wave: self.wave.wave_number,
        });

        if self.wave.wave_number >= INFINITE_SWARM_WAVE {
            self.wave.infinite_swarm_active = true;
            self.wave.spawn_timer = 0.0;
            self.progression.activate_swarm(self.time.elapsed_secs);
            self.events.push(GameEvent::InfiniteSwarmStarted);
        }
    }
}
