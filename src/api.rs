//! Public API for the simulation.
//!
//! This module provides the main interface for a rendering host (or a
//! headless driver) to interact with the simulation.
//!
//! ## Fixed Timestep
//!
//! The simulation uses a fixed timestep internally. When `step(dt)` is
//! called, time accumulates and fixed updates run as needed, so behavior is
//! deterministic regardless of the caller's frame rate.
//!
//! ## Two-Phase Lifecycle
//!
//! Construction is strictly ordered: the grid is generated and both spawns
//! are placed before any bot entity exists. Bots claim their spawn cell as
//! part of construction, so there is no window where a bot can observe a
//! half-built map.

use crate::components::{BotBundle, BotPosition, ExpansionTimer, FactionId, SpawnPoint};
use crate::config::{ConfigError, SimConfig};
use crate::generator::{generate_map, place_spawns, GenerationError, SpawnPlacement};
use crate::grid::{GridResource, HexGridMap, TileToken};
use crate::hex::HexCoord;
use crate::systems::{expansion_system, DeltaTime, SimRng};
use crate::world::{MapSnapshot, Snapshot};
use bevy_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

/// Failure to build a simulation world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// The main simulation world container.
///
/// Holds the ECS world and schedule, providing a clean API for:
/// - Building the simulation from a validated configuration
/// - Stepping the simulation forward
/// - Extracting state snapshots for the renderer
pub struct SimWorld {
    world: World,
    schedule: Schedule,
    tick: u64,
    time: f32,
    fixed_timestep: f32,
    /// Accumulated time for the fixed timestep.
    time_accumulator: f32,
    spawns: SpawnPlacement,
}

impl SimWorld {
    /// Build a world from `config`.
    ///
    /// Rejects invalid configuration and maps without enough land for two
    /// spawns; on error no world state is retained.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.map.seed);
        let mut grid = generate_map(&config.map, &mut rng);
        let spawns = place_spawns(&mut grid, config.map.min_spawn_distance, &mut rng)?;

        let mut world = World::new();
        world.insert_resource(DeltaTime(config.fixed_timestep));

        // Bots come into existence only once the grid is complete. Each one
        // claims its starting cell through the regular ownership path.
        for bot in &config.bots {
            let start = if bot.spawn_slot == 2 {
                spawns.second
            } else {
                spawns.first
            };
            grid.set_owner_and_tile(start, FactionId(bot.faction), TileToken::Faction(bot.faction));
            world.spawn(BotBundle {
                faction: FactionId(bot.faction),
                spawn: SpawnPoint(start),
                position: BotPosition(start),
                timer: ExpansionTimer::new(bot.expansion_interval),
            });
        }

        let fixed_timestep = config.fixed_timestep;
        world.insert_resource(SimRng(rng));
        world.insert_resource(GridResource(grid));
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.add_systems(expansion_system);

        Ok(Self {
            world,
            schedule,
            tick: 0,
            time: 0.0,
            fixed_timestep,
            time_accumulator: 0.0,
            spawns,
        })
    }

    /// Step the simulation forward by `dt` seconds.
    ///
    /// Accumulates time and runs fixed updates as needed.
    pub fn step(&mut self, dt: f32) {
        self.time_accumulator += dt;
        while self.time_accumulator >= self.fixed_timestep {
            self.fixed_update(self.fixed_timestep);
            self.time_accumulator -= self.fixed_timestep;
        }
    }

    /// Run a single fixed timestep update.
    fn fixed_update(&mut self, dt: f32) {
        if let Some(mut dt_res) = self.world.get_resource_mut::<DeltaTime>() {
            dt_res.0 = dt;
        }
        self.schedule.run(&mut self.world);
        self.tick += 1;
        self.time += dt;
    }

    /// Get a snapshot of the current simulation state, draining the queued
    /// tile updates into it.
    pub fn snapshot(&mut self) -> Snapshot {
        let mut snapshot = Snapshot::from_world(&mut self.world, self.tick, self.time);
        if let Some(mut grid) = self.world.get_resource_mut::<GridResource>() {
            snapshot.tile_updates = grid.0.drain_tile_updates();
        }
        snapshot
    }

    /// Get the snapshot as a JSON string.
    pub fn snapshot_json(&mut self) -> String {
        self.snapshot().to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Get a full map snapshot (for the renderer's initial load).
    pub fn map_snapshot(&self) -> MapSnapshot {
        self.world
            .get_resource::<GridResource>()
            .map(|grid| MapSnapshot::from_grid(&grid.0))
            .unwrap_or_default()
    }

    /// Get the current tick number.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Get the elapsed simulation time.
    pub fn current_time(&self) -> f32 {
        self.time
    }

    /// The spawn placement chosen at generation time.
    pub fn spawn_placement(&self) -> SpawnPlacement {
        self.spawns
    }

    /// Owner of a cell; neutral for out-of-range coordinates.
    pub fn owner_of(&self, coord: HexCoord) -> FactionId {
        self.world
            .get_resource::<GridResource>()
            .map(|grid| grid.0.owner_of(coord))
            .unwrap_or(FactionId::NEUTRAL)
    }

    /// Read access to the grid map.
    pub fn grid(&self) -> Option<&HexGridMap> {
        self.world.get_resource::<GridResource>().map(|grid| &grid.0)
    }

    /// Get direct access to the ECS world (for advanced usage).
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world (for advanced usage).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
