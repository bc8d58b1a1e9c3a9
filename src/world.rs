//! Serializable snapshot types for the rendering client.
//!
//! The core never reads rendering state back; it only exports snapshots.
//! `MapSnapshot` carries the full grid for an initial load, `Snapshot` the
//! per-frame bot state plus the tile updates queued since the last drain.

use crate::components::{BotPosition, ExpansionTimer, FactionId, SpawnPoint};
use crate::grid::{GridResource, HexGridMap, Terrain, TileUpdate};
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a single bot's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSnapshot {
    pub faction: u8,
    pub x: i32,
    pub y: i32,
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Seconds until this bot's next expansion step.
    pub time_to_next: f32,
}

/// Complete simulation state snapshot for the rendering client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current simulation tick.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub time: f32,
    /// All bot states, in faction order.
    pub bots: Vec<BotSnapshot>,
    /// Cells whose tile changed since the last snapshot.
    pub tile_updates: Vec<TileUpdate>,
    /// Owned-cell counts per faction id (neutral excluded).
    pub owned_counts: BTreeMap<u8, usize>,
}

impl Snapshot {
    /// Create a snapshot from the ECS world. Tile updates are attached by
    /// the caller, which owns the drain.
    pub fn from_world(world: &mut World, tick: u64, time: f32) -> Self {
        let mut bots = Vec::new();
        let mut query =
            world.query::<(&FactionId, &SpawnPoint, &BotPosition, &ExpansionTimer)>();
        for (faction, spawn, position, timer) in query.iter(world) {
            bots.push(BotSnapshot {
                faction: faction.0,
                x: position.0.x,
                y: position.0.y,
                spawn_x: spawn.0.x,
                spawn_y: spawn.0.y,
                time_to_next: timer.remaining,
            });
        }
        bots.sort_by_key(|b| b.faction);

        let mut owned_counts = BTreeMap::new();
        if let Some(grid) = world.get_resource::<GridResource>() {
            for cell in grid.0.cells() {
                if !cell.owner.is_neutral() {
                    *owned_counts.entry(cell.owner.0).or_insert(0) += 1;
                }
            }
        }

        Self {
            tick,
            time,
            bots,
            tile_updates: Vec::new(),
            owned_counts,
        }
    }

    /// Serialize snapshot to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize snapshot to pretty JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Full-map snapshot for the renderer's initial load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major terrain data (0 = land, 1 = water).
    pub terrain: Vec<u8>,
    /// Row-major owner ids.
    pub owners: Vec<u8>,
    /// Row-major spawn flags.
    pub spawns: Vec<bool>,
}

impl MapSnapshot {
    pub fn from_grid(grid: &HexGridMap) -> Self {
        let terrain = grid
            .cells()
            .map(|c| match c.terrain {
                Terrain::Land => 0,
                Terrain::Water => 1,
            })
            .collect();
        let owners = grid.cells().map(|c| c.owner.0).collect();
        let spawns = grid.cells().map(|c| c.is_spawn).collect();

        Self {
            width: grid.width(),
            height: grid.height(),
            terrain,
            owners,
            spawns,
        }
    }
}
