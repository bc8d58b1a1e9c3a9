//! Territory expansion system - the bot state machine tick.
//!
//! Each bot keeps a current position on its frontier. Once per interval it
//! claims one passable neighbor, preferring cells it does not own (neutral or
//! enemy) and re-claiming its own cells only when boxed in, so it keeps
//! moving along the frontier instead of idling. A bot whose frontier is
//! fully enclosed retries from its spawn cell; if that fails too it simply
//! waits for the next interval.

use crate::components::{BotPosition, ExpansionTimer, FactionId, SpawnPoint};
use crate::grid::{GridResource, HexGridMap, TileToken};
use crate::hex::HexCoord;
use bevy_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

/// Resource containing the delta time for the current tick.
#[derive(Resource, Default)]
pub struct DeltaTime(pub f32);

/// Seeded random source shared by generation and bot decisions; the single
/// injection point for nondeterminism.
#[derive(Resource)]
pub struct SimRng(pub StdRng);

/// System that advances expansion timers and runs one expansion step for
/// every bot whose interval elapsed.
///
/// Bots are sorted by faction id before their steps apply, so two bots
/// ticking in the same fixed update cannot race for a cell: the later
/// faction observes the earlier faction's completed claim.
pub fn expansion_system(
    dt: Res<DeltaTime>,
    mut grid: ResMut<GridResource>,
    mut rng: ResMut<SimRng>,
    mut query: Query<(
        &FactionId,
        &SpawnPoint,
        &mut BotPosition,
        &mut ExpansionTimer,
    )>,
) {
    let mut bots: Vec<_> = query.iter_mut().collect();
    bots.sort_by_key(|(faction, _, _, _)| **faction);

    for (faction, spawn, mut position, mut timer) in bots {
        if !timer.advance(dt.0) {
            continue;
        }
        if let Some(target) = expand_one_step(&mut grid.0, &mut rng.0, *faction, spawn.0, position.0)
        {
            position.0 = target;
        }
    }
}

/// One expansion step: try from the current position first, then from the
/// spawn cell as stuck recovery. Returns the claimed cell, if any; `None`
/// means the bot stays put this cycle.
pub fn expand_one_step(
    grid: &mut HexGridMap,
    rng: &mut StdRng,
    faction: FactionId,
    spawn: HexCoord,
    current: HexCoord,
) -> Option<HexCoord> {
    try_expand_from(grid, rng, faction, current)
        .or_else(|| try_expand_from(grid, rng, faction, spawn))
}

/// Claim one passable neighbor of `origin` for `faction`.
///
/// Neighbors are partitioned into `preferred` (not owned by this faction)
/// and `backup` (already owned); the target is a uniform random pick from
/// the first non-empty pool. Returns the claimed cell.
pub fn try_expand_from(
    grid: &mut HexGridMap,
    rng: &mut StdRng,
    faction: FactionId,
    origin: HexCoord,
) -> Option<HexCoord> {
    let mut preferred: Vec<HexCoord> = Vec::new();
    let mut backup: Vec<HexCoord> = Vec::new();

    for neighbor in grid.neighbours(origin) {
        if !grid.is_passable_land(neighbor) {
            continue;
        }
        if grid.owner_of(neighbor) != faction {
            preferred.push(neighbor);
        } else {
            backup.push(neighbor);
        }
    }

    let pool = if !preferred.is_empty() {
        &preferred
    } else if !backup.is_empty() {
        &backup
    } else {
        return None;
    };
    let target = pool[rng.gen_range(0..pool.len())];

    grid.set_owner_and_tile(target, faction, TileToken::Faction(faction.0));
    Some(target)
}
