//! Map generation - terrain randomization and spawn placement.
//!
//! Generation is strictly two-phase: the grid is fully built, then the two
//! faction spawns are chosen from passable land under a minimum hex-distance
//! constraint. Placement degrades gracefully to the farthest available cell
//! when the constraint cannot be satisfied; only a map with fewer than two
//! land cells is a hard failure.

use crate::components::FactionId;
use crate::config::MapConfig;
use crate::grid::HexGridMap;
use crate::hex::HexCoord;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Failure to produce a usable map. No partial grid escapes: on error the
/// caller discards everything built so far.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("map has {land_cells} passable land cell(s), need at least 2 for spawns")]
    InsufficientLand { land_cells: usize },
}

/// Outcome of spawn placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPlacement {
    /// Spawn for faction 1.
    pub first: HexCoord,
    /// Spawn for faction 2.
    pub second: HexCoord,
    /// Hex distance between the two spawns.
    pub distance: u32,
    /// False when no candidate satisfied the minimum distance and the
    /// farthest available cell was used instead.
    pub constraint_met: bool,
}

/// Build a grid from the configured dimensions and water probability.
pub fn generate_map(config: &MapConfig, rng: &mut impl Rng) -> HexGridMap {
    let grid = HexGridMap::build(
        config.width,
        config.height,
        config.water_probability,
        rng,
    );
    info!(
        width = config.width,
        height = config.height,
        land = grid.passable_count(),
        "generated map"
    );
    grid
}

/// Choose and mark the two faction spawns.
///
/// The first spawn is uniform over all passable land. The second is uniform
/// over the cells at least `min_spawn_distance` away from the first, falling
/// back to the single farthest cell when that set is empty. Ties are broken
/// by uniform random choice, never by scan order.
pub fn place_spawns(
    grid: &mut HexGridMap,
    min_spawn_distance: u32,
    rng: &mut impl Rng,
) -> Result<SpawnPlacement, GenerationError> {
    let candidates: Vec<HexCoord> = grid
        .cells()
        .filter(|c| c.passable)
        .map(|c| c.coord)
        .collect();

    if candidates.len() < 2 {
        return Err(GenerationError::InsufficientLand {
            land_cells: candidates.len(),
        });
    }

    let first = candidates[rng.gen_range(0..candidates.len())];

    let mut farthest = first;
    let mut max_distance = 0u32;
    let mut far_enough: Vec<HexCoord> = Vec::new();
    for &candidate in &candidates {
        let d = first.distance_to(candidate);
        if d > max_distance {
            max_distance = d;
            farthest = candidate;
        }
        // Excluding the first spawn keeps the pair distinct even at
        // min_spawn_distance 0.
        if d >= min_spawn_distance && candidate != first {
            far_enough.push(candidate);
        }
    }

    let (second, constraint_met) = if far_enough.is_empty() {
        warn!(
            min_spawn_distance,
            max_distance, "no cell satisfies the minimum spawn distance, using farthest"
        );
        (farthest, false)
    } else {
        (far_enough[rng.gen_range(0..far_enough.len())], true)
    };

    grid.mark_spawn(first, FactionId(1));
    grid.mark_spawn(second, FactionId(2));

    let distance = first.distance_to(second);
    info!(?first, ?second, distance, "placed spawns");

    Ok(SpawnPlacement {
        first,
        second,
        distance,
        constraint_met,
    })
}
