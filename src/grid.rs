//! Hex grid map - cell storage, terrain, ownership, and the tile-update
//! queue consumed by the external renderer.
//!
//! The grid is the only authority on cell state. Bots hold coordinates, never
//! cell data, and funnel every ownership change through
//! [`HexGridMap::set_owner_and_tile`] so renderer notifications cannot drift
//! from the simulation state.

use crate::components::FactionId;
use crate::hex::HexCoord;
use bevy_ecs::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Resource owning the grid map shared by generation and the bot systems.
#[derive(Resource, Debug)]
pub struct GridResource(pub HexGridMap);

/// Terrain type of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Land,
    Water,
}

/// Opaque token telling the renderer which tile art to place on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileToken {
    Land,
    Water,
    Spawn,
    Faction(u8),
}

/// A queued render request for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileUpdate {
    pub x: i32,
    pub y: i32,
    pub token: TileToken,
}

/// One grid location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HexCell {
    pub coord: HexCoord,
    pub terrain: Terrain,
    /// Always equals `terrain == Land`; stored separately because movement
    /// queries only care about passability.
    pub passable: bool,
    /// Owning faction; neutral until claimed.
    pub owner: FactionId,
    /// True only for the two generator-chosen spawn cells.
    pub is_spawn: bool,
    /// Reserved for a future mining mechanic; never set by current systems.
    pub has_mine: bool,
}

/// Rectangular map of hex cells in odd-r offset coordinates.
///
/// Exactly one cell exists per coordinate in `[0,width) x [0,height)`,
/// stored row-major. Terrain and passability are fixed after generation;
/// only ownership and spawn flags mutate.
#[derive(Debug, Clone)]
pub struct HexGridMap {
    width: i32,
    height: i32,
    cells: Vec<HexCell>,
    /// Render requests queued since the last drain.
    pending_tiles: Vec<TileUpdate>,
}

impl HexGridMap {
    /// Build a grid with terrain chosen by `terrain_at`.
    ///
    /// Queues the initial terrain tile for every cell so a renderer can draw
    /// the map from the first drained batch.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut terrain_at: impl FnMut(HexCoord) -> Terrain,
    ) -> Self {
        let mut cells = Vec::with_capacity((width.max(0) * height.max(0)) as usize);
        for y in 0..height {
            for x in 0..width {
                let coord = HexCoord::new(x, y);
                let terrain = terrain_at(coord);
                cells.push(HexCell {
                    coord,
                    terrain,
                    passable: terrain == Terrain::Land,
                    owner: FactionId::NEUTRAL,
                    is_spawn: false,
                    has_mine: false,
                });
            }
        }

        let pending_tiles = cells
            .iter()
            .map(|cell| TileUpdate {
                x: cell.coord.x,
                y: cell.coord.y,
                token: match cell.terrain {
                    Terrain::Land => TileToken::Land,
                    Terrain::Water => TileToken::Water,
                },
            })
            .collect();

        Self {
            width,
            height,
            cells,
            pending_tiles,
        }
    }

    /// Build a grid with randomized terrain: each cell draws one sample and
    /// becomes water when it falls below `water_probability`. Deterministic
    /// for a seeded random source.
    pub fn build(
        width: i32,
        height: i32,
        water_probability: f32,
        rng: &mut impl Rng,
    ) -> Self {
        Self::from_fn(width, height, |_| {
            if rng.gen::<f32>() < water_probability {
                Terrain::Water
            } else {
                Terrain::Land
            }
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, coord: HexCoord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    fn index_of(&self, coord: HexCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some((coord.y * self.width + coord.x) as usize)
        } else {
            None
        }
    }

    /// The cell at `coord`, or `None` when out of range.
    pub fn cell(&self, coord: HexCoord) -> Option<&HexCell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    /// True for in-range land cells; false for water or out-of-range.
    pub fn is_passable_land(&self, coord: HexCoord) -> bool {
        self.cell(coord).map(|c| c.passable).unwrap_or(false)
    }

    /// Owner of the cell; out-of-range and unclaimed cells read as neutral.
    pub fn owner_of(&self, coord: HexCoord) -> FactionId {
        self.cell(coord).map(|c| c.owner).unwrap_or(FactionId::NEUTRAL)
    }

    /// The single mutation path for ownership: set the owner and queue the
    /// matching render request. Silent no-op when `coord` is out of range.
    pub fn set_owner_and_tile(&mut self, coord: HexCoord, owner: FactionId, token: TileToken) {
        if let Some(i) = self.index_of(coord) {
            self.cells[i].owner = owner;
            self.pending_tiles.push(TileUpdate {
                x: coord.x,
                y: coord.y,
                token,
            });
        }
    }

    /// Mark a generator-chosen spawn cell: sets the spawn flag and starting
    /// owner and queues the distinct spawn tile. Generation-time only.
    pub fn mark_spawn(&mut self, coord: HexCoord, owner: FactionId) {
        if let Some(i) = self.index_of(coord) {
            self.cells[i].is_spawn = true;
            self.cells[i].owner = owner;
            self.pending_tiles.push(TileUpdate {
                x: coord.x,
                y: coord.y,
                token: TileToken::Spawn,
            });
        }
    }

    /// In-bounds neighbors of `coord` under this map's dimensions.
    pub fn neighbours(&self, coord: HexCoord) -> Vec<HexCoord> {
        coord.neighbors_in_bounds(self.width, self.height)
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    /// Number of passable land cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.passable).count()
    }

    /// Number of cells owned by `faction`.
    pub fn count_owned_by(&self, faction: FactionId) -> usize {
        self.cells.iter().filter(|c| c.owner == faction).count()
    }

    /// Hand the queued render requests to the host, clearing the queue.
    pub fn drain_tile_updates(&mut self) -> Vec<TileUpdate> {
        std::mem::take(&mut self.pending_tiles)
    }
}
