//! Hexpanse - Territory Simulation Core
//!
//! A deterministic, fixed-timestep ECS simulation of territorial expansion
//! on an odd-r hexagonal grid. A generated land/water map seeds two faction
//! spawns at a controlled minimum distance; autonomous bots then claim
//! adjacent cells on a fixed interval, painting ownership outward from their
//! spawn. Uses `bevy_ecs` for the entity-component-system architecture.
//!
//! Rendering and input stay outside the core: a host drives the clock via
//! [`SimWorld::step`] and drains queued tile updates through snapshots.

pub mod api;
pub mod components;
pub mod config;
pub mod generator;
pub mod grid;
pub mod hex;
pub mod systems;
pub mod world;

pub use api::{SimError, SimWorld};
pub use components::{BotBundle, BotPosition, ExpansionTimer, FactionId, SpawnPoint};
pub use config::{BotConfig, ConfigError, MapConfig, SimConfig};
pub use generator::{generate_map, place_spawns, GenerationError, SpawnPlacement};
pub use grid::{GridResource, HexCell, HexGridMap, Terrain, TileToken, TileUpdate};
pub use hex::{CubeCoord, HexCoord};
pub use systems::{expansion_system, DeltaTime, SimRng};
pub use world::{BotSnapshot, MapSnapshot, Snapshot};
