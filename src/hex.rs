//! Hex coordinate math for odd-r (pointy-top) offset grids.
//!
//! Offset coordinates address cells the way the tilemap lays them out; cube
//! coordinates (x + y + z = 0) are derived only for distance arithmetic.

use serde::{Deserialize, Serialize};

/// Offset "odd-r" hex coordinate. Odd rows are shifted half a cell right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

/// Cube coordinate with the invariant x + y + z == 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Neighbor offsets for even rows, starting east and winding through the
/// row above first.
const EVEN_ROW_NEIGHBORS: [(i32, i32); 6] = [
    (1, 0),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Neighbor offsets for odd rows, same winding order as the even table.
const ODD_ROW_NEIGHBORS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, 1),
];

impl HexCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to cube coordinates. Only odd rows shift, so the standard
    /// `(y - (y & 1)) / 2` form is used rather than a plain `y / 2`.
    pub fn to_cube(self) -> CubeCoord {
        let x = self.x - (self.y - (self.y & 1)) / 2;
        let z = self.y;
        let y = -x - z;
        CubeCoord { x, y, z }
    }

    /// Hex-grid distance to `other`, in steps between adjacent cells.
    pub fn distance_to(self, other: HexCoord) -> u32 {
        let a = self.to_cube();
        let b = other.to_cube();
        (((a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()) / 2) as u32
    }

    /// The up-to-6 grid-adjacent coordinates inside `[0,width) x [0,height)`.
    ///
    /// The direction table depends on row parity; translating cube deltas
    /// back to offset coordinates does not produce the right adjacency, so
    /// both tables are spelled out. Order is fixed and deterministic.
    pub fn neighbors_in_bounds(self, width: i32, height: i32) -> Vec<HexCoord> {
        let table = if self.y & 1 == 0 {
            &EVEN_ROW_NEIGHBORS
        } else {
            &ODD_ROW_NEIGHBORS
        };

        table
            .iter()
            .map(|&(dx, dy)| HexCoord::new(self.x + dx, self.y + dy))
            .filter(|c| c.x >= 0 && c.x < width && c.y >= 0 && c.y < height)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_invariant() {
        for y in -3..8 {
            for x in -3..8 {
                let c = HexCoord::new(x, y).to_cube();
                assert_eq!(c.x + c.y + c.z, 0, "broken at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for y in 0..6 {
            for x in 0..6 {
                let h = HexCoord::new(x, y);
                assert_eq!(h.distance_to(h), 0);
            }
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        for ay in 0..5 {
            for ax in 0..5 {
                for by in 0..5 {
                    for bx in 0..5 {
                        let a = HexCoord::new(ax, ay);
                        let b = HexCoord::new(bx, by);
                        assert_eq!(a.distance_to(b), b.distance_to(a));
                    }
                }
            }
        }
    }

    #[test]
    fn test_distance_triangle_inequality() {
        let sample: Vec<HexCoord> = (0..4)
            .flat_map(|y| (0..4).map(move |x| HexCoord::new(x, y)))
            .collect();
        for &a in &sample {
            for &b in &sample {
                for &c in &sample {
                    assert!(a.distance_to(b) <= a.distance_to(c) + c.distance_to(b));
                }
            }
        }
    }

    #[test]
    fn test_known_distances() {
        let origin = HexCoord::new(0, 0);
        assert_eq!(origin.distance_to(HexCoord::new(1, 0)), 1);
        assert_eq!(origin.distance_to(HexCoord::new(0, 1)), 1);
        assert_eq!(origin.distance_to(HexCoord::new(4, 0)), 4);
        // Corner to corner of a 5x5 map.
        assert_eq!(origin.distance_to(HexCoord::new(4, 4)), 6);
    }

    #[test]
    fn test_interior_cell_has_six_neighbors() {
        let n = HexCoord::new(3, 3).neighbors_in_bounds(7, 7);
        assert_eq!(n.len(), 6);
    }

    #[test]
    fn test_corner_cell_has_two_neighbors() {
        let n = HexCoord::new(0, 0).neighbors_in_bounds(5, 5);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&HexCoord::new(1, 0)));
        assert!(n.contains(&HexCoord::new(0, 1)));
    }

    #[test]
    fn test_odd_row_edge_cell() {
        // (0, 1) sits on the left edge of an odd row; only the westward
        // offset falls outside the map.
        let n = HexCoord::new(0, 1).neighbors_in_bounds(5, 5);
        assert_eq!(n.len(), 5);
        assert!(!n.contains(&HexCoord::new(-1, 1)));
    }

    #[test]
    fn test_neighbors_are_distinct_in_bounds_and_adjacent() {
        for y in 0..6 {
            for x in 0..6 {
                let h = HexCoord::new(x, y);
                let neighbors = h.neighbors_in_bounds(6, 6);
                assert!(neighbors.len() <= 6);
                for (i, &n) in neighbors.iter().enumerate() {
                    assert!(n.x >= 0 && n.x < 6 && n.y >= 0 && n.y < 6);
                    assert_eq!(h.distance_to(n), 1, "{h:?} -> {n:?}");
                    assert!(!neighbors[..i].contains(&n), "duplicate neighbor {n:?}");
                }
            }
        }
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        for y in 0..6 {
            for x in 0..6 {
                let h = HexCoord::new(x, y);
                for n in h.neighbors_in_bounds(6, 6) {
                    assert!(
                        n.neighbors_in_bounds(6, 6).contains(&h),
                        "{h:?} in neighbors of {n:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_neighbor_order_is_stable() {
        let h = HexCoord::new(2, 3);
        assert_eq!(h.neighbors_in_bounds(8, 8), h.neighbors_in_bounds(8, 8));
    }
}
