// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face-size quotas and the running tallies of closed faces.

use crate::geometry::{N_PENTAGONS, N_SQUARES, N_TRIANGLES};

/// The face-count targets a finished graph must respect.
///
/// The quotas must satisfy the Euler identity
/// `3·triangles + 2·squares + pentagons = 12` or no cubic planar graph with
/// faces of size 3..=6 can meet them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceQuota {
    /// Exact number of triangles (the seed supports only 1).
    pub triangles: usize,
    /// Maximum number of squares.
    pub squares: usize,
    /// Maximum number of pentagons.
    pub pentagons: usize,
}

impl FaceQuota {
    /// The built-in quota: one triangle, two squares, five pentagons.
    pub const fn canonical() -> Self {
        Self {
            triangles: N_TRIANGLES,
            squares: N_SQUARES,
            pentagons: N_PENTAGONS,
        }
    }

    /// Left-hand side of the Euler identity for these quotas.
    pub fn euler_sum(&self) -> usize {
        3 * self.triangles + 2 * self.squares + self.pentagons
    }

    /// Whether any solution can exist at all.
    pub fn is_feasible(&self) -> bool {
        self.euler_sum() == 12
    }
}

impl Default for FaceQuota {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Running tallies of closed faces by size, carried inside each map snapshot.
///
/// The triangle count is fixed at 1 by the seed and not stored. These must
/// always equal the closed-face histogram; `PlanarMap::size_check` verifies
/// that defensively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceCounts {
    pub squares: usize,
    pub pentagons: usize,
    pub hexagons: usize,
}

/// Scratch budget used by the validity oracle.
///
/// Seeded from a map's running tallies, then fed the would-be size of every
/// face a candidate closure would close; `add` reports whether the quota
/// still holds. Sizes outside 3..=6 always fail.
#[derive(Debug, Clone, Copy)]
pub struct FaceBudget {
    triangles: usize,
    squares: usize,
    pentagons: usize,
    quota: FaceQuota,
}

impl FaceBudget {
    pub fn new(counts: &FaceCounts, quota: FaceQuota) -> Self {
        Self {
            triangles: N_TRIANGLES,
            squares: counts.squares,
            pentagons: counts.pentagons,
            quota,
        }
    }

    /// Account for closing one face of the given size.
    pub fn add(&mut self, size: usize) -> bool {
        match size {
            3 => {
                self.triangles += 1;
                self.triangles <= self.quota.triangles
            }
            4 => {
                self.squares += 1;
                self.squares <= self.quota.squares
            }
            5 => {
                self.pentagons += 1;
                self.pentagons <= self.quota.pentagons
            }
            6 => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_quota_feasible() {
        assert!(FaceQuota::canonical().is_feasible());
    }

    #[test]
    fn test_hexagon_only_quota_infeasible() {
        let quota = FaceQuota {
            triangles: 1,
            squares: 0,
            pentagons: 0,
        };
        assert_eq!(quota.euler_sum(), 3);
        assert!(!quota.is_feasible());
    }

    #[test]
    fn test_budget_rejects_second_triangle() {
        let mut budget = FaceBudget::new(&FaceCounts::default(), FaceQuota::canonical());
        assert!(!budget.add(3));
    }

    #[test]
    fn test_budget_tracks_squares() {
        let mut budget = FaceBudget::new(&FaceCounts::default(), FaceQuota::canonical());
        assert!(budget.add(4));
        assert!(budget.add(4));
        assert!(!budget.add(4));
    }

    #[test]
    fn test_budget_seeded_from_running_counts() {
        let counts = FaceCounts {
            squares: 2,
            pentagons: 4,
            hexagons: 0,
        };
        let mut budget = FaceBudget::new(&counts, FaceQuota::canonical());
        assert!(!budget.add(4));
        assert!(budget.add(5));
        assert!(!budget.add(5));
    }

    #[test]
    fn test_budget_hexagons_unlimited() {
        let mut budget = FaceBudget::new(&FaceCounts::default(), FaceQuota::canonical());
        for _ in 0..100 {
            assert!(budget.add(6));
        }
    }

    #[test]
    fn test_budget_rejects_oversize() {
        let mut budget = FaceBudget::new(&FaceCounts::default(), FaceQuota::canonical());
        assert!(!budget.add(7));
        assert!(!budget.add(2));
    }
}
