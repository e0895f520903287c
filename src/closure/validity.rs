// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Feasibility oracle for the closure methods.
//!
//! [`is_valid`] is a pure predicate: given the map, the chosen face's ring
//! position, and a candidate method, it decides whether applying the method
//! keeps the map within the face-size budget. It performs no mutation.
//!
//! The rules shared by all methods:
//! - a face left open by the operation must not exceed size 4, since it will
//!   receive at least one further edge and size 6 is the ceiling; for the
//!   methods that give one edge each to a pair of faces that later merge, the
//!   *sum* of the pair's sizes is bounded by 4 instead;
//! - every face the operation closes has its resulting size charged against
//!   the remaining quota (triangle already spent by the seed, squares and
//!   pentagons limited, hexagons free; anything outside 3..=6 rejected);
//! - methods that need a specific neighbor shape (a single-edge or two-edge
//!   face two ring steps away) reject otherwise;
//! - the next-side methods 3 and 6 need at least four open faces and have a
//!   combined closure when exactly four remain (the return edge then lands on
//!   the face before F, closing everything at once); with five they would
//!   strand a lone open face, so five is rejected. Their previous-side
//!   mirrors 4 and 7 need at least six, because at four the next-side case is
//!   the same operation. Methods 8 and 9 need at least five.

use crate::closure::method::CloseMethod;
use crate::closure::Neighborhood;
use crate::state::{FaceBudget, PlanarMap};

/// Decide whether `method` can close the face at ring position `pos`.
pub fn is_valid(map: &PlanarMap, pos: usize, method: CloseMethod) -> bool {
    let nb = Neighborhood::around(map, pos);
    let n = nb.n;
    let len = |id| map.face(id).len();
    let f = len(nb.face);
    assert!(f > 1, "chosen open face has a single edge");
    let mut budget = FaceBudget::new(map.counts(), map.quota());

    match method {
        CloseMethod::JoinEnds => {
            if n > 2 && len(nb.prev) + len(nb.next) > 4 {
                return false;
            }
            // With two ring entries the lone neighbor closes as well.
            if n == 2 && !budget.add(len(nb.next) + 1) {
                return false;
            }
            budget.add(f + 1)
        }
        CloseMethod::BridgeOneVertex => {
            if len(nb.prev) > 4 || len(nb.next) > 4 {
                return false;
            }
            budget.add(f + 2)
        }
        CloseMethod::CloseNextAcrossSingleton => {
            if n < 4 || n == 5 {
                return false;
            }
            if len(nb.next2) != 1 {
                return false;
            }
            if !budget.add(len(nb.next) + 1) {
                return false;
            }
            if n > 4 && len(nb.prev) + len(nb.next3) > 4 {
                return false;
            }
            if n == 4 && !budget.add(len(nb.prev) + 1) {
                return false;
            }
            budget.add(f + 3)
        }
        CloseMethod::ClosePrevAcrossSingleton => {
            // With four open faces this is the next-side case.
            if n < 6 {
                return false;
            }
            if len(nb.prev2) != 1 {
                return false;
            }
            if !budget.add(len(nb.prev) + 1) {
                return false;
            }
            if len(nb.prev3) + len(nb.next) > 4 {
                return false;
            }
            budget.add(f + 3)
        }
        CloseMethod::BridgeTwoVertices => {
            if len(nb.prev) > 4 || len(nb.next) > 4 {
                return false;
            }
            budget.add(f + 3)
        }
        CloseMethod::CloseNextAcrossPair => {
            if n < 4 || n == 5 {
                return false;
            }
            if len(nb.next2) != 2 {
                return false;
            }
            if !budget.add(len(nb.next) + 1) {
                return false;
            }
            if n > 4 && len(nb.prev) + len(nb.next3) > 4 {
                return false;
            }
            if n == 4 && !budget.add(len(nb.prev) + 1) {
                return false;
            }
            budget.add(f + 4)
        }
        CloseMethod::ClosePrevAcrossPair => {
            // With four open faces this is the next-side case.
            if n < 6 {
                return false;
            }
            if len(nb.prev2) != 2 {
                return false;
            }
            if !budget.add(len(nb.prev) + 1) {
                return false;
            }
            if len(nb.prev3) + len(nb.next) > 4 {
                return false;
            }
            budget.add(f + 4)
        }
        CloseMethod::CloseNextToNewVertex => {
            if n < 5 {
                return false;
            }
            if len(nb.next2) != 1 {
                return false;
            }
            if len(nb.prev) > 4 || len(nb.next3) > 4 {
                return false;
            }
            if !budget.add(len(nb.next) + 1) {
                return false;
            }
            budget.add(f + 4)
        }
        CloseMethod::ClosePrevToNewVertex => {
            if n < 5 {
                return false;
            }
            if len(nb.prev2) != 1 {
                return false;
            }
            if len(nb.next) > 4 || len(nb.prev3) > 4 {
                return false;
            }
            if !budget.add(len(nb.prev) + 1) {
                return false;
            }
            budget.add(f + 4)
        }
        CloseMethod::BridgeThreeVertices => {
            if len(nb.prev) > 4 || len(nb.next) > 4 {
                return false;
            }
            budget.add(f + 4)
        }
    }
}
