// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Closing open faces: the ten insertion patterns, their feasibility oracle,
//! and the engine that applies them.
//!
//! A closure step always acts on the map's chosen face F (addressed by its
//! ring position) and looks at up to three ring neighbors on either side.
//! [`validity::is_valid`] is the pure predicate deciding whether a method
//! keeps the map inside the face-size budget and the planarity invariants;
//! [`apply::apply`] performs the structural edits of a validated method.
//!
//! The split mirrors the search contract: the oracle is queried with an
//! incrementing method counter until one passes or all ten are exhausted, and
//! only then does the driver snapshot the map and mutate it.

pub mod apply;
pub mod method;
pub mod validity;

pub use method::CloseMethod;

use crate::geometry::FaceId;
use crate::geometry::NUM_METHODS;
use crate::state::PlanarMap;

/// The chosen face and its six nearest ring neighbors, resolved to arena ids.
///
/// Positions wrap modulo the ring length, so with a short ring several fields
/// alias the same face (with two entries `prev == next`; with four,
/// `next3 == prev`). The closure patterns rely on exactly that aliasing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Neighborhood {
    /// Ring length at capture time.
    pub n: usize,
    pub prev3: FaceId,
    pub prev2: FaceId,
    pub prev: FaceId,
    pub face: FaceId,
    pub next: FaceId,
    pub next2: FaceId,
    pub next3: FaceId,
    pub pos_prev2: usize,
    pub pos_prev: usize,
    pub pos: usize,
    pub pos_next: usize,
    pub pos_next2: usize,
    pub pos_next3: usize,
}

impl Neighborhood {
    pub fn around(map: &PlanarMap, pos: usize) -> Self {
        let ring = map.ring();
        let at = |delta: isize| ring.face_at(ring.offset(pos, delta));
        Self {
            n: ring.len(),
            prev3: at(-3),
            prev2: at(-2),
            prev: at(-1),
            face: at(0),
            next: at(1),
            next2: at(2),
            next3: at(3),
            pos_prev2: ring.offset(pos, -2),
            pos_prev: ring.offset(pos, -1),
            pos,
            pos_next: ring.offset(pos, 1),
            pos_next2: ring.offset(pos, 2),
            pos_next3: ring.offset(pos, 3),
        }
    }
}

/// Advance the map's method counter to the next feasible closure method for
/// the chosen face, monotonically through 1..=10.
///
/// Returns false when no (further) method is feasible; the driver then
/// backtracks. Never revisits an index below the current one, which is what
/// makes each search-tree branch explored exactly once.
pub fn advance_method(map: &mut PlanarMap) -> bool {
    while map.method < NUM_METHODS {
        map.method += 1;
        let method = CloseMethod::from_index(map.method)
            .expect("method counter ran past the method table");
        if validity::is_valid(map, map.chosen_face, method) {
            return true;
        }
    }
    false
}

/// Apply the map's current (validated) method to its chosen face.
pub fn apply_chosen(map: &mut PlanarMap) {
    let method = CloseMethod::from_index(map.method)
        .expect("applying with no method selected");
    let pos = map.chosen_face;
    apply::apply(map, pos, method);
}
