// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration test walking the first-choice growth path from the seed.
//!
//! The first steps of the search are small enough to verify by hand:
//! bridging the first stub closes it as a square, joining the ends of the
//! next face closes the second square, and bridging the merged face closes
//! a hexagon but strands a lone open face — the dead end the driver prunes.

use cubic_search::closure::{advance_method, apply_chosen};
use cubic_search::{FaceQuota, PlanarMap};

#[test]
fn test_first_choice_walk() {
    let mut map = PlanarMap::seed(FaceQuota::canonical());

    // Step 1: method 2 (one-vertex bridge) is the first feasible closure.
    assert!(advance_method(&mut map));
    assert_eq!(map.method_index(), 2);
    apply_chosen(&mut map);
    assert_eq!(map.counts().squares, 1);
    assert!(map.size_check());
    map.choose_face();

    // Step 2: the grown stub joins its ends into the second square.
    assert!(advance_method(&mut map));
    assert_eq!(map.method_index(), 1);
    apply_chosen(&mut map);
    assert_eq!(map.counts().squares, 2);
    assert!(map.size_check());
    map.choose_face();

    // Step 3: the merged boundary face closes as a hexagon, leaving a single
    // open face that can never legally close.
    assert!(advance_method(&mut map));
    assert_eq!(map.method_index(), 2);
    apply_chosen(&mut map);
    assert_eq!(map.counts().hexagons, 2);
    assert_eq!(map.ring().len(), 1);
}

#[test]
fn test_walk_preserves_embedding_invariants() {
    let mut map = PlanarMap::seed(FaceQuota::canonical());
    while map.ring().len() >= 2 {
        if !advance_method(&mut map) {
            break;
        }
        apply_chosen(&mut map);
        assert!(map.check_edge_sides());
        // Consecutive open faces share a boundary vertex all the way around.
        let n = map.ring().len();
        for pos in 0..n {
            let here = map.ring().face_at(pos);
            let next = map.ring().face_at(map.ring().offset(pos, 1));
            assert_eq!(map.end_point(here), map.start_point(next));
        }
        if !map.size_check() {
            break;
        }
        map.choose_face();
    }
}
