// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Effect engine: performs the structural edits of a validated closure method.
//!
//! Every pattern works on the chosen face F at ring position `pos` and its
//! captured [`Neighborhood`]. The edits are strictly local to the map passed
//! in: append new edges (each lands on exactly two faces, preserving the
//! two-sided invariant), extend or merge open faces, pull the consumed
//! entries out of the ring (inserting any freshly created single-edge faces
//! at the freed position), and close faces as they complete, which bumps the
//! size tallies.
//!
//! Edge orientation discipline: an open face's path runs from its start
//! point (first edge's `v1`) to its end point (last edge's `v2`), and the
//! ring runs start-to-end face after face. New edges are therefore created
//! pointing *forward* along the boundary walk — `push_back` onto the face
//! whose end they extend, `push_front` onto the face whose start they
//! prepend — so the path endpoints stay derivable.
//!
//! The next-side/previous-side pairs (3/6 and 4/7) differ only in the length
//! of the face they run across, so each pair shares one helper. The chosen
//! face itself closes in every pattern; that is the common tail of
//! [`apply`].

use crate::closure::method::CloseMethod;
use crate::closure::Neighborhood;
use crate::state::PlanarMap;

/// Apply `method` to the face at ring position `pos`.
///
/// The method must have been validated against this exact map state; the
/// engine asserts the shape requirements it relies on and fails fast on any
/// mismatch.
pub fn apply(map: &mut PlanarMap, pos: usize, method: CloseMethod) {
    let nb = Neighborhood::around(map, pos);
    match method {
        CloseMethod::JoinEnds => join_ends(map, &nb),
        CloseMethod::BridgeOneVertex => bridge_one_vertex(map, &nb),
        CloseMethod::CloseNextAcrossSingleton | CloseMethod::CloseNextAcrossPair => {
            close_next_across(map, &nb)
        }
        CloseMethod::ClosePrevAcrossSingleton | CloseMethod::ClosePrevAcrossPair => {
            close_prev_across(map, &nb)
        }
        CloseMethod::BridgeTwoVertices => bridge_two_vertices(map, &nb),
        CloseMethod::CloseNextToNewVertex => close_next_to_new_vertex(map, &nb),
        CloseMethod::ClosePrevToNewVertex => close_prev_to_new_vertex(map, &nb),
        CloseMethod::BridgeThreeVertices => bridge_three_vertices(map, &nb),
    }
    map.close_face(nb.face);
}

/// Method 1: one new edge from F's start point to its end point.
///
/// F closes; its two ring neighbors fuse into one open face across the new
/// edge — unless they were already the same face (two ring entries), which
/// then closes too and empties the ring.
fn join_ends(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);

    let e = map.add_edge(start, end);
    map.face_mut(nb.face).edges.push_back(e);
    map.face_mut(nb.prev).edges.push_back(e);

    map.ring.remove_positions(&[nb.pos, nb.pos_next]);
    if nb.n == 2 {
        map.close_face(nb.prev);
    } else {
        map.absorb_face(nb.prev, nb.next);
    }
}

/// Method 2: two new edges meeting at one new vertex bridge F's endpoints.
fn bridge_one_vertex(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);

    let w = map.new_vertex();
    let e1 = map.add_edge(start, w);
    map.face_mut(nb.prev).edges.push_back(e1);

    let e2 = map.add_edge(w, end);
    map.face_mut(nb.face).edges.push_back(e2);
    map.face_mut(nb.face).edges.push_back(e1);
    map.face_mut(nb.next).edges.push_front(e2);

    map.ring.remove_positions(&[nb.pos]);
}

/// Methods 3 and 6: close the next face, absorb the face beyond it (one edge
/// for method 3, two for method 6), and return to F's start point.
///
/// The previous face picks up the return edge and fuses with the face after
/// the absorbed one; with exactly four open faces those are the same face,
/// which closes, finishing the whole map.
fn close_next_across(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);

    let e1 = map.add_edge(end, map.end_point(nb.next));
    map.face_mut(nb.face).edges.push_back(e1);
    map.face_mut(nb.next).edges.push_back(e1);
    map.close_face(nb.next);

    let hinge = map.end_point(nb.next2);
    map.absorb_face(nb.face, nb.next2);

    let e2 = map.add_edge(start, hinge);
    map.face_mut(nb.face).edges.push_back(e2);
    map.face_mut(nb.prev).edges.push_back(e2);

    map.ring
        .remove_positions(&[nb.pos, nb.pos_next, nb.pos_next2, nb.pos_next3]);
    if nb.n == 4 {
        // next3 wrapped back onto prev; the return edge completed it.
        map.close_face(nb.prev);
    } else {
        map.absorb_face(nb.prev, nb.next3);
    }
}

/// Methods 4 and 7: mirror of [`close_next_across`] on the previous side.
///
/// Only reachable with six or more open faces (at four the next-side case is
/// the identical operation), so the combined full closure cannot arise here.
fn close_prev_across(map: &mut PlanarMap, nb: &Neighborhood) {
    debug_assert!(nb.n >= 6);
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);
    assert_eq!(map.end_point(nb.prev), start, "ring adjacency broken");

    let e1 = map.add_edge(map.start_point(nb.prev), start);
    map.face_mut(nb.face).edges.push_back(e1);
    map.face_mut(nb.prev).edges.push_back(e1);
    map.close_face(nb.prev);

    let hinge = map.start_point(nb.prev2);
    map.absorb_face(nb.face, nb.prev2);

    let e2 = map.add_edge(hinge, end);
    map.face_mut(nb.face).edges.push_back(e2);
    map.face_mut(nb.prev3).edges.push_back(e2);

    map.ring
        .remove_positions(&[nb.pos_prev2, nb.pos_prev, nb.pos, nb.pos_next]);
    map.absorb_face(nb.prev3, nb.next);
}

/// Method 5: three new edges through two new vertices bridge F's endpoints;
/// the middle edge becomes a fresh single-edge open face taking F's ring
/// position.
fn bridge_two_vertices(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);

    let w1 = map.new_vertex();
    let e1 = map.add_edge(start, w1);
    map.face_mut(nb.prev).edges.push_back(e1);

    let w2 = map.new_vertex();
    let e2 = map.add_edge(w1, w2);
    let fresh = map.new_singleton_face(e2);
    map.ring.replace(nb.pos, fresh);

    let e3 = map.add_edge(w2, end);
    map.face_mut(nb.face).edges.push_back(e3);
    map.face_mut(nb.face).edges.push_back(e2);
    map.face_mut(nb.face).edges.push_back(e1);
    map.face_mut(nb.next).edges.push_front(e3);
}

/// Method 8: close the next face, take in the single-edge face beyond it,
/// then return through one new vertex to F's start point.
fn close_next_to_new_vertex(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);
    assert_eq!(map.face(nb.next2).len(), 1, "expected a single-edge face");
    assert_eq!(end, map.start_point(nb.next), "ring adjacency broken");

    let e1 = map.add_edge(end, map.end_point(nb.next));
    map.face_mut(nb.face).edges.push_back(e1);
    assert_ne!(map.end_point(nb.next2), map.end_point(nb.next));
    map.face_mut(nb.next).edges.push_back(e1);
    map.close_face(nb.next);

    let hinge = map.end_point(nb.next2);
    map.absorb_face(nb.face, nb.next2);

    let w = map.new_vertex();
    let e2 = map.add_edge(w, hinge);
    map.face_mut(nb.face).edges.push_back(e2);
    map.face_mut(nb.next3).edges.push_front(e2);

    let e3 = map.add_edge(start, w);
    map.face_mut(nb.face).edges.push_back(e3);
    map.face_mut(nb.prev).edges.push_back(e3);

    map.ring
        .remove_positions(&[nb.pos, nb.pos_next, nb.pos_next2]);
}

/// Method 9: mirror of [`close_next_to_new_vertex`] on the previous side.
fn close_prev_to_new_vertex(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);
    assert_eq!(map.face(nb.prev2).len(), 1, "expected a single-edge face");
    assert_eq!(map.end_point(nb.prev), start, "ring adjacency broken");

    let e1 = map.add_edge(map.start_point(nb.prev), start);
    map.face_mut(nb.face).edges.push_back(e1);
    map.face_mut(nb.prev).edges.push_back(e1);
    map.close_face(nb.prev);

    assert_ne!(map.start_point(nb.prev2), map.start_point(nb.prev));
    let hinge = map.start_point(nb.prev2);
    map.absorb_face(nb.face, nb.prev2);

    let w = map.new_vertex();
    let e2 = map.add_edge(hinge, w);
    map.face_mut(nb.face).edges.push_back(e2);
    map.face_mut(nb.prev3).edges.push_back(e2);

    let e3 = map.add_edge(w, end);
    map.face_mut(nb.face).edges.push_back(e3);
    map.face_mut(nb.next).edges.push_front(e3);

    map.ring
        .remove_positions(&[nb.pos_prev2, nb.pos_prev, nb.pos]);
}

/// Method 10: four new edges through three new vertices bridge F's
/// endpoints; the two middle edges become fresh single-edge open faces
/// occupying F's stretch of the ring.
fn bridge_three_vertices(map: &mut PlanarMap, nb: &Neighborhood) {
    let start = map.start_point(nb.face);
    let end = map.end_point(nb.face);

    let w1 = map.new_vertex();
    let e1 = map.add_edge(start, w1);
    map.face_mut(nb.face).edges.push_back(e1);
    map.face_mut(nb.prev).edges.push_back(e1);

    let w2 = map.new_vertex();
    let e2 = map.add_edge(w1, w2);
    map.face_mut(nb.face).edges.push_back(e2);
    let fresh1 = map.new_singleton_face(e2);
    map.ring.insert(nb.pos, fresh1);

    let w3 = map.new_vertex();
    let e3 = map.add_edge(w2, w3);
    map.face_mut(nb.face).edges.push_back(e3);
    let fresh2 = map.new_singleton_face(e3);
    map.ring.replace(nb.pos + 1, fresh2);

    let e4 = map.add_edge(w3, end);
    map.face_mut(nb.face).edges.push_back(e4);
    map.face_mut(nb.next).edges.push_front(e4);
}
