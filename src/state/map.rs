// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The mutable planar map: vertices, edges, faces, and the open-face ring.
//!
//! A [`PlanarMap`] is the complete state of one node of the search tree: the
//! partial cubic planar embedding plus the search cursor (which open face is
//! being closed and which closure method was last tried). The driver snapshots
//! whole maps onto its stack, so everything here — including the face tallies —
//! travels with each copy and is restored by a plain pop on backtracking.
//!
//! The map starts from a fixed seed: a triangle sharing an edge with a
//! hexagon, surrounded by five open stub faces. That seed realizes the unique
//! triangle every accepted graph contains, so the triangle tally is fixed at 1
//! from the start.
//!
//! # Embedding invariants
//!
//! - every edge lies on exactly two live (open or closed) faces;
//! - an open face is a path: its first edge's `v1` and last edge's `v2` are
//!   the two boundary vertices of degree < 3, and neither may also appear on
//!   the adjacent path edge (checked, fatal on violation);
//! - consecutive ring entries share a boundary vertex: the end point of each
//!   open face is the start point of the next around the ring;
//! - closed faces have size 3..=6 and the tallies match the closed-face
//!   histogram exactly.

use crate::geometry::{Edge, EdgeId, Face, FaceId, FaceStatus, VertexId};
use crate::state::counters::{FaceCounts, FaceQuota};
use crate::state::ring::OpenRing;

/// One node of the search tree: a partial cubic planar map plus the cursor
/// state of the backtracking driver.
#[derive(Debug, Clone)]
pub struct PlanarMap {
    pub(crate) num_vertices: u32,
    pub(crate) edges: Vec<Edge>,
    /// Face arena; never compacted, absorbed faces stay as tombstones.
    pub(crate) faces: Vec<Face>,
    pub(crate) ring: OpenRing,
    pub(crate) counts: FaceCounts,
    pub(crate) quota: FaceQuota,
    /// Ring position of the face currently being closed.
    pub(crate) chosen_face: usize,
    /// Closure method last tried on the chosen face; 0 = none yet.
    pub(crate) method: u8,
}

impl PlanarMap {
    /// The fixed seed: a triangle (vertices 1,2,3) adjacent to one hexagon
    /// (vertices 3..=7), with five open stub faces completing the boundary.
    ///
    /// Faces 2 and 3 of the arena are the two stubs adjacent to the triangle;
    /// the driver's mirror-symmetry prune refers to them by these ids.
    pub fn seed(quota: FaceQuota) -> Self {
        let edges = vec![
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(1, 3),
            Edge::new(3, 4),
            Edge::new(4, 5),
            Edge::new(5, 6),
            Edge::new(6, 7),
            Edge::new(7, 1),
        ];
        let faces = vec![
            Face::closed([0, 1, 2]),
            Face::closed([2, 3, 4, 5, 6, 7]),
            Face::open([7, 0]),
            Face::open([1, 3]),
            Face::open([4]),
            Face::open([5]),
            Face::open([6]),
        ];
        Self {
            num_vertices: 7,
            edges,
            faces,
            ring: OpenRing::new(vec![2, 3, 4, 5, 6]),
            counts: FaceCounts {
                squares: 0,
                pentagons: 0,
                hexagons: 1,
            },
            quota,
            chosen_face: 0,
            method: 0,
        }
    }

    pub fn num_vertices(&self) -> u32 {
        self.num_vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }

    pub(crate) fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id]
    }

    pub fn ring(&self) -> &OpenRing {
        &self.ring
    }

    pub fn counts(&self) -> &FaceCounts {
        &self.counts
    }

    pub fn quota(&self) -> FaceQuota {
        self.quota
    }

    pub fn chosen_face(&self) -> usize {
        self.chosen_face
    }

    /// The closure method last tried on the chosen face; 0 before any try.
    pub fn method_index(&self) -> u8 {
        self.method
    }

    /// Number of faces that exist in the embedding (open + closed; absorbed
    /// tombstones excluded).
    pub fn live_face_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.is_absorbed()).count()
    }

    /// Size of the face arena, tombstones included; valid `FaceId`s are
    /// `0..face_arena_len()`.
    pub fn face_arena_len(&self) -> usize {
        self.faces.len()
    }

    /// Allocate the next vertex id.
    pub(crate) fn new_vertex(&mut self) -> VertexId {
        self.num_vertices += 1;
        self.num_vertices
    }

    /// Append an edge; its id is its position in the sequence.
    pub(crate) fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> EdgeId {
        self.edges.push(Edge::new(v1, v2));
        self.edges.len() - 1
    }

    /// Register a brand-new singleton open face for `edge` in the arena.
    pub(crate) fn new_singleton_face(&mut self, edge: EdgeId) -> FaceId {
        self.faces.push(Face::open([edge]));
        self.faces.len() - 1
    }

    /// The free vertex at the head of an open face's path.
    ///
    /// Only defined for open faces: closed faces are not kept in cyclic
    /// order. For a single-edge path this is the edge's `v1`; for longer
    /// paths the head vertex must not also lie on the second edge — an
    /// ambiguity there is a modeling bug and fails fast.
    pub fn start_point(&self, id: FaceId) -> VertexId {
        let face = &self.faces[id];
        assert!(face.is_open(), "start point of a non-open face {}", id);
        let first = self.edges[face.edges[0]];
        if face.len() == 1 {
            return first.v1;
        }
        let second = self.edges[face.edges[1]];
        assert!(
            !second.touches(first.v1),
            "ambiguous start point of open face {}",
            id
        );
        first.v1
    }

    /// The free vertex at the tail of an open face's path (see
    /// [`Self::start_point`]).
    pub fn end_point(&self, id: FaceId) -> VertexId {
        let face = &self.faces[id];
        assert!(face.is_open(), "end point of a non-open face {}", id);
        let last = self.edges[face.edges[face.len() - 1]];
        if face.len() == 1 {
            return last.v2;
        }
        let penultimate = self.edges[face.edges[face.len() - 2]];
        assert!(
            !penultimate.touches(last.v2),
            "ambiguous end point of open face {}",
            id
        );
        last.v2
    }

    /// Close an open face that has just reached its final size, updating the
    /// tallies.
    ///
    /// Growth only ever completes faces of size 4..=6 (closing at 3 would be
    /// a second triangle, rejected by the oracle); anything else is fatal.
    pub(crate) fn close_face(&mut self, id: FaceId) {
        let face = &mut self.faces[id];
        assert!(face.is_open(), "closing a non-open face {}", id);
        face.status = FaceStatus::Closed;
        match face.len() {
            4 => self.counts.squares += 1,
            5 => self.counts.pentagons += 1,
            6 => self.counts.hexagons += 1,
            n => panic!("face {} closed at size {}", id, n),
        }
    }

    /// Merge `absorbed` into `survivor`: the absorbed face's edges are
    /// appended to the survivor's path and the absorbed face becomes a
    /// tombstone.
    pub(crate) fn absorb_face(&mut self, survivor: FaceId, absorbed: FaceId) {
        assert_ne!(survivor, absorbed, "face absorbing itself");
        assert!(
            self.faces[absorbed].is_open(),
            "absorbing a non-open face {}",
            absorbed
        );
        let mut edges = std::mem::take(&mut self.faces[absorbed].edges);
        self.faces[absorbed].status = FaceStatus::Absorbed;
        self.faces[survivor].edges.append(&mut edges);
    }

    /// Select the next face to close: the largest open face, ties broken by
    /// the lowest ring position. Resets the method cursor.
    ///
    /// Closing the largest open face first bounds the worst-case boundary
    /// growth — large open faces are the closest to the size-6 ceiling.
    pub fn choose_face(&mut self) {
        let mut chosen = 0;
        for pos in 1..self.ring.len() {
            if self.faces[self.ring.face_at(pos)].len()
                > self.faces[self.ring.face_at(chosen)].len()
            {
                chosen = pos;
            }
        }
        self.chosen_face = chosen;
        self.method = 0;
    }

    /// The one face other than `excluding` whose boundary contains `edge`.
    ///
    /// Every edge lies on exactly two live faces; more or fewer is fatal.
    pub fn face_sharing_edge(&self, edge: EdgeId, excluding: FaceId) -> FaceId {
        let mut found = None;
        for (id, face) in self.faces.iter().enumerate() {
            if id == excluding || face.is_absorbed() {
                continue;
            }
            if face.contains_edge(edge) {
                assert!(
                    found.is_none(),
                    "edge {} bounds more than two faces",
                    edge
                );
                found = Some(id);
            }
        }
        found.unwrap_or_else(|| panic!("edge {} bounds only one face", edge))
    }

    /// Sizes of the faces across each boundary edge of `id`, in edge order.
    /// Used for the solution report.
    pub fn neighbor_sizes(&self, id: FaceId) -> Vec<usize> {
        self.faces[id]
            .edges
            .iter()
            .map(|&e| self.faces[self.face_sharing_edge(e, id)].len())
            .collect()
    }

    /// Degree of every vertex, indexed 1..=num_vertices (index 0 unused).
    pub fn vertex_degrees(&self) -> Vec<u32> {
        let mut degrees = vec![0u32; self.num_vertices as usize + 1];
        for edge in &self.edges {
            degrees[edge.v1 as usize] += 1;
            degrees[edge.v2 as usize] += 1;
        }
        assert_eq!(degrees[0], 0, "vertex 0 in use");
        degrees
    }

    /// Mid-search sanity check: no closed face above size 6, no open face
    /// above size 5 (an open face always receives at least one more edge),
    /// quotas respected.
    ///
    /// # Panics
    ///
    /// Panics if the closed-face histogram disagrees with the running
    /// tallies — the tallies are redundant bookkeeping and divergence is a
    /// modeling bug.
    pub fn size_check(&self) -> bool {
        let mut by_len = [0isize; 7];
        for face in self.faces.iter().filter(|f| !f.is_absorbed()) {
            if face.len() > 6 {
                return false;
            }
            by_len[face.len()] += 1;
        }
        for id in self.ring.iter() {
            let len = self.faces[id].len();
            if len > 5 {
                return false;
            }
            by_len[len] -= 1;
        }
        if by_len[0] != 0 || by_len[1] != 0 || by_len[2] != 0 {
            return false;
        }
        assert!(
            by_len[3] == 1
                && by_len[4] == self.counts.squares as isize
                && by_len[5] == self.counts.pentagons as isize
                && by_len[6] == self.counts.hexagons as isize,
            "face tallies out of step with the closed-face histogram"
        );
        by_len[3] <= self.quota.triangles as isize
            && by_len[4] <= self.quota.squares as isize
            && by_len[5] <= self.quota.pentagons as isize
    }

    /// Final census for a fully closed map: every face has size 3..=6 and the
    /// quotas are met exactly, and every vertex has degree exactly 3.
    pub fn size_final(&self) -> bool {
        let mut by_len = [0usize; 7];
        for face in self.faces.iter().filter(|f| !f.is_absorbed()) {
            if face.len() < 3 || face.len() > 6 {
                return false;
            }
            by_len[face.len()] += 1;
        }
        assert!(
            by_len[3] == 1
                && by_len[4] == self.counts.squares
                && by_len[5] == self.counts.pentagons
                && by_len[6] == self.counts.hexagons,
            "face tallies out of step with the closed-face histogram"
        );
        let degrees = self.vertex_degrees();
        if degrees[1..].iter().any(|&d| d != 3) {
            eprintln!("[PlanarMap] finished map is not cubic");
            return false;
        }
        by_len[3] == self.quota.triangles
            && by_len[4] == self.quota.squares
            && by_len[5] == self.quota.pentagons
    }

    /// The edge list as vertex pairs, for the canonicalization gateway.
    pub fn edge_list(&self) -> Vec<(VertexId, VertexId)> {
        self.edges.iter().map(|e| (e.v1, e.v2)).collect()
    }

    /// Lengths of the open faces around the ring, for diagnostics.
    pub fn ring_profile(&self) -> Vec<usize> {
        self.ring.iter().map(|id| self.faces[id].len()).collect()
    }

    /// Verify that every edge lies on exactly two live faces.
    ///
    /// Expensive; used by tests and debug assertions, not by the search loop.
    pub fn check_edge_sides(&self) -> bool {
        (0..self.edges.len()).all(|e| {
            self.faces
                .iter()
                .filter(|f| !f.is_absorbed() && f.contains_edge(e))
                .count()
                == 2
        })
    }
}

/// One-line description of the map for stack dumps: tallies, cursor, and the
/// open-face length profile.
impl std::fmt::Display for PlanarMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}. Method {} on ring position {}\t{:?}",
            self.counts.squares,
            self.counts.pentagons,
            self.counts.hexagons,
            self.method,
            self.chosen_face,
            self.ring_profile()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn seed() -> PlanarMap {
        PlanarMap::seed(FaceQuota::canonical())
    }

    #[test]
    fn test_seed_shape() {
        let map = seed();
        assert_eq!(map.num_vertices(), 7);
        assert_eq!(map.edge_count(), 8);
        assert_eq!(map.live_face_count(), 7);
        assert_eq!(map.ring().len(), 5);
        assert_eq!(map.counts().hexagons, 1);
        assert_eq!(map.counts().squares, 0);
        assert!(map.check_edge_sides());
        assert!(map.size_check());
    }

    #[test]
    fn test_seed_ring_is_cyclically_consistent() {
        // The end point of each open face is the start point of the next.
        let map = seed();
        let n = map.ring().len();
        for pos in 0..n {
            let here = map.ring().face_at(pos);
            let next = map.ring().face_at(map.ring().offset(pos, 1));
            assert_eq!(map.end_point(here), map.start_point(next));
        }
    }

    #[test]
    fn test_seed_path_endpoints() {
        let map = seed();
        assert_eq!(map.start_point(2), 7);
        assert_eq!(map.end_point(2), 2);
        assert_eq!(map.start_point(3), 2);
        assert_eq!(map.end_point(3), 4);
        // Single-edge stubs expose the edge's own endpoints.
        assert_eq!(map.start_point(4), 4);
        assert_eq!(map.end_point(4), 5);
    }

    #[test]
    fn test_seed_degrees() {
        let map = seed();
        let degrees = map.vertex_degrees();
        // Vertices 1 and 3 are already cubic; the rest await one more edge.
        assert_eq!(degrees[1], 3);
        assert_eq!(degrees[3], 3);
        for v in [2, 4, 5, 6, 7] {
            assert_eq!(degrees[v], 2);
        }
    }

    #[test]
    fn test_choose_face_prefers_largest_then_first() {
        let mut map = seed();
        map.method = 4;
        map.choose_face();
        // Stubs 2 and 3 both have length 2; position 0 wins the tie.
        assert_eq!(map.chosen_face(), 0);
        assert_eq!(map.method, 0);
    }

    #[test]
    fn test_face_sharing_edge() {
        let map = seed();
        // Edge 2 is the triangle/hexagon shared edge.
        assert_eq!(map.face_sharing_edge(2, 0), 1);
        assert_eq!(map.face_sharing_edge(2, 1), 0);
        // Edge 0 lies on the triangle and on stub face 2.
        assert_eq!(map.face_sharing_edge(0, 0), 2);
    }

    #[test]
    fn test_absorb_face() {
        let mut map = seed();
        map.absorb_face(2, 3);
        let f2 = map.face(2);
        assert_eq!(f2.edges, VecDeque::from([7, 0, 1, 3]));
        assert!(map.face(3).is_absorbed());
        assert!(map.face(3).is_empty());
        assert_eq!(map.live_face_count(), 6);
    }

    #[test]
    #[should_panic(expected = "size 3")]
    fn test_close_face_rejects_triangle_during_growth() {
        let mut map = seed();
        // Stub 4 plus two fake edges would form a second triangle.
        let e = map.add_edge(5, 8);
        let f = map.add_edge(8, 4);
        map.face_mut(4).edges.push_back(e);
        map.face_mut(4).edges.push_back(f);
        map.close_face(4);
    }

    #[test]
    fn test_neighbor_sizes_of_triangle() {
        let map = seed();
        // Triangle edges 0, 1, 2 border stub 2, stub 3, and the hexagon.
        assert_eq!(map.neighbor_sizes(0), vec![2, 2, 6]);
    }
}
