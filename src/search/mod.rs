// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search driver.
//!
//! The driver runs a depth-first enumeration over map states with
//! snapshot-based undo: before every mutation the current map is cloned onto
//! an explicit stack, and backtracking is a plain pop. Each frame owns a
//! complete independent copy — counters included — so there is no aliasing
//! between frames and nothing else to restore.
//!
//! Each iteration evaluates, in order:
//! 1. **Advance method** — try the next closure method (1..=10) on the chosen
//!    face; if one validates, snapshot and apply it. Method indices are never
//!    revisited within a frame, which is what makes every branch explored
//!    exactly once.
//! 2. **Prune checks** — the mirror-symmetry cut on the seed's designated
//!    stub faces, then on the surviving map: terminal handling, the
//!    stack-depth ceiling (leaving headroom for the minimum closure cost of
//!    four more faces), the lone-open-face dead end (every method needs a
//!    neighbor), and the mid-search size check.
//! 3. **Terminal success** — an empty ring is a finished cubic planar graph;
//!    within the face ceiling it goes to the canonicalization gateway, and a
//!    previously unseen canonical form becomes a reported solution.
//! 4. **Exhaustion** — no method left for the chosen face pops a frame; an
//!    empty stack ends the search.
//!
//! Termination is guaranteed solely by the depth ceiling; there are no
//! timeouts and no retries.

use std::fmt;

use crate::canon::{CanonError, Canonicalizer};
use crate::closure::{advance_method, apply_chosen};
use crate::geometry::constants::{ordinal_width, MAX_FACES};
use crate::geometry::{FaceId, VertexId};
use crate::state::{Counter, FaceQuota, PlanarMap, Statistics};

/// The two seed stub faces adjacent to the triangle. A mirror image of the
/// seed swaps them, so branches where the first ends up strictly larger than
/// the already-finished second repeat earlier work and are cut.
const MIRROR_FACE_A: FaceId = 2;
const MIRROR_FACE_B: FaceId = 3;

/// Run-time configuration of one search.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Ceiling on the total number of faces of a reported graph; also bounds
    /// the search depth. Defaults to the compile-time [`MAX_FACES`].
    pub max_faces: usize,
    /// Face-count targets; must satisfy the Euler identity to admit any
    /// solution.
    pub quota: FaceQuota,
    /// Diagnostic chatter on stderr: 0 silent .. 3 per-step trace.
    pub verbosity: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_faces: MAX_FACES,
            quota: FaceQuota::canonical(),
            verbosity: 0,
        }
    }
}

/// Fatal failures of a search run. Infeasible branches and exhausted budgets
/// are not errors — they are handled by backtracking and never surface.
#[derive(Debug)]
pub enum SearchError {
    /// The seed realizes exactly one triangle; other triangle quotas cannot
    /// be expressed.
    UnsupportedQuota { triangles: usize },
    /// The canonicalization gateway rejected a finished graph.
    Canon(CanonError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::UnsupportedQuota { triangles } => {
                write!(
                    f,
                    "triangle quota {} unsupported: the seed map fixes exactly one triangle",
                    triangles
                )
            }
            SearchError::Canon(err) => write!(f, "canonicalization failed: {}", err),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Canon(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanonError> for SearchError {
    fn from(err: CanonError) -> Self {
        SearchError::Canon(err)
    }
}

/// One distinct finished graph.
#[derive(Debug, Clone)]
pub struct Solution {
    /// 1-based discovery rank among distinct solutions.
    pub ordinal: usize,
    pub num_vertices: u32,
    pub hexagons: usize,
    /// Sizes of the faces adjacent to the triangle.
    pub triangle_neighbors: Vec<usize>,
    /// Sizes of the faces adjacent to each square, one entry per square.
    pub square_neighbors: Vec<Vec<usize>>,
    /// The finished graph's edge list (1-based vertex pairs).
    pub edges: Vec<(VertexId, VertexId)>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  tri: ")?;
        comma_print(f, &self.triangle_neighbors)?;
        for nbrs in &self.square_neighbors {
            write!(f, "  sqr: ")?;
            comma_print(f, nbrs)?;
        }
        write!(
            f,
            "  {:>2} hexes, {} verts",
            self.hexagons, self.num_vertices
        )
    }
}

fn comma_print(f: &mut fmt::Formatter<'_>, sizes: &[usize]) -> fmt::Result {
    for (i, size) in sizes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", size)?;
    }
    Ok(())
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct SearchSummary {
    pub solutions: Vec<Solution>,
    /// The ceiling the run was configured with.
    pub max_faces: usize,
    pub statistics: Statistics,
}

impl SearchSummary {
    pub fn total(&self) -> usize {
        self.solutions.len()
    }
}

/// The depth-first enumeration driver.
pub struct Search {
    config: SearchConfig,
    gateway: Canonicalizer,
    stats: Statistics,
    solutions: Vec<Solution>,
}

impl Search {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            gateway: Canonicalizer::new(),
            stats: Statistics::new(),
            solutions: Vec::new(),
        }
    }

    /// Run the search to exhaustion.
    ///
    /// Deterministic: the same configuration always yields the same solutions
    /// in the same order. Solutions are printed to stdout as they are found
    /// and collected into the summary.
    pub fn run(mut self) -> Result<SearchSummary, SearchError> {
        if self.config.quota.triangles != 1 {
            return Err(SearchError::UnsupportedQuota {
                triangles: self.config.quota.triangles,
            });
        }
        if !self.config.quota.is_feasible() {
            eprintln!(
                "[Search] quotas sum to {} in the Euler identity (need 12); no solutions exist",
                self.config.quota.euler_sum()
            );
            return Ok(self.into_summary());
        }

        let mut stack: Vec<PlanarMap> = Vec::new();
        let mut g = PlanarMap::seed(self.config.quota);
        let mut pop = false;
        let width = ordinal_width(self.config.max_faces);
        // The symmetry cut is derived from the canonical quota's seed; other
        // feasible quotas search without it.
        let use_mirror_cut = self.config.quota == FaceQuota::canonical();

        loop {
            if pop {
                match stack.pop() {
                    None => break,
                    Some(prev) => g = prev,
                }
                self.stats.increment(Counter::Backtracks);
                pop = false;
            }

            if !advance_method(&mut g) {
                if self.config.verbosity >= 3 {
                    eprintln!("[Search] no method closes ring position {}", g.chosen_face());
                }
                self.stats.increment(Counter::Exhaustions);
                pop = true;
                continue;
            }

            stack.push(g.clone());
            if self.config.verbosity >= 3 {
                eprintln!(
                    "[Search] method {} on ring position {}",
                    g.method,
                    g.chosen_face()
                );
            }
            apply_chosen(&mut g);
            self.stats.increment(Counter::Applications);
            if self.config.verbosity >= 2 {
                eprintln!("[Search] open faces now {:?}", g.ring_profile());
            }

            if use_mirror_cut && mirror_pruned(&g) {
                self.stats.increment(Counter::MirrorPrunes);
                pop = true;
                continue;
            }

            if g.ring().is_empty() {
                pop = true;
                if g.live_face_count() > self.config.max_faces {
                    continue;
                }
                assert!(
                    g.size_final(),
                    "finished map fails the final face census"
                );
                if self.gateway.record(g.num_vertices(), &g.edge_list())? {
                    let solution = build_solution(&g, self.solutions.len() + 1);
                    println!("{:>width$}. {}", solution.ordinal, solution, width = width);
                    self.solutions.push(solution);
                    self.stats.increment(Counter::Solutions);
                } else {
                    if self.config.verbosity >= 1 {
                        eprintln!("[Search] isomorphic repeat discarded");
                    }
                    self.stats.increment(Counter::Duplicates);
                }
                continue;
            }

            // Leave headroom: any completion costs at least four more faces.
            if stack.len() > self.config.max_faces.saturating_sub(4) {
                if self.config.verbosity >= 2 {
                    eprintln!("[Search] curtailing at the face ceiling");
                }
                self.stats.increment(Counter::DepthPrunes);
                pop = true;
                continue;
            }

            if g.ring().len() == 1 {
                if self.config.verbosity >= 3 {
                    eprintln!("[Search] lone open face");
                }
                self.stats.increment(Counter::LoneFacePrunes);
                pop = true;
                continue;
            }

            if !g.size_check() {
                if self.config.verbosity >= 1 {
                    eprintln!("[Search] bad face sizes");
                }
                self.stats.increment(Counter::SizePrunes);
                pop = true;
                continue;
            }

            g.choose_face();
            if self.config.verbosity >= 3 {
                eprintln!("[Search] chose ring position {}", g.chosen_face());
            }
        }

        Ok(self.into_summary())
    }

    fn into_summary(self) -> SearchSummary {
        SearchSummary {
            solutions: self.solutions,
            max_faces: self.config.max_faces,
            statistics: self.stats,
        }
    }

    /// Write one line per pending stack frame to stderr: tallies, cursor,
    /// and the open-face length profile. For use when poking at a wedged
    /// search from a debugger or test.
    pub fn dump_stack(stack: &[PlanarMap]) {
        for map in stack {
            eprintln!("[Search] {}", map);
        }
    }
}

/// Mirror-symmetry cut. Once the face grown from stub A is a pentagon or
/// hexagon and its mirror partner B has already closed smaller, the mirrored
/// branch was explored when B's sizes were tried on A; cut this one.
///
/// B absorbed into a neighbor has no size of its own any more; the cut does
/// not apply then.
fn mirror_pruned(map: &PlanarMap) -> bool {
    let a = map.face(MIRROR_FACE_A);
    let b = map.face(MIRROR_FACE_B);
    a.len() > 4 && b.is_closed() && b.len() < a.len()
}

fn build_solution(map: &PlanarMap, ordinal: usize) -> Solution {
    let mut square_neighbors = Vec::new();
    for id in 0..map.face_arena_len() {
        let face = map.face(id);
        if face.is_closed() && face.len() == 4 {
            square_neighbors.push(map.neighbor_sizes(id));
        }
    }
    Solution {
        ordinal,
        num_vertices: map.num_vertices(),
        hexagons: map.counts().hexagons,
        // The triangle is face 0 of the seed.
        triangle_neighbors: map.neighbor_sizes(0),
        square_neighbors,
        edges: map.edge_list(),
    }
}
