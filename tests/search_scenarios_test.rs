// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search driver.
//!
//! These tests validate that the driver correctly:
//! - Terminates with no solutions when the ceiling forbids any closure
//! - Detects infeasible and unsupported quota configurations up front
//! - Produces only cubic planar graphs meeting the quotas exactly
//! - Is deterministic, and monotone in the face ceiling

use cubic_search::state::Counter;
use cubic_search::{Canonicalizer, FaceQuota, Search, SearchConfig, SearchError, Solution};

fn run_with_ceiling(max_faces: usize) -> Vec<Solution> {
    let config = SearchConfig {
        max_faces,
        ..SearchConfig::default()
    };
    Search::new(config).run().unwrap().solutions
}

#[test]
fn test_tiny_ceiling_finds_nothing() {
    // With a ceiling of 4 the depth prune fires after the first application,
    // so the ring can never empty.
    let summary = Search::new(SearchConfig {
        max_faces: 4,
        ..SearchConfig::default()
    })
    .run()
    .unwrap();
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.statistics.get(Counter::Solutions), 0);
    assert!(summary.statistics.get(Counter::DepthPrunes) > 0);
}

#[test]
fn test_infeasible_quota_detected_up_front() {
    // 3·1 + 2·0 + 0 = 3 ≠ 12: all-hexagon completions cannot exist.
    let summary = Search::new(SearchConfig {
        quota: FaceQuota {
            triangles: 1,
            squares: 0,
            pentagons: 0,
        },
        ..SearchConfig::default()
    })
    .run()
    .unwrap();
    assert_eq!(summary.total(), 0);
    // Detected before any search step.
    assert_eq!(summary.statistics.get(Counter::Applications), 0);
}

#[test]
fn test_unsupported_triangle_quota_rejected() {
    let result = Search::new(SearchConfig {
        quota: FaceQuota {
            triangles: 2,
            squares: 3,
            pentagons: 0,
        },
        ..SearchConfig::default()
    })
    .run();
    assert!(matches!(
        result,
        Err(SearchError::UnsupportedQuota { triangles: 2 })
    ));
}

#[test]
fn test_solutions_are_cubic_and_meet_the_quotas() {
    for solution in run_with_ceiling(14) {
        // Every vertex has degree exactly 3.
        let mut degrees = vec![0usize; solution.num_vertices as usize + 1];
        for &(v1, v2) in &solution.edges {
            degrees[v1 as usize] += 1;
            degrees[v2 as usize] += 1;
        }
        assert!(degrees[1..].iter().all(|&d| d == 3));

        // Cubic: 2E = 3V.
        assert_eq!(2 * solution.edges.len(), 3 * solution.num_vertices as usize);

        // Euler's formula with the exact face census 1+2+5+h.
        let faces = 1 + 2 + 5 + solution.hexagons;
        assert_eq!(
            solution.num_vertices as i64 - solution.edges.len() as i64 + faces as i64,
            2
        );

        // The triangle borders three faces; each square borders four.
        assert_eq!(solution.triangle_neighbors.len(), 3);
        assert_eq!(solution.square_neighbors.len(), 2);
        for nbrs in &solution.square_neighbors {
            assert_eq!(nbrs.len(), 4);
            assert!(nbrs.iter().all(|&s| (3..=6).contains(&s)));
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let first = run_with_ceiling(14);
    let second = run_with_ceiling(14);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.ordinal, b.ordinal);
        assert_eq!(a.num_vertices, b.num_vertices);
        assert_eq!(a.hexagons, b.hexagons);
        assert_eq!(a.edges, b.edges);
    }
}

#[test]
fn test_raising_the_ceiling_only_adds_solutions() {
    let small = run_with_ceiling(10);
    let mid = run_with_ceiling(12);
    let large = run_with_ceiling(14);
    assert!(small.len() <= mid.len());
    assert!(mid.len() <= large.len());
    // Every graph found under the lower ceiling reappears under the higher
    // one. The labeled representative of an isomorphism class may differ
    // between runs, so compare canonical forms.
    let large_keys: Vec<_> = large
        .iter()
        .map(|s| Canonicalizer::canonical_key(s.num_vertices, &s.edges).unwrap())
        .collect();
    for solution in &mid {
        let faces = 8 + solution.hexagons;
        assert!(faces <= 12);
        let key = Canonicalizer::canonical_key(solution.num_vertices, &solution.edges).unwrap();
        assert!(large_keys.contains(&key));
    }
}

#[test]
fn test_ordinals_count_up_from_one() {
    let solutions = run_with_ceiling(14);
    for (i, solution) in solutions.iter().enumerate() {
        assert_eq!(solution.ordinal, i + 1);
    }
}
