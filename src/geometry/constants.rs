// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the cubic planar graph search.
//!
//! This module defines MAX_FACES (the total face ceiling) and the face quotas.
//! MAX_FACES can be configured at compile time via cargo features.
//!
//! # Supported MAX_FACES values
//!
//! - 12: quick runs, smallest interesting ceiling
//! - 14: **default**
//! - 20, 27: long runs (the ordinal column widens accordingly)
//!
//! # Example
//!
//! ```bash
//! # Default: MAX_FACES=14
//! cargo build
//!
//! # Build for MAX_FACES=20
//! cargo build --features max_faces_20
//! ```
//!
//! Without a hard ceiling the search would never detect looping; the ceiling
//! is what guarantees termination.

/// Total face ceiling for the search.
///
/// This is configurable at compile time via cargo features:
/// - `max_faces_12` → MAX_FACES=12
/// - `max_faces_14` → MAX_FACES=14 (explicit)
/// - `max_faces_20` → MAX_FACES=20
/// - `max_faces_27` → MAX_FACES=27
/// - (default) → MAX_FACES=14 (when no feature specified)
#[cfg(not(any(
    feature = "max_faces_12",
    feature = "max_faces_14",
    feature = "max_faces_20",
    feature = "max_faces_27"
)))]
pub const MAX_FACES: usize = 14;

#[cfg(feature = "max_faces_12")]
pub const MAX_FACES: usize = 12;

#[cfg(feature = "max_faces_14")]
pub const MAX_FACES: usize = 14;

#[cfg(feature = "max_faces_20")]
pub const MAX_FACES: usize = 20;

#[cfg(feature = "max_faces_27")]
pub const MAX_FACES: usize = 27;

/// Exact number of triangular faces in every accepted graph.
///
/// The seed map is built around the unique triangle; the quota is not
/// adjustable without rebuilding the seed.
pub const N_TRIANGLES: usize = 1;

/// Maximum number of square faces.
pub const N_SQUARES: usize = 2;

/// Maximum number of pentagonal faces.
pub const N_PENTAGONS: usize = 5;

/// Number of closure methods tried per face (method indices 1..=NUM_METHODS).
pub const NUM_METHODS: u8 = 10;

/// Width of the ordinal column in solution reports, derived from the ceiling.
pub const fn ordinal_width(max_faces: usize) -> usize {
    if max_faces > 27 {
        5
    } else if max_faces > 20 {
        4
    } else if max_faces > 14 {
        3
    } else {
        2
    }
}

/// Compile-time check of the Euler identity for the built-in quotas.
///
/// In any cubic planar graph whose faces have size 3..=6,
/// `3·f3 + 2·f4 + 1·f5 = 12`; quotas that cannot meet this admit no solutions.
const _: () = assert!(
    3 * N_TRIANGLES + 2 * N_SQUARES + N_PENTAGONS == 12,
    "face quotas violate the Euler identity"
);

/// Compile-time assertion that the ceiling leaves room for the seed's 7 faces.
const _: () = assert!(MAX_FACES >= 8, "MAX_FACES too small for the seed map");
