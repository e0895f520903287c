// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on the MAX_FACES feature selection.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(max_faces_ge_14)]` instead of `#[cfg(not(feature = "max_faces_12"))]`
//! - `#[cfg(max_faces_eq_14)]` for the default/most common case

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(max_faces_ge_14)");
    println!("cargo:rustc-check-cfg=cfg(max_faces_ge_20)");
    println!("cargo:rustc-check-cfg=cfg(max_faces_eq_14)");

    // MAX_FACES >= 14 (excludes only max_faces_12)
    #[cfg(not(feature = "max_faces_12"))]
    println!("cargo:rustc-cfg=max_faces_ge_14");

    // MAX_FACES >= 20 (only the larger explicit ceilings)
    #[cfg(any(feature = "max_faces_20", feature = "max_faces_27"))]
    println!("cargo:rustc-cfg=max_faces_ge_20");

    // MAX_FACES = 14 (default or explicit max_faces_14 feature)
    #[cfg(any(
        feature = "max_faces_14",
        not(any(
            feature = "max_faces_12",
            feature = "max_faces_20",
            feature = "max_faces_27"
        ))
    ))]
    println!("cargo:rustc-cfg=max_faces_eq_14");
}
