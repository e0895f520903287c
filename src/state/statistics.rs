// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are owned by the search driver and incremented as the
//! depth-first exploration advances, backtracks, and prunes.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counter {
    /// Closure methods applied (snapshots pushed).
    Applications,
    /// Snapshots popped.
    Backtracks,
    /// Distinct solutions reported.
    Solutions,
    /// Finished maps discarded as isomorphic repeats.
    Duplicates,
    /// Branches cut by the mirror-symmetry check on the seed's stub faces.
    MirrorPrunes,
    /// Branches cut by the stack-depth ceiling.
    DepthPrunes,
    /// Branches cut because a single open face can never close.
    LoneFacePrunes,
    /// Branches cut by the mid-search size check.
    SizePrunes,
    /// Faces for which all ten methods were rejected.
    Exhaustions,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }
}
