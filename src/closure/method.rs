// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ten closure methods.
//!
//! Each method is a structurally distinct local pattern for closing the
//! chosen open face F, parameterized by how many new edges and vertices it
//! introduces and which neighboring open faces in the ring it consumes or
//! extends. Methods come in mirrored next-side/previous-side pairs (3/4, 6/7,
//! 8/9) plus four self-symmetric bridges.
//!
//! Method index 0 is the "nothing tried yet" sentinel on the map and has no
//! variant here; [`CloseMethod::from_index`] returns `None` for it.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter, FromRepr};

/// A pattern of edge/vertex insertions that closes the chosen open face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro, EnumIter, FromRepr)]
#[repr(u8)]
pub enum CloseMethod {
    /// One new edge joining F's two free endpoints directly. Closes F; with
    /// only two ring entries left the shared neighbor closes too.
    JoinEnds = 1,
    /// Two new edges through one new vertex bridging F's endpoints. Closes F
    /// only.
    BridgeOneVertex = 2,
    /// Three new edges: close the next face, run across the single-edge face
    /// beyond it, and return to F's start point. Closes F and the next face;
    /// closes the whole ring when exactly four open faces remain.
    CloseNextAcrossSingleton = 3,
    /// Mirror of [`Self::CloseNextAcrossSingleton`] on the previous side.
    /// (With four open faces that case already covers it, so this one
    /// requires at least six.)
    ClosePrevAcrossSingleton = 4,
    /// Three new edges through two new vertices bridging F's endpoints; the
    /// middle edge becomes a fresh single-edge open face. Closes F only.
    BridgeTwoVertices = 5,
    /// Four new edges: close the next face, run across the two edges of the
    /// face beyond it, and return to F's start point.
    CloseNextAcrossPair = 6,
    /// Mirror of [`Self::CloseNextAcrossPair`] on the previous side.
    ClosePrevAcrossPair = 7,
    /// Four new edges: close the next face, take in the single-edge face
    /// beyond it, and return through one new vertex to F's start point.
    CloseNextToNewVertex = 8,
    /// Mirror of [`Self::CloseNextToNewVertex`] on the previous side.
    ClosePrevToNewVertex = 9,
    /// Four new edges through three new vertices; the two middle edges become
    /// fresh single-edge open faces. Closes F only.
    BridgeThreeVertices = 10,
}

impl CloseMethod {
    /// Decode a method counter value; 0 (and anything past 10) is no method.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    /// The 1..=10 index of this method.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// How many edges the pattern appends to the map.
    pub fn edges_added(self) -> usize {
        match self {
            Self::JoinEnds => 1,
            Self::BridgeOneVertex => 2,
            Self::CloseNextAcrossSingleton
            | Self::ClosePrevAcrossSingleton
            | Self::BridgeTwoVertices => 3,
            Self::CloseNextAcrossPair
            | Self::ClosePrevAcrossPair
            | Self::CloseNextToNewVertex
            | Self::ClosePrevToNewVertex
            | Self::BridgeThreeVertices => 4,
        }
    }

    /// How many vertices the pattern introduces.
    pub fn vertices_added(self) -> usize {
        match self {
            Self::JoinEnds
            | Self::CloseNextAcrossSingleton
            | Self::ClosePrevAcrossSingleton
            | Self::CloseNextAcrossPair
            | Self::ClosePrevAcrossPair => 0,
            Self::BridgeOneVertex | Self::CloseNextToNewVertex | Self::ClosePrevToNewVertex => 1,
            Self::BridgeTwoVertices => 2,
            Self::BridgeThreeVertices => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_from_index() {
        assert_eq!(CloseMethod::from_index(0), None);
        assert_eq!(CloseMethod::from_index(1), Some(CloseMethod::JoinEnds));
        assert_eq!(
            CloseMethod::from_index(10),
            Some(CloseMethod::BridgeThreeVertices)
        );
        assert_eq!(CloseMethod::from_index(11), None);
    }

    #[test]
    fn test_indices_cover_1_through_10() {
        assert_eq!(CloseMethod::COUNT, 10);
        let indices: Vec<u8> = CloseMethod::iter().map(|m| m.index()).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_growth_accounting() {
        for method in CloseMethod::iter() {
            assert!(method.edges_added() >= 1);
            assert!(method.vertices_added() < method.edges_added());
        }
    }
}
