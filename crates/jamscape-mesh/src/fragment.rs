//! Mesh fragments and the merged per-building volumes.

use jamscape_core::Position;
use smallvec::SmallVec;

/// Axis-aligned bounds of one loaded geometry file.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshFragment {
    /// Source identifier, normally the file name.
    pub source: String,
    /// Minimum corner.
    pub bbox_min: Position,
    /// Maximum corner.
    pub bbox_max: Position,
}

impl MeshFragment {
    /// Create a fragment from its source and corners.
    pub fn new(source: impl Into<String>, bbox_min: Position, bbox_max: Position) -> Self {
        Self {
            source: source.into(),
            bbox_min,
            bbox_max,
        }
    }
}

/// The tightest axis-aligned box around every fragment of one building.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingVolume {
    /// Canonical base name shared by the contributing fragments.
    pub name: String,
    /// Axis-wise minimum of the fragment minimums.
    pub bbox_min: Position,
    /// Axis-wise maximum of the fragment maximums.
    pub bbox_max: Position,
    /// Sources of the contributing fragments, sorted.
    pub contributors: SmallVec<[String; 2]>,
}

impl BuildingVolume {
    /// Extent along each axis.
    pub fn extent(&self) -> [f64; 3] {
        [
            self.bbox_max[0] - self.bbox_min[0],
            self.bbox_max[1] - self.bbox_min[1],
            self.bbox_max[2] - self.bbox_min[2],
        ]
    }

    /// Center of the box.
    pub fn center(&self) -> Position {
        [
            (self.bbox_min[0] + self.bbox_max[0]) / 2.0,
            (self.bbox_min[1] + self.bbox_max[1]) / 2.0,
            (self.bbox_min[2] + self.bbox_max[2]) / 2.0,
        ]
    }

    /// Whether `p` lies inside or on the box.
    pub fn contains(&self, p: &Position) -> bool {
        (0..3).all(|i| p[i] >= self.bbox_min[i] && p[i] <= self.bbox_max[i])
    }
}
