//! Grouping and merging of mesh fragments.

use indexmap::IndexMap;
use jamscape_core::Position;
use smallvec::SmallVec;

use crate::fragment::{BuildingVolume, MeshFragment};

/// Material suffixes stripped from fragment sources to find the building name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixSet(Vec<String>);

impl SuffixSet {
    /// A custom suffix set.
    pub fn new<S: Into<String>>(suffixes: impl IntoIterator<Item = S>) -> Self {
        let mut suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        // Longest first, so a suffix that ends another is never stripped early.
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        suffixes.dedup();
        Self(suffixes)
    }

    /// Every ITU material variant a scene export may emit, as `.ply` files.
    pub fn itu_materials() -> Self {
        Self::new(
            [
                "concrete",
                "brick",
                "plasterboard",
                "wood",
                "glass",
                "ceiling_board",
                "chipboard",
                "plywood",
                "marble",
                "floorboard",
                "metal",
                "very_dry_ground",
                "medium_dry_ground",
                "wet_ground",
            ]
            .into_iter()
            .map(|m| format!("-itu_{m}.ply")),
        )
    }

    /// The suffixes, longest first.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// `source` with its first matching suffix removed, or unchanged.
    pub fn strip<'a>(&self, source: &'a str) -> &'a str {
        self.0
            .iter()
            .find_map(|s| source.strip_suffix(s.as_str()))
            .unwrap_or(source)
    }
}

impl Default for SuffixSet {
    /// Concrete and metal, the two variants building exports carry.
    fn default() -> Self {
        Self::new(["-itu_concrete.ply", "-itu_metal.ply"])
    }
}

/// Merges fragments into one [`BuildingVolume`] per canonical base name.
#[derive(Clone, Debug, Default)]
pub struct BoundingVolumeAggregator {
    suffixes: SuffixSet,
}

impl BoundingVolumeAggregator {
    /// An aggregator stripping the default concrete/metal suffixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// An aggregator stripping `suffixes`.
    pub fn with_suffixes(suffixes: SuffixSet) -> Self {
        Self { suffixes }
    }

    /// The suffixes this aggregator strips.
    pub fn suffixes(&self) -> &SuffixSet {
        &self.suffixes
    }

    /// Canonical base name for a fragment source.
    pub fn canonical_name<'a>(&self, source: &'a str) -> &'a str {
        self.suffixes.strip(source)
    }

    /// Merge `fragments` into per-building volumes, sorted by name.
    ///
    /// The result does not depend on input order or on repeated fragments,
    /// and merging a merged result's fragments again yields the same volumes.
    /// A source listed more than once is one contributor.
    pub fn merge<'a>(
        &self,
        fragments: impl IntoIterator<Item = &'a MeshFragment>,
    ) -> Vec<BuildingVolume> {
        let mut groups: IndexMap<&str, Vec<&MeshFragment>> = IndexMap::new();
        for fragment in fragments {
            groups
                .entry(self.canonical_name(&fragment.source))
                .or_default()
                .push(fragment);
        }
        groups.sort_keys();

        groups
            .into_iter()
            .map(|(name, members)| {
                let mut bbox_min = members[0].bbox_min;
                let mut bbox_max = members[0].bbox_max;
                for m in &members[1..] {
                    bbox_min = axis_min(&bbox_min, &m.bbox_min);
                    bbox_max = axis_max(&bbox_max, &m.bbox_max);
                }
                let mut contributors: SmallVec<[String; 2]> =
                    members.iter().map(|m| m.source.clone()).collect();
                contributors.sort();
                contributors.dedup();
                BuildingVolume {
                    name: name.to_string(),
                    bbox_min,
                    bbox_max,
                    contributors,
                }
            })
            .collect()
    }
}

fn axis_min(a: &Position, b: &Position) -> Position {
    [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])]
}

fn axis_max(a: &Position, b: &Position) -> Position {
    [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_c() -> Vec<MeshFragment> {
        vec![
            MeshFragment::new("b1-itu_concrete.ply", [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            MeshFragment::new("b1-itu_metal.ply", [0.5, 0.5, 0.0], [2.0, 2.0, 2.0]),
        ]
    }

    #[test]
    fn scenario_c_merges_to_b1() {
        let volumes = BoundingVolumeAggregator::new().merge(&scenario_c());
        assert_eq!(volumes.len(), 1);
        let b1 = &volumes[0];
        assert_eq!(b1.name, "b1");
        assert_eq!(b1.bbox_min, [0.0, 0.0, 0.0]);
        assert_eq!(b1.bbox_max, [2.0, 2.0, 2.0]);
        assert_eq!(
            b1.contributors.as_slice(),
            &["b1-itu_concrete.ply".to_string(), "b1-itu_metal.ply".to_string()]
        );
    }

    #[test]
    fn singleton_keeps_its_box() {
        let f = MeshFragment::new("tower-itu_metal.ply", [-3.0, 2.0, 0.0], [4.0, 9.5, 80.0]);
        let volumes = BoundingVolumeAggregator::new().merge([&f]);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].name, "tower");
        assert_eq!(volumes[0].bbox_min, f.bbox_min);
        assert_eq!(volumes[0].bbox_max, f.bbox_max);
    }

    #[test]
    fn repeated_fragment_merges_like_a_single_one() {
        let f = MeshFragment::new("b1-itu_concrete.ply", [0.0; 3], [1.0; 3]);
        let agg = BoundingVolumeAggregator::new();
        assert_eq!(agg.merge([&f, &f]), agg.merge([&f]));

        let mut doubled = scenario_c();
        doubled.extend(scenario_c());
        assert_eq!(agg.merge(&doubled), agg.merge(&scenario_c()));
    }

    #[test]
    fn default_suffixes_are_concrete_and_metal() {
        let agg = BoundingVolumeAggregator::new();
        assert_eq!(
            agg.suffixes().as_slice(),
            &["-itu_concrete.ply".to_string(), "-itu_metal.ply".to_string()]
        );
        let itu = SuffixSet::itu_materials();
        assert_eq!(itu.as_slice().len(), 14);
        // Longest first.
        assert_eq!(itu.as_slice()[0], "-itu_medium_dry_ground.ply");
    }

    #[test]
    fn unknown_suffix_keeps_full_source() {
        let agg = BoundingVolumeAggregator::new();
        assert_eq!(agg.canonical_name("b2-itu_glass.ply"), "b2-itu_glass.ply");
        assert_eq!(agg.canonical_name("b2-itu_metal.ply"), "b2");
        // Only a trailing suffix is stripped.
        assert_eq!(
            agg.canonical_name("b2-itu_metal.ply.bak"),
            "b2-itu_metal.ply.bak"
        );
    }

    #[test]
    fn itu_material_set_groups_glass_too() {
        let agg = BoundingVolumeAggregator::with_suffixes(SuffixSet::itu_materials());
        let fragments = vec![
            MeshFragment::new("b2-itu_glass.ply", [0.0; 3], [1.0; 3]),
            MeshFragment::new("b2-itu_brick.ply", [-1.0; 3], [0.5; 3]),
        ];
        let volumes = agg.merge(&fragments);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].name, "b2");
        assert_eq!(volumes[0].bbox_min, [-1.0; 3]);
        assert_eq!(volumes[0].bbox_max, [1.0; 3]);
    }

    #[test]
    fn overlapping_suffixes_strip_longest() {
        let set = SuffixSet::new(["_dry_ground.ply", "-itu_very_dry_ground.ply"]);
        assert_eq!(set.strip("lot-itu_very_dry_ground.ply"), "lot");
    }

    #[test]
    fn output_sorted_by_name() {
        let fragments = vec![
            MeshFragment::new("zeta-itu_metal.ply", [0.0; 3], [1.0; 3]),
            MeshFragment::new("alpha-itu_metal.ply", [0.0; 3], [1.0; 3]),
            MeshFragment::new("mid-itu_concrete.ply", [0.0; 3], [1.0; 3]),
        ];
        let names: Vec<String> = BoundingVolumeAggregator::new()
            .merge(&fragments)
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn empty_input_yields_no_volumes() {
        let none: Vec<MeshFragment> = Vec::new();
        assert!(BoundingVolumeAggregator::new().merge(&none).is_empty());
    }

    #[test]
    fn volume_geometry_helpers() {
        let v = &BoundingVolumeAggregator::new().merge(&scenario_c())[0];
        assert_eq!(v.extent(), [2.0, 2.0, 2.0]);
        assert_eq!(v.center(), [1.0, 1.0, 1.0]);
        assert!(v.contains(&[0.25, 1.75, 2.0]));
        assert!(!v.contains(&[0.25, 1.75, 2.1]));
    }
}
