//! Benchmark profiles for the Jamscape scenario crates.
//!
//! Provides pre-built inputs for benchmarks and examples:
//!
//! - [`downtown_extent`]: the 1 km square reference map
//! - [`fleet_requests`]: `n` seeded walk requests spread over that map
//! - [`city_fragments`]: per-material fragments for `n` buildings

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use jamscape_core::{AxisRange, EmitterId};
use jamscape_grid::MapExtent;
use jamscape_mesh::MeshFragment;
use jamscape_motion::WalkSpec;

/// Materials each benchmark building is split into.
const MATERIALS: [&str; 3] = ["concrete", "metal", "glass"];

/// The reference map: x and y in `[-500, 500]`, transmitters at 10 m.
pub fn downtown_extent() -> MapExtent {
    MapExtent::new(
        AxisRange::new(-500.0, 500.0),
        AxisRange::new(-500.0, 500.0),
        10.0,
    )
}

/// `n` walk requests of `num_steps` steps, started at deterministic
/// points inside [`downtown_extent`] and seeded from `seed`.
pub fn fleet_requests(n: usize, num_steps: usize, seed: u64) -> Vec<(EmitterId, WalkSpec)> {
    (0..n)
        .map(|i| {
            let start = [
                spread(seed, i as u64, 0, 900.0) - 450.0,
                spread(seed, i as u64, 1, 900.0) - 450.0,
                10.0,
            ];
            let spec = WalkSpec::new(start, num_steps, 10.0).seed(seed.wrapping_add(i as u64));
            (EmitterId::new(format!("tx_{i}")), spec)
        })
        .collect()
}

/// Fragments for `n` buildings, one per material, with overlapping boxes.
///
/// Returned in material-major order, so fragments of one building are
/// never adjacent.
pub fn city_fragments(n: usize, seed: u64) -> Vec<MeshFragment> {
    let mut fragments = Vec::with_capacity(n * MATERIALS.len());
    for (m, material) in MATERIALS.iter().enumerate() {
        for b in 0..n {
            let x = spread(seed, b as u64, 0, 900.0) - 450.0;
            let y = spread(seed, b as u64, 1, 900.0) - 450.0;
            let offset = m as f64 * 2.0;
            let height = 10.0 + spread(seed, b as u64, 2 + m as u64, 40.0);
            fragments.push(MeshFragment::new(
                format!("building_{b}-itu_{material}.ply"),
                [x + offset, y - offset, 0.0],
                [x + offset + 20.0, y - offset + 20.0, height],
            ));
        }
    }
    fragments
}

/// Deterministic value in `[0, scale)` for `(seed, index, lane)`.
fn spread(seed: u64, index: u64, lane: u64, scale: f64) -> f64 {
    let h = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(index.wrapping_mul(1442695040888963407))
        .wrapping_add(lane.wrapping_mul(2862933555777941757));
    (h >> 11) as f64 / (1u64 << 53) as f64 * scale
}
