//! Grid geometry properties and solver round trips.

use indexmap::IndexMap;
use jamscape_core::{distance, AxisRange, ConfigError, EmitterId};
use jamscape_grid::{GridError, MapExtent, RadioMap, SamplingGrid};
use jamscape_test_utils::MockFieldSolver;
use proptest::prelude::*;

fn downtown() -> MapExtent {
    MapExtent::new(
        AxisRange::new(-500.0, 500.0),
        AxisRange::new(-500.0, 500.0),
        1.5,
    )
}

fn emitters() -> IndexMap<EmitterId, [f64; 3]> {
    let mut map = IndexMap::new();
    map.insert(EmitterId::from("Tx1"), [70.0, -10.0, 10.0]);
    map.insert(EmitterId::from("Tx2"), [-260.0, 100.0, 10.0]);
    map
}

#[test]
fn extent_grid_covers_the_map() {
    let grid = downtown().grid([10.0, 10.0]).build().unwrap();
    assert_eq!(grid.shape(), (100, 100));
    assert_eq!(grid.height(), 1.5);
    assert!((grid.xs()[0] + 495.0).abs() < 1e-9);
    assert!((grid.xs()[99] - 495.0).abs() < 1e-9);
    assert!(downtown().bounds().contains(&[0.0, 0.0, 1.5]));
}

#[test]
fn solver_fields_are_read_back_per_emitter() {
    let grid = downtown().grid([50.0, 100.0]).build().unwrap();
    let mut solver = MockFieldSolver::new();
    let map = RadioMap::compute(&mut solver, &grid, &emitters()).unwrap();
    assert_eq!(solver.calls, 1);

    let ids: Vec<&str> = map.emitters().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["Tx1", "Tx2"]);

    // Every cell reads the value the solver computed for that position.
    for (ix, iy) in [(0, 0), (3, 7), (19, 0), (0, 9), (19, 9)] {
        let p = grid.position(ix, iy).unwrap();
        let d = distance(&p, &[70.0, -10.0, 10.0]);
        let expected = 1.0 / (1.0 + d * d);
        let got = map.value_at("Tx1", ix, iy).unwrap();
        assert!((got - expected).abs() < 1e-15, "({ix},{iy}): {got} != {expected}");
    }

    // The strongest cell of each field is the one nearest its emitter.
    for (id, tx) in &emitters() {
        let field = map.field(id.as_str()).unwrap();
        let best = field
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        let (ix, iy) = grid.cell_of(best).unwrap();
        let p = grid.position(ix, iy).unwrap();
        assert!((p[0] - tx[0]).abs() <= 25.0);
        assert!((p[1] - tx[1]).abs() <= 50.0);
    }

    let summary = map.summary("Tx2").unwrap();
    assert!(summary.max >= summary.mean);
    assert!(summary.mean >= summary.min);
}

#[test]
fn solver_failure_is_reported() {
    let grid = downtown().grid([100.0, 100.0]).build().unwrap();
    let mut solver = MockFieldSolver::failing("scene not loaded");
    let err = RadioMap::compute(&mut solver, &grid, &emitters()).unwrap_err();
    assert_eq!(
        err,
        GridError::Solver {
            reason: "scene not loaded".into()
        }
    );
}

#[test]
fn short_solver_output_is_a_shape_error() {
    let grid = downtown().grid([100.0, 100.0]).build().unwrap();
    let mut solver = MockFieldSolver {
        truncate: true,
        ..MockFieldSolver::default()
    };
    let err = RadioMap::compute(&mut solver, &grid, &emitters()).unwrap_err();
    assert_eq!(
        err,
        GridError::ShapeMismatch {
            expected: 100,
            actual: 99
        }
    );
}

#[test]
fn non_divisible_extent_is_rejected() {
    let err = downtown().grid([30.0, 10.0]).build().unwrap_err();
    assert!(matches!(err, ConfigError::NonDivisibleGrid { .. }));
}

// ── Properties ──────────────────────────────────────────────────

fn arb_grid() -> impl Strategy<Value = SamplingGrid> {
    (
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        1usize..40,
        1usize..40,
        0.5f64..20.0,
        0.5f64..20.0,
    )
        .prop_map(|(cx, cy, nx, ny, dx, dy)| {
            SamplingGrid::build(
                [cx, cy, 0.0],
                [nx as f64 * dx, ny as f64 * dy],
                [dx, dy],
                1.5,
            )
            .unwrap()
        })
}

proptest! {
    #[test]
    fn flat_index_and_cell_of_are_inverse(grid in arb_grid()) {
        let (nx, ny) = grid.shape();
        for ix in 0..nx {
            for iy in 0..ny {
                let i = grid.flat_index(ix, iy).unwrap();
                prop_assert_eq!(grid.cell_of(i), Some((ix, iy)));
            }
        }
        prop_assert_eq!(grid.flat_index(nx, 0), None);
        prop_assert_eq!(grid.cell_of(grid.cell_count()), None);
    }

    #[test]
    fn cell_centers_are_evenly_spaced_inside_the_extent(grid in arb_grid()) {
        let [cx, cy, _] = grid.center();
        let [sx, sy] = grid.size();
        let [dx, dy] = grid.cell_size();
        for (coords, c, s, d) in [(grid.xs(), cx, sx, dx), (grid.ys(), cy, sy, dy)] {
            let tol = 1e-9 * (c.abs() + s);
            prop_assert!((coords[0] - (c - s / 2.0 + d / 2.0)).abs() <= tol);
            for pair in coords.windows(2) {
                prop_assert!(pair[1] > pair[0]);
                prop_assert!((pair[1] - pair[0] - d).abs() <= tol);
            }
            let last = coords[coords.len() - 1];
            prop_assert!(last < c + s / 2.0);
        }
    }

    #[test]
    fn points_follow_flat_order(grid in arb_grid()) {
        prop_assert_eq!(grid.points().count(), grid.cell_count());
        for (i, p) in grid.points().enumerate() {
            let (ix, iy) = grid.cell_of(i).unwrap();
            prop_assert_eq!(Some(p), grid.position(ix, iy));
        }
    }

    #[test]
    fn reshape_then_flatten_is_identity(grid in arb_grid()) {
        let values: Vec<usize> = (0..grid.cell_count()).collect();
        let rows = grid.reshape(&values).unwrap();
        prop_assert_eq!(rows.len(), grid.shape().0);
        prop_assert_eq!(grid.flatten(&rows).unwrap(), values);
    }
}
