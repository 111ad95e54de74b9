//! End-to-end mobile jammer scenario.
//!
//! Demonstrates: map extent → seeded walks → padded path matrix → per-step
//! scene sync → radio map per step.
//!
//! Run with `RUST_LOG=debug` to see per-walk and per-padding events.

use std::collections::HashMap;
use std::convert::Infallible;

use indexmap::IndexMap;
use jamscape::grid::FieldSummary;
use jamscape::prelude::*;
use jamscape::types::distance;
use tracing_subscriber::EnvFilter;

/// Scene stand-in: transmitters by name.
struct Scene {
    transmitters: HashMap<String, Transmitter>,
}

struct Transmitter {
    position: Position,
}

impl SceneEntity for Transmitter {
    fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl SceneStore for Scene {
    fn get(&mut self, name: &str) -> Option<&mut dyn SceneEntity> {
        self.transmitters
            .get_mut(name)
            .map(|t| t as &mut dyn SceneEntity)
    }
}

/// Free-space falloff, `p / d^2`, floored at one meter.
struct FreeSpace {
    power: f64,
}

impl FieldSolver for FreeSpace {
    type Error = Infallible;

    fn solve(
        &mut self,
        grid: &SamplingGrid,
        emitters: &[(EmitterId, Position)],
    ) -> Result<Vec<Vec<f64>>, Infallible> {
        Ok(emitters
            .iter()
            .map(|(_, tx)| {
                grid.points()
                    .map(|p| self.power / distance(&p, tx).max(1.0).powi(2))
                    .collect()
            })
            .collect())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Jamscape Mobile Jammer Example ===\n");

    let extent = MapExtent::new(
        AxisRange::new(-500.0, 500.0),
        AxisRange::new(-500.0, 500.0),
        10.0,
    );
    let mut engine = MotionEngine::new(Some(extent.bounds()));

    let failures = engine.add_random_walks(vec![
        (
            EmitterId::from("Tx1"),
            WalkSpec::new([70.0, -10.0, 10.0], 20, 10.0).seed(42),
        ),
        (
            EmitterId::from("Tx2"),
            WalkSpec::new([-260.0, 100.0, 10.0], 12, 15.0).seed(7),
        ),
    ]);
    for (id, err) in &failures {
        println!("  {id}: rejected ({err})");
    }

    for id in engine.emitter_ids() {
        let meta = engine.metadata(id.as_str()).unwrap();
        println!(
            "  {id}: {} steps, {:.1} m travelled, {:.1} m/s nominal",
            meta.num_steps, meta.total_distance, meta.avg_velocity
        );
    }

    let matrix = engine.create_path_matrix(PaddingMode::PadEnd).unwrap();
    println!("\nPath matrix: {} emitters x {} steps\n", matrix.emitter_count(), matrix.max_steps());

    let mut scene = Scene {
        transmitters: engine
            .emitter_ids()
            .map(|id| {
                let start = engine.path(id.as_str()).unwrap().first();
                (id.to_string(), Transmitter { position: start })
            })
            .collect(),
    };

    let grid = extent.grid([50.0, 50.0]).height(1.5).build().unwrap();
    let mut solver = FreeSpace { power: 1.0 };

    for step in (0..matrix.max_steps()).step_by(5) {
        let report = engine.update_scene_transmitters(&mut scene, step);
        let positions: IndexMap<EmitterId, Position> = engine.positions_at_step(step);
        let map = RadioMap::compute(&mut solver, &grid, &positions).unwrap();
        let combined = FieldSummary::from_linear(&map.combined()).unwrap();
        println!(
            "  step {step:>2}: moved {} transmitter(s), combined field max={:>7.2} dB mean={:>7.2} dB",
            report.updated.len(),
            combined.max,
            combined.mean,
        );
    }

    if let Some(tx) = scene.transmitters.get("Tx1") {
        let [x, y, z] = tx.position;
        println!("\n  Tx1 last synced at ({x:.1}, {y:.1}, {z:.1})");
    }

    println!("\nDone.");
}
