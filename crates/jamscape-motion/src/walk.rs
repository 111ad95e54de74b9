//! Seeded random-walk path generation.
//!
//! Respects the determinism contract: the RNG is a ChaCha8 stream seeded
//! from [`WalkSpec::seed`], so identical specs and bounds reproduce a
//! bit-identical path. Each step draws three standard normal components
//! (Box-Muller), zeroes the vertical one for planar walks, normalizes,
//! scales by `step_size`, and clips against the bounds.

use jamscape_core::{distance, Bounds, Position, ValidationError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::MotionError;

/// Largest coordinate magnitude a walk may reach. Squared distances of
/// positions within this limit stay finite.
pub const MAX_REACH: f64 = 1e150;

/// Parameters for one random walk.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkSpec {
    /// Position of step 0. Must satisfy any bounds the walk is clipped to.
    pub start: Position,
    /// Number of positions in the path, including the start. Must be >= 1.
    pub num_steps: usize,
    /// Displacement magnitude of every unclipped step. Must be > 0.
    pub step_size: f64,
    /// Seconds per step, used only for the nominal velocity. Default: 0.1.
    pub time_step: f64,
    /// Keep the vertical coordinate fixed. Default: true.
    pub planar: bool,
    /// RNG seed. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for WalkSpec {
    fn default() -> Self {
        Self {
            start: [0.0; 3],
            num_steps: 100,
            step_size: 1.0,
            time_step: 0.1,
            planar: true,
            seed: None,
        }
    }
}

impl WalkSpec {
    /// A spec with the given start, length, and step size; other fields default.
    pub fn new(start: Position, num_steps: usize, step_size: f64) -> Self {
        Self {
            start,
            num_steps,
            step_size,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the time step.
    pub fn time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set whether the walk stays in the horizontal plane.
    pub fn planar(mut self, planar: bool) -> Self {
        self.planar = planar;
        self
    }

    /// Check numeric parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `num_steps` is zero
    /// - `step_size` is NaN, infinite, zero, or negative
    /// - `time_step` or any start component is NaN or infinite
    /// - the start plus `num_steps - 1` full steps could pass [`MAX_REACH`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.num_steps == 0 {
            return Err(ValidationError::ZeroSteps);
        }
        if !self.step_size.is_finite() {
            return Err(ValidationError::NonFinite {
                name: "step_size",
                value: self.step_size,
            });
        }
        if self.step_size <= 0.0 {
            return Err(ValidationError::NonPositiveStepSize {
                value: self.step_size,
            });
        }
        if !self.time_step.is_finite() {
            return Err(ValidationError::NonFinite {
                name: "time_step",
                value: self.time_step,
            });
        }
        if let Some(&value) = self.start.iter().find(|v| !v.is_finite()) {
            return Err(ValidationError::NonFinite {
                name: "start",
                value,
            });
        }
        let start_max = self.start.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        let reach = start_max + self.step_size * (self.num_steps - 1) as f64;
        if reach > MAX_REACH {
            return Err(ValidationError::ExcessiveReach {
                reach,
                limit: MAX_REACH,
            });
        }
        Ok(())
    }

    /// Intended speed, `step_size / time_step`, or 0 for a non-positive time step.
    ///
    /// This is nominal: clipping can shorten realized steps, and the figure
    /// does not account for that.
    pub fn nominal_velocity(&self) -> f64 {
        if self.time_step > 0.0 {
            self.step_size / self.time_step
        } else {
            0.0
        }
    }
}

/// An ordered, non-empty sequence of positions, one per step.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionPath(Vec<Position>);

impl MotionPath {
    /// Wrap a position list. Returns `None` if it is empty.
    pub fn from_positions(positions: Vec<Position>) -> Option<Self> {
        if positions.is_empty() {
            None
        } else {
            Some(Self(positions))
        }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; paths hold at least the start position.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position at `step`, or `None` past the end.
    pub fn get(&self, step: usize) -> Option<Position> {
        self.0.get(step).copied()
    }

    /// Step 0.
    pub fn first(&self) -> Position {
        self.0[0]
    }

    /// Final step.
    pub fn last(&self) -> Position {
        self.0[self.0.len() - 1]
    }

    /// All positions in step order.
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Sum of Euclidean distances between consecutive positions.
    pub fn total_distance(&self) -> f64 {
        self.0.windows(2).map(|w| distance(&w[0], &w[1])).sum()
    }

    /// A new path extended to `len` by repeating the final position.
    pub fn padded_end(&self, len: usize) -> Self {
        let mut out = self.0.clone();
        out.resize(len.max(self.len()), self.last());
        Self(out)
    }

    /// A new path extended to `len` by repeating the first position in front.
    pub fn padded_start(&self, len: usize) -> Self {
        let pad = len.saturating_sub(self.len());
        let mut out = Vec::with_capacity(pad + self.len());
        out.resize(pad, self.first());
        out.extend_from_slice(&self.0);
        Self(out)
    }
}

/// Descriptive figures for a generated path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathMetadata {
    /// Realized path length in meters, after clipping.
    pub total_distance: f64,
    /// Nominal speed; see [`WalkSpec::nominal_velocity`].
    pub avg_velocity: f64,
    /// Seconds per step.
    pub time_step: f64,
    /// Requested displacement per step.
    pub step_size: f64,
    /// Number of positions in the path.
    pub num_steps: usize,
}

/// A generated path together with its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomWalk {
    /// The positions.
    pub path: MotionPath,
    /// Figures describing the positions.
    pub metadata: PathMetadata,
}

/// Generate one random walk.
///
/// `bounds` clips each axis it constrains after every step; the start must
/// already lie inside them.
///
/// # Errors
///
/// - [`MotionError::Validation`] if the spec fails [`WalkSpec::validate`]
///   or the start lies outside `bounds`
/// - [`MotionError::Config`] if `bounds` is inverted or non-finite
pub fn generate_random_walk(
    spec: &WalkSpec,
    bounds: Option<&Bounds>,
) -> Result<RandomWalk, MotionError> {
    spec.validate()?;
    if let Some(b) = bounds {
        b.validate()?;
        for (axis, range) in b.iter() {
            let value = spec.start[axis.index()];
            if !range.contains(value) {
                return Err(ValidationError::StartOutOfBounds { axis, value, range }.into());
            }
        }
    }

    let seed = spec.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut positions = Vec::with_capacity(spec.num_steps);
    let mut current = spec.start;
    positions.push(current);
    for _ in 1..spec.num_steps {
        let dir = sample_direction(&mut rng, spec.planar);
        for (c, d) in current.iter_mut().zip(dir) {
            *c += d * spec.step_size;
        }
        if let Some(b) = bounds {
            b.clip(&mut current);
        }
        positions.push(current);
    }

    let path = MotionPath(positions);
    let metadata = PathMetadata {
        total_distance: path.total_distance(),
        avg_velocity: spec.nominal_velocity(),
        time_step: spec.time_step,
        step_size: spec.step_size,
        num_steps: spec.num_steps,
    };
    Ok(RandomWalk { path, metadata })
}

/// Unit direction with normally distributed components.
///
/// A zero-length draw is discarded and redrawn.
fn sample_direction(rng: &mut ChaCha8Rng, planar: bool) -> Position {
    loop {
        let mut d = [box_muller(rng), box_muller(rng), box_muller(rng)];
        if planar {
            d[2] = 0.0;
        }
        let norm = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        if norm > 0.0 && norm.is_finite() {
            return [d[0] / norm, d[1] / norm, d[2] / norm];
        }
    }
}

/// Standard normal sample via the Box-Muller transform.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamscape_core::{Axis, AxisRange, ConfigError};

    fn scenario_a() -> WalkSpec {
        WalkSpec::new([0.0, 0.0, 10.0], 5, 10.0).seed(42)
    }

    #[test]
    fn scenario_a_planar_walk() {
        let walk = generate_random_walk(&scenario_a(), None).unwrap();
        assert_eq!(walk.path.len(), 5);
        assert_eq!(walk.path.first(), [0.0, 0.0, 10.0]);
        for p in walk.path.positions() {
            assert_eq!(p[2], 10.0);
        }
        assert!((walk.metadata.total_distance - 40.0).abs() < 1e-9);
        assert_eq!(walk.metadata.num_steps, 5);
        assert_eq!(walk.metadata.step_size, 10.0);
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let a = generate_random_walk(&scenario_a(), None).unwrap();
        let b = generate_random_walk(&scenario_a(), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_random_walk(&scenario_a(), None).unwrap();
        let b = generate_random_walk(&scenario_a().seed(43), None).unwrap();
        assert_ne!(a.path, b.path);
    }

    #[test]
    fn single_step_is_just_the_start() {
        let spec = WalkSpec::new([1.0, 2.0, 3.0], 1, 5.0).seed(0);
        let walk = generate_random_walk(&spec, None).unwrap();
        assert_eq!(walk.path.positions(), &[[1.0, 2.0, 3.0]]);
        assert_eq!(walk.metadata.total_distance, 0.0);
    }

    #[test]
    fn three_dimensional_steps_keep_magnitude() {
        let spec = WalkSpec::new([0.0; 3], 20, 2.5).seed(7).planar(false);
        let walk = generate_random_walk(&spec, None).unwrap();
        let zs: Vec<f64> = walk.path.positions().iter().map(|p| p[2]).collect();
        assert!(zs.iter().any(|&z| z != 0.0), "non-planar walk should move vertically");
        for w in walk.path.positions().windows(2) {
            assert!((distance(&w[0], &w[1]) - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn avg_velocity_is_nominal_even_when_clipped() {
        // Pinning x and y to a point means the path never actually moves.
        let bounds = Bounds::unbounded()
            .with(Axis::X, AxisRange::new(0.0, 0.0))
            .with(Axis::Y, AxisRange::new(0.0, 0.0));
        let spec = WalkSpec::new([0.0; 3], 10, 3.0).seed(1).time_step(0.5);
        let walk = generate_random_walk(&spec, Some(&bounds)).unwrap();
        assert_eq!(walk.metadata.total_distance, 0.0);
        assert_eq!(walk.metadata.avg_velocity, 6.0);
    }

    #[test]
    fn non_positive_time_step_yields_zero_velocity() {
        let spec = scenario_a().time_step(0.0);
        let walk = generate_random_walk(&spec, None).unwrap();
        assert_eq!(walk.metadata.avg_velocity, 0.0);
        let spec = scenario_a().time_step(-1.0);
        assert_eq!(spec.nominal_velocity(), 0.0);
    }

    #[test]
    fn zero_steps_rejected() {
        let spec = WalkSpec::new([0.0; 3], 0, 1.0);
        assert_eq!(
            generate_random_walk(&spec, None),
            Err(MotionError::Validation(ValidationError::ZeroSteps))
        );
    }

    #[test]
    fn non_positive_step_size_rejected() {
        for bad in [0.0, -1.0] {
            let spec = WalkSpec::new([0.0; 3], 3, bad);
            assert!(matches!(
                generate_random_walk(&spec, None),
                Err(MotionError::Validation(
                    ValidationError::NonPositiveStepSize { .. }
                ))
            ));
        }
    }

    #[test]
    fn nan_step_size_rejected() {
        let spec = WalkSpec::new([0.0; 3], 3, f64::NAN);
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::NonFinite {
                name: "step_size",
                ..
            })
        ));
    }

    #[test]
    fn huge_step_size_rejected_before_overflow() {
        let spec = WalkSpec::new([0.0; 3], 3, 1e308).seed(1);
        assert!(matches!(
            generate_random_walk(&spec, None),
            Err(MotionError::Validation(ValidationError::ExcessiveReach { .. }))
        ));

        let spec = WalkSpec::new([1e150, 0.0, 0.0], 2, 1e140).seed(1);
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::ExcessiveReach { .. })
        ));

        // A single-point path never moves, whatever the step size.
        let spec = WalkSpec::new([0.0; 3], 1, 1e308).seed(1);
        let walk = generate_random_walk(&spec, None).unwrap();
        assert_eq!(walk.metadata.total_distance, 0.0);
    }

    #[test]
    fn large_walks_keep_finite_metadata() {
        let spec = WalkSpec::new([0.0; 3], 4, 1e100).seed(9);
        let walk = generate_random_walk(&spec, None).unwrap();
        assert!(walk.path.positions().iter().flatten().all(|v| v.is_finite()));
        assert!(walk.metadata.total_distance.is_finite());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let bounds = Bounds::unbounded().with(Axis::X, AxisRange::new(5.0, -5.0));
        let result = generate_random_walk(&scenario_a(), Some(&bounds));
        assert!(matches!(
            result,
            Err(MotionError::Config(ConfigError::InvertedBounds {
                axis: Axis::X,
                ..
            }))
        ));
    }

    #[test]
    fn start_outside_bounds_rejected() {
        let bounds = Bounds::unbounded().with(Axis::Z, AxisRange::new(0.0, 5.0));
        let result = generate_random_walk(&scenario_a(), Some(&bounds));
        assert!(matches!(
            result,
            Err(MotionError::Validation(ValidationError::StartOutOfBounds {
                axis: Axis::Z,
                ..
            }))
        ));
    }

    #[test]
    fn padding_builds_new_paths() {
        let path = MotionPath::from_positions(vec![[1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]).unwrap();
        let end = path.padded_end(4);
        let start = path.padded_start(4);
        assert_eq!(
            end.positions(),
            &[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 0.0, 0.0]]
        );
        assert_eq!(
            start.positions(),
            &[[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]
        );
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn empty_position_list_is_not_a_path() {
        assert!(MotionPath::from_positions(Vec::new()).is_none());
    }
}
