//! Alignment of paths with differing lengths.

use indexmap::IndexMap;
use jamscape_core::{ConfigError, EmitterId};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::MotionError;
use crate::walk::MotionPath;

/// Policy for equalizing path lengths across emitters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// Fail with [`MotionError::LengthMismatch`] unless all lengths match.
    Error,
    /// Leave shorter paths short; only report the maximum length.
    None,
    /// Repeat each short path's final position until it reaches the maximum.
    #[default]
    PadEnd,
    /// Repeat each short path's first position in front until it reaches the maximum.
    PadStart,
}

impl PaddingMode {
    /// The canonical string name.
    pub fn as_str(self) -> &'static str {
        match self {
            PaddingMode::Error => "error",
            PaddingMode::None => "none",
            PaddingMode::PadEnd => "pad_end",
            PaddingMode::PadStart => "pad_start",
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaddingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(PaddingMode::Error),
            "none" => Ok(PaddingMode::None),
            "pad_end" => Ok(PaddingMode::PadEnd),
            "pad_start" => Ok(PaddingMode::PadStart),
            other => Err(ConfigError::UnknownPaddingMode {
                name: other.to_string(),
            }),
        }
    }
}

/// Paths keyed by emitter, with the longest length among them.
///
/// Produced by [`align_paths`]; the source paths are never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    paths: IndexMap<EmitterId, MotionPath>,
    max_steps: usize,
}

impl PathMatrix {
    /// Paths in registry order.
    pub fn paths(&self) -> &IndexMap<EmitterId, MotionPath> {
        &self.paths
    }

    /// Consume the matrix, returning its paths.
    pub fn into_paths(self) -> IndexMap<EmitterId, MotionPath> {
        self.paths
    }

    /// Path for one emitter.
    pub fn get(&self, id: &str) -> Option<&MotionPath> {
        self.paths.get(id)
    }

    /// Length of the longest path.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Number of emitters.
    pub fn emitter_count(&self) -> usize {
        self.paths.len()
    }

    /// Whether every path has exactly `max_steps` positions.
    pub fn is_aligned(&self) -> bool {
        self.paths.values().all(|p| p.len() == self.max_steps)
    }

    /// Emitter-major flat buffer `[emitter][step][axis]`.
    ///
    /// Returns `None` unless [`is_aligned`](Self::is_aligned) holds.
    pub fn flatten(&self) -> Option<Vec<f64>> {
        if !self.is_aligned() {
            return None;
        }
        let mut out = Vec::with_capacity(self.paths.len() * self.max_steps * 3);
        for path in self.paths.values() {
            for p in path.positions() {
                out.extend_from_slice(p);
            }
        }
        Some(out)
    }
}

/// Align `paths` to one common length under `mode`.
///
/// When all lengths already agree, every mode returns the paths unchanged.
///
/// # Errors
///
/// - [`MotionError::NoPaths`] if `paths` is empty
/// - [`MotionError::LengthMismatch`] for [`PaddingMode::Error`] over unequal lengths
pub fn align_paths<'a>(
    paths: impl IntoIterator<Item = (&'a EmitterId, &'a MotionPath)>,
    mode: PaddingMode,
) -> Result<PathMatrix, MotionError> {
    let paths: Vec<(&EmitterId, &MotionPath)> = paths.into_iter().collect();
    let max_steps = paths
        .iter()
        .map(|(_, p)| p.len())
        .max()
        .ok_or(MotionError::NoPaths)?;
    let all_equal = paths.iter().all(|(_, p)| p.len() == max_steps);

    if mode == PaddingMode::Error && !all_equal {
        return Err(MotionError::LengthMismatch {
            lengths: paths
                .iter()
                .map(|(id, p)| ((*id).clone(), p.len()))
                .collect(),
        });
    }

    let mut out = IndexMap::with_capacity(paths.len());
    for (id, path) in paths {
        let aligned = if path.len() == max_steps {
            path.clone()
        } else {
            match mode {
                PaddingMode::PadEnd => path.padded_end(max_steps),
                PaddingMode::PadStart => path.padded_start(max_steps),
                PaddingMode::None | PaddingMode::Error => path.clone(),
            }
        };
        if aligned.len() != path.len() {
            debug!(
                emitter = %id,
                from = path.len(),
                to = max_steps,
                mode = %mode,
                "padded path"
            );
        }
        out.insert(id.clone(), aligned);
    }

    Ok(PathMatrix {
        paths: out,
        max_steps,
    })
}
