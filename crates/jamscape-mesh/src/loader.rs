//! Driving an external geometry loader over a set of mesh files.

use jamscape_core::Position;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{LoadError, LoadWarning};
use crate::fragment::MeshFragment;

/// Reads one mesh file and reports its axis-aligned bounding corners.
///
/// Implementations wrap whatever mesh library the surrounding system uses;
/// this crate never parses geometry formats itself.
pub trait GeometryLoader {
    /// Load `path` and return `(bbox_min, bbox_max)`.
    fn load_bounds(&self, path: &Path) -> Result<(Position, Position), LoadError>;
}

/// Fragments that loaded, plus a warning for each that did not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentScan {
    /// Successfully loaded fragments, in load order.
    pub fragments: Vec<MeshFragment>,
    /// One entry per excluded file.
    pub warnings: Vec<LoadWarning>,
}

/// Load every path through `loader`.
///
/// The source identifier of each fragment is the path's file name. A file
/// that fails to load, or loads with non-finite or inverted corners, is
/// logged and recorded as a [`LoadWarning`]; the rest of the batch
/// proceeds.
pub fn load_fragments<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
    loader: &dyn GeometryLoader,
) -> FragmentScan {
    let mut scan = FragmentScan::default();
    for path in paths {
        let path = path.as_ref();
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match loader.load_bounds(path).and_then(check_corners) {
            Ok((bbox_min, bbox_max)) => scan.fragments.push(MeshFragment {
                source,
                bbox_min,
                bbox_max,
            }),
            Err(error) => {
                warn!(source = %source, error = %error, "failed to load mesh fragment");
                scan.warnings.push(LoadWarning { source, error });
            }
        }
    }
    scan
}

/// Load every file in `dir` with the given extension (without the dot),
/// in file-name order.
///
/// # Errors
///
/// Returns `Err` only if the directory itself cannot be listed. Individual
/// file failures are reported in [`FragmentScan::warnings`].
pub fn scan_fragments(
    dir: &Path,
    extension: &str,
    loader: &dyn GeometryLoader,
) -> io::Result<FragmentScan> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            paths.push(path);
        }
    }
    paths.sort();

    let scan = load_fragments(&paths, loader);
    info!(
        dir = %dir.display(),
        loaded = scan.fragments.len(),
        skipped = scan.warnings.len(),
        "scanned mesh fragments"
    );
    Ok(scan)
}

fn check_corners(
    (bbox_min, bbox_max): (Position, Position),
) -> Result<(Position, Position), LoadError> {
    if bbox_min.iter().chain(&bbox_max).any(|v| !v.is_finite()) {
        return Err(LoadError::InvalidGeometry {
            reason: "non-finite bounding corner".into(),
        });
    }
    if (0..3).any(|i| bbox_min[i] > bbox_max[i]) {
        return Err(LoadError::InvalidGeometry {
            reason: format!("inverted bounding box {bbox_min:?} > {bbox_max:?}"),
        });
    }
    Ok((bbox_min, bbox_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByName;

    impl GeometryLoader for ByName {
        fn load_bounds(&self, path: &Path) -> Result<(Position, Position), LoadError> {
            match path.file_name().and_then(|n| n.to_str()) {
                Some("ok.ply") => Ok(([0.0; 3], [1.0; 3])),
                Some("nan.ply") => Ok(([f64::NAN, 0.0, 0.0], [1.0; 3])),
                Some("flipped.ply") => Ok(([2.0; 3], [1.0; 3])),
                _ => Err(LoadError::Io {
                    reason: "no such file".into(),
                }),
            }
        }
    }

    #[test]
    fn failures_become_warnings() {
        let scan = load_fragments(
            ["meshes/ok.ply", "meshes/missing.ply", "meshes/nan.ply", "meshes/flipped.ply"],
            &ByName,
        );
        assert_eq!(scan.fragments.len(), 1);
        assert_eq!(scan.fragments[0].source, "ok.ply");
        let skipped: Vec<&str> = scan.warnings.iter().map(|w| w.source.as_str()).collect();
        assert_eq!(skipped, vec!["missing.ply", "nan.ply", "flipped.ply"]);
        assert!(matches!(scan.warnings[0].error, LoadError::Io { .. }));
        assert!(matches!(
            scan.warnings[1].error,
            LoadError::InvalidGeometry { .. }
        ));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = std::env::temp_dir().join("jamscape-mesh-does-not-exist-7f3a");
        assert!(scan_fragments(&dir, "ply", &ByName).is_err());
    }
}
