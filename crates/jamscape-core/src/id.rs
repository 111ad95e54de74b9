//! Strongly-typed emitter identifiers and the [`Position`] type alias.

use std::borrow::Borrow;
use std::fmt;

/// A point in scene coordinates, `[x, y, z]` in meters.
pub type Position = [f64; 3];

/// Euclidean distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Identifies one mobile emitter (jammer, transmitter) within a session.
///
/// The same string names the matching entity in the external scene, so
/// scene synchronization looks entities up by [`EmitterId::as_str`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(String);

impl EmitterId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmitterId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for EmitterId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

// Derived `Hash` hashes only the inner `String`, which matches `str`.
impl Borrow<str> for EmitterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0]), 5.0);
        assert_eq!(distance(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn emitter_id_looks_up_by_str() {
        let mut map = HashMap::new();
        map.insert(EmitterId::from("Tx1"), 1);
        assert_eq!(map.get("Tx1"), Some(&1));
        assert_eq!(map.get("Tx2"), None);
    }

    #[test]
    fn emitter_id_displays_raw_name() {
        assert_eq!(EmitterId::new("jammer_a").to_string(), "jammer_a");
    }
}
