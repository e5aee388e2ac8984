use crate::model::Coordinate;

pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Decides which coordinate a project should move to when it is released.
///
/// Returning the given coordinate means no change is needed. Plain functions
/// and closures of type `Fn(&Coordinate) -> Coordinate` are rules too.
pub trait ReleaseRule {
    fn release(&self, coordinate: &Coordinate) -> Coordinate;

    fn needs_change(&self, coordinate: &Coordinate) -> bool {
        &self.release(coordinate) != coordinate
    }
}

impl<F> ReleaseRule for F
where
    F: Fn(&Coordinate) -> Coordinate,
{
    fn release(&self, coordinate: &Coordinate) -> Coordinate {
        self(coordinate)
    }
}

/// Strips a development qualifier (`-SNAPSHOT` by default) from the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRule {
    suffix: String,
}

impl SnapshotRule {
    pub fn new(suffix: impl Into<String>) -> Self {
        SnapshotRule {
            suffix: suffix.into(),
        }
    }
}

impl Default for SnapshotRule {
    fn default() -> Self {
        SnapshotRule::new(SNAPSHOT_SUFFIX)
    }
}

impl ReleaseRule for SnapshotRule {
    fn release(&self, coordinate: &Coordinate) -> Coordinate {
        if self.suffix.is_empty() {
            return coordinate.clone();
        }

        // Repeated qualifiers are stripped together so releasing twice is a no-op.
        let mut released = coordinate.version.as_str();
        while let Some(stripped) = released.strip_suffix(self.suffix.as_str()) {
            released = stripped;
        }

        // A version made only of qualifiers has no released form.
        if released.is_empty() || released.len() == coordinate.version.len() {
            coordinate.clone()
        } else {
            coordinate.with_version(released)
        }
    }
}
