use std::{fmt::Display, path::PathBuf};

use serde::Serialize;

use super::Coordinate;

/// Identity of a project inside one graph. Two projects may never share an id,
/// even if a graph maps several coordinates to the same descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
pub struct ProjectId(usize);

impl ProjectId {
    pub fn new(index: usize) -> Self {
        ProjectId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub coordinate: Coordinate,
    /// Path of the descriptor (pom) declaring this project.
    pub descriptor: PathBuf,
}

impl Project {
    pub fn new(id: ProjectId, coordinate: Coordinate, descriptor: impl Into<PathBuf>) -> Self {
        Project {
            id,
            coordinate,
            descriptor: descriptor.into(),
        }
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.coordinate, self.descriptor.display())
    }
}
