use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::{Coordinate, ParseError};

/// Projects of a workspace as listed in `gavrelease.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFile {
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub coordinate: Coordinate,
    pub descriptor: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<Coordinate>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub dependencies: Vec<Coordinate>,
}

impl WorkspaceFile {
    /// Reads a workspace file. Relative descriptor paths are resolved against
    /// the directory containing the file.
    pub fn from_file(path: &Path) -> Result<WorkspaceFile, ParseError> {
        debug!("Attempting to read workspace file {}", path.display());
        let contents = std::fs::read_to_string(path)?;

        let workspace = WorkspaceFile::from_toml_str(&contents);
        if let Err(err) = &workspace {
            error!(
                "Could not build a valid workspace from {} due to err {err}",
                path.display()
            )
        }
        let mut workspace = workspace?;

        if let Some(base) = path.parent() {
            for project in &mut workspace.projects {
                if project.descriptor.is_relative() {
                    project.descriptor = base.join(&project.descriptor);
                }
            }
        }

        Ok(workspace)
    }

    pub fn from_toml_str(data: &str) -> Result<WorkspaceFile, ParseError> {
        let workspace = toml::from_str::<WorkspaceFile>(data)?;

        let mut seen = HashSet::new();
        for project in &workspace.projects {
            if !seen.insert(&project.coordinate) {
                return Err(ParseError::DuplicateProject(project.coordinate.clone()));
            }
        }

        Ok(workspace)
    }
}
