mod workspace;

use std::fmt::Display;

use serde::Serialize;

use crate::model::{Coordinate, Project};

pub use workspace::WorkspaceGraph;

/// Read-only view of the projects of a workspace and the edges between them.
pub trait ProjectGraph {
    fn find_project(&self, coordinate: &Coordinate) -> Option<Project>;

    fn parent_of(&self, coordinate: &Coordinate) -> Option<Coordinate>;

    /// Dependencies in declaration order.
    fn dependencies_of(&self, coordinate: &Coordinate) -> Vec<Coordinate>;
}

/// Finds every place in the workspace descriptors that mentions a coordinate.
pub trait LocationResolver {
    /// Each textual reference site is returned once.
    fn impacted_locations(&self, coordinate: &Coordinate) -> Vec<Location>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceSite {
    /// The project's own `group:artifact:version`.
    Declaration,
    /// The parent section of a child project.
    Parent,
    /// A dependency declaration.
    Dependency,
}

impl Display for ReferenceSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceSite::Declaration => f.write_str("project declaration"),
            ReferenceSite::Parent => f.write_str("parent reference"),
            ReferenceSite::Dependency => f.write_str("dependency reference"),
        }
    }
}

/// One site in `project`'s descriptor where `coordinate` is written down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub site: ReferenceSite,
    pub coordinate: Coordinate,
    pub project: Project,
}

impl Location {
    pub fn new(project: Project, site: ReferenceSite, coordinate: Coordinate) -> Self {
        Location {
            project,
            site,
            coordinate,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} in project {}",
            self.site, self.coordinate, self.project.coordinate
        )
    }
}

/// Builds a graph from `(coordinate, parent, dependencies)` triples.
#[cfg(test)]
pub(crate) fn test_graph(projects: &[(&str, Option<&str>, &[&str])]) -> WorkspaceGraph {
    use crate::model::workspace::{ProjectEntry, WorkspaceFile};

    let gav = |text: &str| Coordinate::parse(text).unwrap();
    let projects = projects
        .iter()
        .map(|&(coordinate, parent, dependencies)| {
            let coordinate = gav(coordinate);
            ProjectEntry {
                descriptor: format!("{}/pom.xml", coordinate.artifact).into(),
                coordinate,
                parent: parent.map(gav),
                dependencies: dependencies.iter().copied().map(gav).collect(),
            }
        })
        .collect();
    WorkspaceGraph::from_workspace(WorkspaceFile { projects })
}
