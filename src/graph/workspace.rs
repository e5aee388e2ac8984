use std::collections::HashMap;

use log::trace;

use crate::model::{
    workspace::{ProjectEntry, WorkspaceFile},
    Coordinate, Project, ProjectId,
};

use super::{Location, LocationResolver, ProjectGraph, ReferenceSite};

struct Node {
    project: Project,
    parent: Option<Coordinate>,
    dependencies: Vec<Coordinate>,
}

/// In-memory project graph built from a workspace file.
///
/// Edges may point at coordinates that have no project in the workspace,
/// those show up as missing projects during a release walk.
pub struct WorkspaceGraph {
    nodes: Vec<Node>,
    index: HashMap<Coordinate, ProjectId>,
}

impl WorkspaceGraph {
    pub fn from_workspace(workspace: WorkspaceFile) -> WorkspaceGraph {
        let mut nodes = Vec::with_capacity(workspace.projects.len());
        let mut index = HashMap::with_capacity(workspace.projects.len());

        for ProjectEntry {
            coordinate,
            descriptor,
            parent,
            dependencies,
        } in workspace.projects
        {
            let id = ProjectId::new(nodes.len());
            // The workspace file rejects duplicates, keep the first one otherwise.
            if index.contains_key(&coordinate) {
                continue;
            }
            index.insert(coordinate.clone(), id);
            nodes.push(Node {
                project: Project::new(id, coordinate, descriptor),
                parent,
                dependencies,
            });
        }

        WorkspaceGraph { nodes, index }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, coordinate: &Coordinate) -> Option<&Node> {
        self.index
            .get(coordinate)
            .and_then(|id| self.nodes.get(id.index()))
    }
}

impl ProjectGraph for WorkspaceGraph {
    fn find_project(&self, coordinate: &Coordinate) -> Option<Project> {
        self.node(coordinate).map(|node| node.project.clone())
    }

    fn parent_of(&self, coordinate: &Coordinate) -> Option<Coordinate> {
        self.node(coordinate).and_then(|node| node.parent.clone())
    }

    fn dependencies_of(&self, coordinate: &Coordinate) -> Vec<Coordinate> {
        self.node(coordinate)
            .map(|node| node.dependencies.clone())
            .unwrap_or_default()
    }
}

impl LocationResolver for WorkspaceGraph {
    fn impacted_locations(&self, coordinate: &Coordinate) -> Vec<Location> {
        let mut locations = Vec::new();
        for node in &self.nodes {
            let mut push = |site| {
                locations.push(Location::new(
                    node.project.clone(),
                    site,
                    coordinate.clone(),
                ))
            };
            if &node.project.coordinate == coordinate {
                push(ReferenceSite::Declaration);
            }
            if node.parent.as_ref() == Some(coordinate) {
                push(ReferenceSite::Parent);
            }
            if node.dependencies.contains(coordinate) {
                push(ReferenceSite::Dependency);
            }
        }
        trace!(
            "Found {} locations referencing {}",
            locations.len(),
            coordinate
        );
        locations
    }
}
