use std::{collections::HashSet, fmt::Display};

use log::{debug, trace, warn};
use serde::Serialize;

use crate::{
    graph::ProjectGraph,
    model::{Coordinate, Project},
};

/// How a project was reached from the release root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitKind {
    Root,
    /// Through a parent link.
    Hierarchical,
    /// Through a dependency.
    Transitive,
}

impl Display for VisitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitKind::Root => f.write_str("root"),
            VisitKind::Hierarchical => f.write_str("hierarchical"),
            VisitKind::Transitive => f.write_str("transitive"),
        }
    }
}

/// Edge through which a missing project was referenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    Root,
    Parent { child: Coordinate },
    Dependency { dependent: Coordinate },
}

impl Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::Root => f.write_str("project not found"),
            NotFoundReason::Parent { child } => write!(f, "parent missing for project {child}"),
            NotFoundReason::Dependency { dependent } => {
                write!(f, "dependency missing for project {dependent}")
            }
        }
    }
}

pub trait Visitor {
    fn project(&mut self, kind: VisitKind, project: &Project);

    fn project_not_found(&mut self, coordinate: &Coordinate, reason: &NotFoundReason);
}

impl<V> Visitor for &mut V
where
    V: Visitor + ?Sized,
{
    fn project(&mut self, kind: VisitKind, project: &Project) {
        (**self).project(kind, project)
    }

    fn project_not_found(&mut self, coordinate: &Coordinate, reason: &NotFoundReason) {
        (**self).project_not_found(coordinate, reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitEvent {
    Project {
        kind: VisitKind,
        project: Project,
    },
    NotFound {
        coordinate: Coordinate,
        reason: NotFoundReason,
    },
}

/// Visitor keeping every event in the order it was emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitLog {
    pub events: Vec<VisitEvent>,
}

impl VisitLog {
    pub fn projects(&self) -> impl Iterator<Item = (VisitKind, &Project)> {
        self.events.iter().filter_map(|event| match event {
            VisitEvent::Project { kind, project } => Some((*kind, project)),
            VisitEvent::NotFound { .. } => None,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = (&Coordinate, &NotFoundReason)> {
        self.events.iter().filter_map(|event| match event {
            VisitEvent::NotFound { coordinate, reason } => Some((coordinate, reason)),
            VisitEvent::Project { .. } => None,
        })
    }
}

impl Visitor for VisitLog {
    fn project(&mut self, kind: VisitKind, project: &Project) {
        self.events.push(VisitEvent::Project {
            kind,
            project: project.clone(),
        });
    }

    fn project_not_found(&mut self, coordinate: &Coordinate, reason: &NotFoundReason) {
        self.events.push(VisitEvent::NotFound {
            coordinate: coordinate.clone(),
            reason: reason.clone(),
        });
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Stop after this many projects have been entered.
    pub max_projects: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalSummary {
    pub projects: usize,
    pub missing: usize,
    /// The walk stopped at `TraversalLimits::max_projects`.
    pub truncated: bool,
}

enum Edge {
    Root(Coordinate),
    Parent {
        child: Coordinate,
        parent: Coordinate,
    },
    Dependency {
        dependent: Coordinate,
        dependency: Coordinate,
    },
}

impl Edge {
    fn split(self) -> (VisitKind, Coordinate, NotFoundReason) {
        match self {
            Edge::Root(root) => (VisitKind::Root, root, NotFoundReason::Root),
            Edge::Parent { child, parent } => (
                VisitKind::Hierarchical,
                parent,
                NotFoundReason::Parent { child },
            ),
            Edge::Dependency {
                dependent,
                dependency,
            } => (
                VisitKind::Transitive,
                dependency,
                NotFoundReason::Dependency { dependent },
            ),
        }
    }
}

/// Walks the graph from `root` through parent links and dependencies.
///
/// The walk is depth first: the whole parent branch of a project is explored
/// before its dependencies, and dependencies are followed in declaration
/// order. Every project is entered at most once, so shared ancestors and
/// cycles are only reported the first time they are reached. Missing projects
/// are reported to the visitor and the walk carries on with the other edges.
pub fn visit<G, V>(
    graph: &G,
    root: &Coordinate,
    limits: TraversalLimits,
    mut visitor: V,
) -> TraversalSummary
where
    G: ProjectGraph + ?Sized,
    V: Visitor,
{
    let mut summary = TraversalSummary::default();
    let mut entered = HashSet::new();
    let mut stack = vec![Edge::Root(root.clone())];

    while let Some(edge) = stack.pop() {
        let (kind, coordinate, reason) = edge.split();

        let Some(project) = graph.find_project(&coordinate) else {
            debug!("{coordinate} not found: {reason}");
            summary.missing += 1;
            visitor.project_not_found(&coordinate, &reason);
            continue;
        };

        if entered.contains(&project.id) {
            trace!("{coordinate} already visited, skipping {kind} edge");
            continue;
        }

        if limits
            .max_projects
            .is_some_and(|max| summary.projects >= max)
        {
            warn!(
                "Stopped walking from {root} after {} projects",
                summary.projects
            );
            summary.truncated = true;
            break;
        }

        debug!("Visiting {kind} project {coordinate}");
        entered.insert(project.id);
        summary.projects += 1;
        visitor.project(kind, &project);

        for dependency in graph.dependencies_of(&project.coordinate).into_iter().rev() {
            stack.push(Edge::Dependency {
                dependent: project.coordinate.clone(),
                dependency,
            });
        }
        if let Some(parent) = graph.parent_of(&project.coordinate) {
            stack.push(Edge::Parent {
                child: project.coordinate.clone(),
                parent,
            });
        }
    }

    summary
}
