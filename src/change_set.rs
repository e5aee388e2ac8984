use std::collections::HashSet;

use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    graph::{Location, LocationResolver, ProjectGraph},
    model::{Coordinate, Project, ProjectId},
    rule::ReleaseRule,
    traversal::{
        self, NotFoundReason, TraversalLimits, TraversalSummary, VisitKind, VisitLog, Visitor,
    },
};

/// One text substitution in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Change {
    pub old_value: String,
    pub new_value: String,
    pub location: Location,
}

/// A project that should be released but has no sources in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlocatedProject {
    pub coordinate: Coordinate,
    pub reason: NotFoundReason,
}

/// Outcome of walking the graph from a release root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAnalysis {
    pub root: Coordinate,
    /// Projects needing a new coordinate, in the order they were reached.
    pub projects: Vec<Project>,
    pub unlocated: Vec<UnlocatedProject>,
    pub visits: VisitLog,
    pub summary: TraversalSummary,
}

impl ReleaseAnalysis {
    /// A truncated walk never counts as up to date.
    pub fn is_up_to_date(&self) -> bool {
        !self.summary.truncated && self.projects.is_empty() && self.unlocated.is_empty()
    }
}

struct ReleaseCollector<'r, R: ?Sized> {
    rule: &'r R,
    seen: HashSet<ProjectId>,
    projects: Vec<Project>,
    unlocated: Vec<UnlocatedProject>,
    visits: VisitLog,
}

impl<'r, R> Visitor for ReleaseCollector<'r, R>
where
    R: ReleaseRule + ?Sized,
{
    fn project(&mut self, kind: VisitKind, project: &Project) {
        self.visits.project(kind, project);
        if self.rule.needs_change(&project.coordinate) && self.seen.insert(project.id) {
            debug!("{} needs to be released", project.coordinate);
            self.projects.push(project.clone());
        }
    }

    fn project_not_found(&mut self, coordinate: &Coordinate, reason: &NotFoundReason) {
        self.visits.project_not_found(coordinate, reason);
        if self.rule.needs_change(coordinate) {
            warn!("{coordinate} should be changed but its sources can't be found ({reason})");
            self.unlocated.push(UnlocatedProject {
                coordinate: coordinate.clone(),
                reason: reason.clone(),
            });
        }
    }
}

/// Walks the graph from `root` and keeps the projects `rule` wants to change.
pub fn analyze<G, R>(
    graph: &G,
    root: &Coordinate,
    rule: &R,
    limits: TraversalLimits,
) -> ReleaseAnalysis
where
    G: ProjectGraph + ?Sized,
    R: ReleaseRule + ?Sized,
{
    let mut collector = ReleaseCollector {
        rule,
        seen: HashSet::new(),
        projects: Vec::new(),
        unlocated: Vec::new(),
        visits: VisitLog::default(),
    };
    let summary = traversal::visit(graph, root, limits, &mut collector);

    info!(
        "Visited {} projects from {root}, {} to release, {} missing",
        summary.projects,
        collector.projects.len(),
        summary.missing
    );

    ReleaseAnalysis {
        root: root.clone(),
        projects: collector.projects,
        unlocated: collector.unlocated,
        visits: collector.visits,
        summary,
    }
}

/// Lists every edit needed to move the analysed projects to their released
/// coordinates.
///
/// Changes follow the order of `analysis.projects`, then the order the
/// resolver returns locations in. A location is never rewritten twice to the
/// same value.
pub fn build_changes<L, R>(analysis: &ReleaseAnalysis, resolver: &L, rule: &R) -> Vec<Change>
where
    L: LocationResolver + ?Sized,
    R: ReleaseRule + ?Sized,
{
    let mut seen = HashSet::new();
    let mut changes = Vec::new();

    for project in &analysis.projects {
        let old_value = project.coordinate.to_string();
        let new_value = rule.release(&project.coordinate).to_string();

        let locations = resolver.impacted_locations(&project.coordinate);
        if locations.is_empty() {
            debug!("No location references {old_value}");
        }

        for location in locations {
            if !seen.insert((location.clone(), new_value.clone())) {
                continue;
            }
            changes.push(Change {
                old_value: old_value.clone(),
                new_value: new_value.clone(),
                location,
            });
        }
    }

    changes
}
