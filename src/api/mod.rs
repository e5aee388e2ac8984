use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use crate::{
    change_set::{analyze, build_changes, ReleaseAnalysis},
    graph::WorkspaceGraph,
    model::{Coordinate, ParseError},
    report::Report,
    rule::ReleaseRule,
    task::ChangeVersionTask,
    traversal::TraversalLimits,
};

mod builder;

pub use builder::GavReleaseBuilder;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("specify the GAV with the group:artifact:version format please")]
    MalformedCoordinate(#[source] ParseError),
    #[error("Could not load workspace file {}: {source}", path.display())]
    Workspace {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub struct GavRelease {
    graph: WorkspaceGraph,
    rule: Box<dyn ReleaseRule>,
    limits: TraversalLimits,
}

impl GavRelease {
    pub fn builder() -> GavReleaseBuilder {
        GavReleaseBuilder::default()
    }

    pub fn graph(&self) -> &WorkspaceGraph {
        &self.graph
    }

    /// Works out everything a release of `gav` implies for the workspace
    pub fn analyze(&self, gav: &str) -> Result<Report, ReleaseError> {
        let analysis = self.walk(gav)?;
        let changes = build_changes(&analysis, &self.graph, &*self.rule);
        debug!("{} changes needed to release {}", changes.len(), gav);
        Ok(Report::new(&analysis, changes, &*self.rule))
    }

    /// Lists the version changes to run, one per project needing a release
    pub fn tasks(&self, gav: &str) -> Result<Vec<ChangeVersionTask>, ReleaseError> {
        let analysis = self.walk(gav)?;
        Ok(ChangeVersionTask::for_analysis(&analysis))
    }

    fn walk(&self, gav: &str) -> Result<ReleaseAnalysis, ReleaseError> {
        let root = Coordinate::parse(gav).map_err(ReleaseError::MalformedCoordinate)?;
        Ok(analyze(&self.graph, &root, &*self.rule, self.limits))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    use pretty_assertions::assert_eq;

    fn fixture(name: &str) -> GavRelease {
        let resources = project_root::get_project_root()
            .expect("Not in a cargo project")
            .join(Path::new("resources"));
        GavRelease::builder()
            .root(resources)
            .workspace_file_name(name)
            .try_build()
            .unwrap()
    }

    #[test]
    fn malformed_coordinate_is_rejected() {
        let release = fixture("diamond.toml");
        let error = release.analyze("not-a-gav").unwrap_err();
        assert!(matches!(error, ReleaseError::MalformedCoordinate(_)));
        assert_eq!(
            error.to_string(),
            "specify the GAV with the group:artifact:version format please"
        );
        assert!(release.tasks("a:b").is_err());
    }

    #[test]
    fn analyze_diamond_fixture() {
        let release = fixture("diamond.toml");
        assert_eq!(release.graph().len(), 5);

        let report = release.analyze("com.acme:app:1.0-SNAPSHOT").unwrap();
        let released: Vec<String> = report.releases.iter().map(|r| r.to.to_string()).collect();
        assert_eq!(
            released,
            vec![
                "com.acme:app:1.0",
                "com.acme:parent:1.0",
                "com.acme:core:1.0",
                "com.acme:api:1.0",
                "com.acme:impl:1.0",
            ]
        );
        assert!(report.unlocated.is_empty());
        assert_eq!(
            report
                .changes
                .iter()
                .filter(|c| c.old_value == "com.acme:core:1.0-SNAPSHOT")
                .count(),
            3
        );
        assert!(report.changes[0]
            .location
            .project
            .descriptor
            .ends_with("app/pom.xml"));
    }

    #[test]
    fn tasks_for_diamond_fixture() {
        let release = fixture("diamond.toml");
        let tasks = release.tasks("com.acme:impl:1.0-SNAPSHOT").unwrap();
        let commands: Vec<String> = tasks.iter().map(|t| t.command()).collect();
        assert_eq!(
            commands,
            vec![
                "set-version com.acme:impl:1.0-SNAPSHOT",
                "set-version com.acme:parent:1.0-SNAPSHOT",
                "set-version com.acme:api:1.0-SNAPSHOT",
                "set-version com.acme:core:1.0-SNAPSHOT",
            ]
        );
    }

    #[test]
    fn custom_rule() {
        let resources = project_root::get_project_root()
            .expect("Not in a cargo project")
            .join("resources");
        let release = GavRelease::builder()
            .root(resources)
            .workspace_file_name("diamond.toml")
            .rule(|c: &Coordinate| {
                if c.artifact == "core" {
                    c.with_version("1.0")
                } else {
                    c.clone()
                }
            })
            .try_build()
            .unwrap();
        let report = release.analyze("com.acme:app:1.0-SNAPSHOT").unwrap();
        assert_eq!(report.releases.len(), 1);
        assert_eq!(report.releases[0].from.artifact, "core");
    }

    #[test]
    fn missing_workspace_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GavRelease::builder().root(dir.path()).try_build();
        assert!(matches!(result, Err(ReleaseError::Workspace { .. })));
    }
}
