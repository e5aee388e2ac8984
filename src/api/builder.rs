use std::{env, path::PathBuf};

use crate::{
    graph::WorkspaceGraph,
    model::workspace::WorkspaceFile,
    rule::{ReleaseRule, SnapshotRule},
    traversal::TraversalLimits,
    GavRelease,
};

use super::ReleaseError;

#[derive(Default)]
pub struct GavReleaseBuilder {
    // The workspace file is relative to `root`
    root: Option<PathBuf>,
    workspace_file_name: Option<PathBuf>,
    rule_suffix: Option<String>,
    rule: Option<Box<dyn ReleaseRule>>,
    traversal_limit: Option<usize>,
}

impl GavReleaseBuilder {
    /// Workspace root directory.
    ///
    /// Defaults to the current directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Name of the toml file listing the workspace projects.
    ///
    /// Defaults to `gavrelease.toml`.
    pub fn workspace_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace_file_name = Some(path.into());
        self
    }

    /// Development qualifier removed by the default rule.
    ///
    /// Defaults to `-SNAPSHOT`.
    pub fn rule_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.rule_suffix = Some(suffix.into());
        self
    }

    /// Replaces the default snapshot rule. Takes precedence over `rule_suffix`.
    pub fn rule(mut self, rule: impl ReleaseRule + 'static) -> Self {
        self.rule = Some(Box::new(rule));
        self
    }

    /// Maximum number of projects entered while walking the graph.
    pub fn traversal_limit(mut self, limit: Option<usize>) -> Self {
        self.traversal_limit = limit;
        self
    }

    pub fn try_build(self) -> Result<GavRelease, ReleaseError> {
        let Self {
            root,
            workspace_file_name,
            rule_suffix,
            rule,
            traversal_limit,
        } = self;
        let root = match root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        let workspace_file_name =
            workspace_file_name.unwrap_or_else(|| PathBuf::from("gavrelease.toml"));
        let workspace_path = root.join(workspace_file_name);

        let workspace = WorkspaceFile::from_file(&workspace_path).map_err(|source| {
            ReleaseError::Workspace {
                path: workspace_path.clone(),
                source,
            }
        })?;

        let rule: Box<dyn ReleaseRule> = match (rule, rule_suffix) {
            (Some(rule), _) => rule,
            (None, Some(suffix)) => Box::new(SnapshotRule::new(suffix)),
            (None, None) => Box::new(SnapshotRule::default()),
        };

        Ok(GavRelease {
            graph: WorkspaceGraph::from_workspace(workspace),
            rule,
            limits: TraversalLimits {
                max_projects: traversal_limit,
            },
        })
    }
}
