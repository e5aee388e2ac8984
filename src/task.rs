use std::fmt::Display;

use crate::{change_set::ReleaseAnalysis, model::Coordinate};

/// Runs a command line against whatever tool owns the descriptors on disk.
pub trait CommandExecutor {
    fn execute(&self, command: &str) -> anyhow::Result<String>;
}

impl<F> CommandExecutor for F
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn execute(&self, command: &str) -> anyhow::Result<String> {
        self(command)
    }
}

/// Deferred request to set the version of one project on disk.
///
/// Two tasks are equal when they target the same coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangeVersionTask {
    pub coordinate: Coordinate,
}

impl ChangeVersionTask {
    pub fn new(coordinate: Coordinate) -> Self {
        ChangeVersionTask { coordinate }
    }

    /// One task per project of the analysis needing a new coordinate.
    pub fn for_analysis(analysis: &ReleaseAnalysis) -> Vec<ChangeVersionTask> {
        analysis
            .projects
            .iter()
            .map(|project| ChangeVersionTask::new(project.coordinate.clone()))
            .collect()
    }

    pub fn command(&self) -> String {
        format!("set-version {}", self.coordinate)
    }

    pub fn exec<E>(&self, executor: &E) -> anyhow::Result<String>
    where
        E: CommandExecutor + ?Sized,
    {
        executor.execute(&self.command())
    }
}

impl Display for ChangeVersionTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashSet};

    use super::*;

    use crate::{
        change_set::analyze, graph::test_graph, rule::SnapshotRule, traversal::TraversalLimits,
    };

    use pretty_assertions::assert_eq;

    fn gav(text: &str) -> Coordinate {
        Coordinate::parse(text).unwrap()
    }

    #[test]
    fn command_line() {
        let task = ChangeVersionTask::new(gav("com.acme:core:1.0-SNAPSHOT"));
        assert_eq!(task.command(), "set-version com.acme:core:1.0-SNAPSHOT");
        assert_eq!(task.to_string(), task.command());
    }

    #[test]
    fn equal_by_coordinate() {
        let tasks: HashSet<_> = [
            ChangeVersionTask::new(gav("g:a:1")),
            ChangeVersionTask::new(gav("g:a:1")),
            ChangeVersionTask::new(gav("g:b:1")),
        ]
        .into_iter()
        .collect();
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn exec_hands_the_command_to_the_executor() {
        let received = RefCell::new(Vec::new());
        let executor = |command: &str| -> anyhow::Result<String> {
            received.borrow_mut().push(command.to_string());
            Ok("done".to_string())
        };
        let task = ChangeVersionTask::new(gav("g:a:1-SNAPSHOT"));
        assert_eq!(task.exec(&executor).unwrap(), "done");
        assert_eq!(*received.borrow(), vec!["set-version g:a:1-SNAPSHOT"]);
    }

    #[test]
    fn exec_propagates_failures() {
        let executor = |_: &str| -> anyhow::Result<String> { anyhow::bail!("no such project") };
        let task = ChangeVersionTask::new(gav("g:a:1-SNAPSHOT"));
        assert!(task.exec(&executor).is_err());
    }

    #[test]
    fn tasks_follow_the_analysis() {
        let graph = test_graph(&[
            ("g:a:1-SNAPSHOT", None, &["g:b:1", "g:c:1-SNAPSHOT"]),
            ("g:b:1", None, &[]),
            ("g:c:1-SNAPSHOT", None, &[]),
        ]);
        let analysis = analyze(
            &graph,
            &gav("g:a:1-SNAPSHOT"),
            &SnapshotRule::default(),
            TraversalLimits::default(),
        );
        assert_eq!(
            ChangeVersionTask::for_analysis(&analysis),
            vec![
                ChangeVersionTask::new(gav("g:a:1-SNAPSHOT")),
                ChangeVersionTask::new(gav("g:c:1-SNAPSHOT")),
            ]
        );
    }
}
