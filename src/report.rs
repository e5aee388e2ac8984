use std::fmt::Display;

use serde::Serialize;

use crate::{
    change_set::{Change, ReleaseAnalysis, UnlocatedProject},
    model::Coordinate,
    rule::ReleaseRule,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinateChange {
    pub from: Coordinate,
    pub to: Coordinate,
}

/// Everything a release of `root` implies, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub root: Coordinate,
    /// The walk hit its project limit, the report may be incomplete.
    pub truncated: bool,
    pub releases: Vec<CoordinateChange>,
    pub unlocated: Vec<UnlocatedProject>,
    pub changes: Vec<Change>,
}

impl Report {
    pub fn new<R>(analysis: &ReleaseAnalysis, changes: Vec<Change>, rule: &R) -> Report
    where
        R: ReleaseRule + ?Sized,
    {
        let releases = analysis
            .projects
            .iter()
            .map(|project| CoordinateChange {
                from: project.coordinate.clone(),
                to: rule.release(&project.coordinate),
            })
            .collect();

        Report {
            root: analysis.root.clone(),
            truncated: analysis.summary.truncated,
            releases,
            unlocated: analysis.unlocated.clone(),
            changes,
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        !self.truncated && self.releases.is_empty() && self.unlocated.is_empty()
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Releasing project {}", self.root)?;

        for unlocated in &self.unlocated {
            writeln!(
                f,
                "project should be changed and source files can't be found ! GAV : {} ({})",
                unlocated.coordinate, unlocated.reason
            )?;
        }
        if self.truncated {
            writeln!(f, "project limit reached, some dependents were not analysed")?;
        }

        writeln!(f)?;
        writeln!(f, "Summary")?;
        if self.is_up_to_date() {
            writeln!(f, "project up to date")?;
        }
        for release in &self.releases {
            writeln!(f, "{} should be changed to {}", release.from, release.to)?;
        }

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details")?;
        }
        for change in &self.changes {
            writeln!(f, "file: {}", change.location.project.descriptor.display())?;
            writeln!(f, "location: {}", change.location)?;
            writeln!(f, "change to: {}", change.new_value)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
