use log::{debug, info};

use crate::{cli::args::OutputFormat, GavRelease};

/// Handler to release command
/// Renders the report of everything a release of `gav` implies
pub fn do_release(release: &GavRelease, gav: &str, format: OutputFormat) -> anyhow::Result<String> {
    let report = release.analyze(gav)?;

    if report.is_up_to_date() {
        info!("{gav} is up to date");
    } else {
        info!(
            "Releasing {gav} changes {} projects at {} locations",
            report.releases.len(),
            report.changes.len()
        );
    }

    let rendered = match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Toml => report.to_toml()?,
    };
    Ok(rendered)
}

/// Handler to tasks command
/// One command line per project needing a release, the commands are not run
pub fn do_tasks(release: &GavRelease, gav: &str) -> anyhow::Result<String> {
    let tasks = release.tasks(gav)?;
    debug!("{} version changes to release {gav}", tasks.len());

    let mut rendered = String::new();
    for task in tasks {
        rendered.push_str(&task.command());
        rendered.push('\n');
    }
    Ok(rendered)
}
