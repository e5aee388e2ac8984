use clap::Parser;

use gavrelease::{
    cli::{
        args::{CliArgs, Command},
        command_handlers::{do_release, do_tasks},
    },
    config::GavReleaseConfig,
    GavRelease,
};

fn run() -> anyhow::Result<()> {
    let cli_args: CliArgs = CliArgs::parse();
    let config = GavReleaseConfig::load()?;

    let mut builder = GavRelease::builder()
        .root(&cli_args.root)
        .workspace_file_name(&cli_args.graph_file)
        .traversal_limit(config.traversal_limit);
    if let Some(suffix) = config.rule_suffix {
        builder = builder.rule_suffix(suffix);
    }
    let release = builder.try_build()?;

    let output = match cli_args.cmd {
        Command::Release { gav, format } => do_release(&release, &gav, format)?,
        Command::Tasks { gav } => do_tasks(&release, &gav)?,
    };
    print!("{output}");

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
