use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use up_version::{
    arguments::Arguments,
    error::{USAGE_EXIT_CODE, UpdateError},
    targets::default_targets,
    updater::VersionUpdater,
};

fn main() -> Result<()> {
    let program = std::env::args().next().unwrap_or_else(|| "up-version".to_string());

    let args = match Arguments::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        // e.g. an argument that is not valid UTF-8
        Err(e) => {
            eprint!("{e}");
            usage_exit(UpdateError::UsageError { program })
        }
    };

    pretty_env_logger::env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let version = match args.version(&program) {
        Ok(version) => version,
        Err(e) => usage_exit(e),
    };

    let updater = VersionUpdater::new(default_targets()?);
    updater
        .update_all(version)
        .with_context(|| format!("Failed to update version to {version}"))?;

    Ok(())
}

fn usage_exit(err: UpdateError) -> ! {
    println!("{err}");
    std::process::exit(USAGE_EXIT_CODE)
}
