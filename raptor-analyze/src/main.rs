use anyhow::{Context, Result};
use clap::Parser;
use raptor_analyze::{analyze, Cli, Config, EXIT_INVALID_INPUT};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, Level};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .without_time()
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    // Load config and apply CLI overrides
    let mut config = Config::load_or_default(&cli.config)?;
    cli.apply_to_config(&mut config);
    debug!(?config, "configuration");

    // Relative roots are resolved next to the executable
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let root = cli.root_directory(exe.parent().unwrap_or(Path::new(".")));
    debug!(root = %root.display(), "analyzing");

    Ok(analyze(&config, &root, &mut std::io::stdout()))
}
