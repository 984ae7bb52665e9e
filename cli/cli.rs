mod cli_args;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log;
use std::process;

use cli_args::Cli;
use printmd_core::{AppError, Config, Diagnostics, Filter, MarkdownRenderer, Walker};

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.quiet, cli_args.verbose);
    log::debug!("CLI args parsed: {:?}", cli_args);

    let quiet = cli_args.quiet;
    let exit_code = match run_app(cli_args) {
        Ok(diagnostics) => {
            log::info!("Application finished successfully.");
            if !quiet && !diagnostics.is_empty() {
                eprintln!(
                    "{} {} item(s) skipped; see warnings above.",
                    "Warning:".yellow(),
                    diagnostics.len()
                );
            }
            0
        }
        Err(e) => {
            let exit_code = match e.downcast_ref::<AppError>() {
                Some(err) if err.is_config_error() => 1,
                Some(AppError::WalkStart { .. }) => 2,
                Some(AppError::OutputCreate { .. }) => 2,
                Some(AppError::FileWrite { .. }) => 2,
                Some(_) => 1,
                None => 1,
            };
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_from_path(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    if let Some(output) = &cli.output {
        log::debug!("Overriding output_path with {}", output);
        config.output_path = output.clone();
    }
    config.validate().context("Invalid configuration")?;
    log::trace!("Effective config: {:?}", config);
    Ok(config)
}

fn run_app(cli: Cli) -> Result<Diagnostics> {
    let config = load_config(&cli)?;
    let project_root = Config::determine_project_root(cli.project_root.as_ref());
    let output_path = config.output_path();
    let mut diagnostics = Diagnostics::new();

    let filter = Filter::new(
        &config.included_paths,
        &config.excluded_paths,
        &mut diagnostics,
    );
    let files = Walker::new(&project_root, &filter)
        .skip_path(&output_path)
        .walk(&mut diagnostics)
        .with_context(|| format!("Failed to get files under {}", project_root.display()))?;

    MarkdownRenderer::new(config.title(), &project_root)
        .render_to_file(&output_path, &files, &mut diagnostics)
        .context("Failed to print markdown")?;

    if !cli.quiet {
        println!(
            "{} Markdown with {} files saved to: {}",
            "✅".green(),
            files.len(),
            output_path.display().to_string().blue()
        );
    }
    Ok(diagnostics)
}
