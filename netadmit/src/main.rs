//! Local driver for the network admission checks.
//!
//! Reads a workload spec (or a full VMI document) from disk, runs the
//! network checks, and prints the causes. The exit code tells whether any
//! cause was reported.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use netadmit::exit_codes;
use netadmit::io::config::{AdmitterConfig, CONFIG_FILE, OutputFormat, load_config, write_config};
use netadmit::io::spec_file::load_spec;
use netadmit::{ValidationCause, ValidationReport, logging};

#[derive(Parser)]
#[command(
    name = "netadmit",
    version,
    about = "Validate the network configuration of a VM workload spec"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate networks and interfaces of a spec file and print causes.
    Check {
        /// JSON file holding a workload spec or a document with a `spec` member.
        spec: PathBuf,

        /// Dotted field-path prefix for reported causes (overrides config).
        #[arg(long)]
        field: Option<String>,

        /// Config file to read.
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Output format (overrides config).
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,

        #[arg(default_value = CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            spec,
            field,
            config,
            format,
        } => cmd_check(&spec, field, &config, format),
        Command::InitConfig { force, path } => cmd_init_config(&path, force),
    }
}

fn cmd_check(
    spec_path: &Path,
    field: Option<String>,
    config_path: &Path,
    format: Option<OutputFormat>,
) -> Result<i32> {
    let mut cfg = load_config(config_path)?;
    if let Some(field) = field {
        cfg.field_prefix = field;
    }
    if let Some(format) = format {
        cfg.format = format;
    }
    let field = cfg.field_path()?;

    let spec = load_spec(spec_path)?;
    let report = ValidationReport::run(&field, &spec);
    info!(
        spec = %spec_path.display(),
        causes = report.causes.len(),
        "validated spec"
    );

    print!("{}", render_causes(&report.causes, cfg.format)?);
    if report.is_admissible() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::REJECTED)
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &AdmitterConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    Ok(exit_codes::OK)
}

/// Render causes with a trailing newline.
fn render_causes(causes: &[ValidationCause], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(causes).context("serialize causes")?,
        OutputFormat::Text => causes
            .iter()
            .map(|cause| format!("{} {}: {}", cause.kind.as_reason(), cause.field, cause.message))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}
