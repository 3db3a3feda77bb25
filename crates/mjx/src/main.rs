//! mjx
//!
//! Command-line converter from JSON model descriptions to MJCF XML.
//! Reads a model, validates it, and writes XML that a MuJoCo-compatible
//! compiler loads directly.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use mjcf::Mujoco;
use tracing::info;

/// Convert a JSON model description to MJCF XML.
#[derive(Parser, Debug)]
#[command(name = "mjx", version, about)]
struct Cli {
    /// Input model JSON file; standard input when omitted.
    input: Option<PathBuf>,

    /// Output XML file; standard output when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact XML instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Only validate the model; produce no output.
    #[arg(long)]
    check: bool,

    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long, env = "MJX_LOG", default_value = "warn")]
    log_level: String,
}

fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            info!(file = %path.display(), "Reading model");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            info!("Reading model from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let json = read_input(cli.input.as_ref())?;
    let model: Mujoco = mjcf_serde::from_json_str(&json)?;
    info!(model = %model.model, "Model validated");

    if cli.check {
        return Ok(());
    }

    let xml = if cli.compact {
        mjcf_serde::to_xml_string(&model)?
    } else {
        mjcf_serde::to_xml_string_pretty(&model)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, xml)?;
            info!(file = %path.display(), "Wrote MJCF XML");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
