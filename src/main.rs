//! qrbadge CLI entrypoint

use clap::Parser;
use qrbadge::{BadgeConfig, Error, GeneratedArtifact, Pipeline, QrEncoder, Result, logging};
use serde_json::json;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "qrbadge", version, about = "Employee badge QR generator")]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to qrbadge.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the artifact output directory (takes precedence over config file)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Employee name for one-shot generation
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Employee ID for one-shot generation
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Prompt for name/ID pairs on stdin in a loop
    #[arg(long)]
    interactive: bool,

    /// Output results as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Skip the terminal QR preview
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BadgeConfig::load(cli.config.as_deref())?;

    if let Some(ref dir) = cli.output_dir {
        config.output.dir = dir.clone();
    }

    logging::init(&config.logging)?;

    // Bootstrap the output directory once at startup; the pipeline itself
    // never creates directories.
    fs::create_dir_all(&config.output.dir)?;
    info!(dir = %config.output.dir.display(), "Badge output directory ready");

    let pipeline = Pipeline::new(config.output.dir.clone());

    if cli.interactive {
        return run_interactive(&pipeline, &cli);
    }

    match (cli.name.as_deref(), cli.id.as_deref()) {
        (Some(name), Some(id)) => {
            let artifact = pipeline.generate(name, id)?;
            emit_artifact(&artifact, &cli)?;
            Ok(())
        }
        _ => Err(Error::Config(
            "Provide --name and --id, or use --interactive".to_string(),
        )),
    }
}

/// Collect name/ID pairs from stdin until EOF. Failures are printed to
/// stderr and the loop continues with a fresh prompt.
fn run_interactive(pipeline: &Pipeline, cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let name = match prompt(&mut lines, "Employee name: ")? {
            Some(line) => line,
            None => break,
        };
        let id = match prompt(&mut lines, "Employee ID: ")? {
            Some(line) => line,
            None => break,
        };

        match pipeline.generate(&name, &id) {
            Ok(artifact) => emit_artifact(&artifact, cli)?,
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn emit_artifact(artifact: &GeneratedArtifact, cli: &Cli) -> Result<()> {
    if cli.json {
        let value = json!({
            "payload": artifact.payload,
            "filename": artifact.filename,
            "path": artifact.path,
            "bytes": artifact.png.len(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&value)
                .map_err(|e| Error::Config(format!("Failed to serialize result: {e}")))?
        );
    } else {
        println!("QR code saved at {}", artifact.path.display());
    }

    if !cli.no_preview && !cli.json {
        let preview = QrEncoder::new().render_terminal(&artifact.payload)?;
        println!("{preview}");
    }

    Ok(())
}
