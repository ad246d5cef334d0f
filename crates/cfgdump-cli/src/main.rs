//! Config Dump - CLI
//!
//! Loads a JSON document as a value graph and dumps its simplified form.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cfgdump_core::{DumpOptions, Value};
use cfgdump_host::{ConfigDumper, DumpOutcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cfgdump", version, about = "Dump a simplified snapshot of a config value graph")]
struct Cli {
    /// JSON document to dump, or `-` for stdin
    input: PathBuf,

    /// Options file (.toml or .json) using camelCase option names
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the dump is written to
    #[arg(short, long)]
    output_path: Option<String>,

    /// File name of the dump
    #[arg(short, long)]
    name: Option<String>,

    /// Levels kept below the root
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Drop the depth bound and label circular references instead
    #[arg(long)]
    keep_circular_references: bool,

    /// Replace functions with labels carrying their names
    #[arg(long)]
    show_function_names: bool,

    /// Keep empty, zero and false values
    #[arg(long)]
    include_false_values: bool,

    /// Print the dump text instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn flag_options(&self) -> DumpOptions {
        DumpOptions {
            output_path: self.output_path.clone(),
            name: self.name.clone(),
            depth: self.depth,
            keep_circular_references: self.keep_circular_references.then_some(true),
            show_function_names: self.show_function_names.then_some(true),
            include_false_values: self.include_false_values.then_some(true),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // -v wins over RUST_LOG; without either only warnings show
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let file_options = match &cli.config {
        Some(path) => load_options(path)?,
        None => DumpOptions::default(),
    };
    let options = file_options.merge(cli.flag_options());
    let dumper = ConfigDumper::new(options).context("invalid dump options")?;

    let graph = load_graph(&cli.input)?;

    if cli.stdout {
        println!("{}", dumper.dump_text(&graph));
        return Ok(());
    }

    match dumper.dump_config(&graph) {
        DumpOutcome::Written(path) => {
            tracing::info!(path = %path.display(), "dump written");
        }
        // already reported through the warning sink
        DumpOutcome::DirectoryUnavailable | DumpOutcome::WriteFailed => {}
    }
    Ok(())
}

fn load_options(path: &Path) -> Result<DumpOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    let options = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&text)
            .with_context(|| format!("invalid TOML options in {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON options in {}", path.display()))?,
        _ => bail!("options file {} must end in .toml or .json", path.display()),
    };
    Ok(options)
}

fn load_graph(input: &Path) -> Result<Value> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;
    Ok(Value::from(json))
}
