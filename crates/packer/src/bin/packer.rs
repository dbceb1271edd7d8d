//! Command-line entry point: packs a task file and prints one line per task.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use packer::{logging, Packer, PackerConfig, PackerError};

#[derive(Parser, Debug)]
#[command(name = "packer")]
#[command(version, about = "Packs the most valuable items under each task's weight limit")]
struct Cli {
    /// Task file, one task per line
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Configuration file (TOML, or YAML with a .yaml/.yml extension)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of workers solving tasks in parallel
    #[arg(short, long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, PackerError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PackerConfig::default(),
    };
    if let Some(threads) = cli.threads {
        config = config.with_thread_count(threads);
    }
    config
        .validate()
        .map_err(|e| PackerError::Config(e.to_string()))?;

    Packer::from_config(&config).pack_path(&cli.input)
}

fn load_config(path: &Path) -> Result<PackerConfig, PackerError> {
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let loaded = if is_yaml {
        PackerConfig::from_yaml_file(path)
    } else {
        PackerConfig::from_toml_file(path)
    };
    loaded.map_err(|e| PackerError::Config(format!("{}: {}", path.display(), e)))
}
