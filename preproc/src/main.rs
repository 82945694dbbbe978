use anyhow::{Context, Result};
use log::{info, LevelFilter};
use preproc::config::Config;
use std::{env, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Reorganize the SYSU-MM01 dataset into flat train/gallery/query directories
struct Args {
    #[structopt(long)]
    /// configuration file
    pub config_file: Option<PathBuf>,
    #[structopt(long)]
    /// dataset root directory, overrides the configuration file
    pub dataset_dir: Option<PathBuf>,
    #[structopt(long)]
    /// output root directory, overrides the configuration file
    pub output_dir: Option<PathBuf>,
    #[structopt(long)]
    /// process even if the output directories already exist
    pub force: bool,
}

fn main() -> Result<()> {
    // setup logging
    if env::var("RUST_LOG").is_err() {
        pretty_env_logger::formatted_builder()
            .filter_level(LevelFilter::Info)
            .init();
    } else {
        pretty_env_logger::init();
    }

    // parse arguments
    let Args {
        config_file,
        dataset_dir,
        output_dir,
        force,
    } = Args::from_args();

    let config = {
        let config = match &config_file {
            Some(config_file) => Config::open(config_file).with_context(|| {
                format!("failed to load config file '{}'", config_file.display())
            })?,
            None => Config::default(),
        };
        Config {
            dataset_dir: dataset_dir.unwrap_or(config.dataset_dir),
            output_dir: output_dir.unwrap_or(config.output_dir),
        }
    };

    if let Some(summary) = preproc::start(&config, force)? {
        summary.print_table();
        info!(
            "copied {} files into '{}'",
            summary.total_copied(),
            summary.output_dir.display()
        );
    }

    Ok(())
}
