use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gff::config::GFFConfig;
use gff::io;
use gff::io::cli::Cli;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GFFConfig::default()
        }
        Some(config_file) => {
            io::read_json::<GFFConfig>(&config_file).context("incorrect config file format")?
        }
    };

    if let Some(order) = args.vehicle_order {
        config.alloc_config.vehicle_order = order.into();
    }

    info!("Successfully parsed GFFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let output = gff::gff_solver::solve(ext_instance, config)?;

    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
