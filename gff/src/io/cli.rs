use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use garage_rs::alloc::VehicleOrder;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to solve: a garage and the vehicles arriving at it
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the vehicle order of the config
    #[arg(short, long, value_enum)]
    pub vehicle_order: Option<VehicleOrderArg>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleOrderArg {
    Arrival,
    PremiumFirst,
}

impl From<VehicleOrderArg> for VehicleOrder {
    fn from(arg: VehicleOrderArg) -> Self {
        match arg {
            VehicleOrderArg::Arrival => VehicleOrder::Arrival,
            VehicleOrderArg::PremiumFirst => VehicleOrder::PremiumFirst,
        }
    }
}
