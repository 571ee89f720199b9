use std::time::Instant;

use anyhow::Result;
use garage_rs::io::export::export;
use garage_rs::io::ext_repr::ExtInstance;
use garage_rs::io::import::{GarageInstance, Importer};
use log::{info, warn};
use thousands::Separable;

use crate::config::GFFConfig;
use crate::io::output::GFFOutput;

/// Greedy First-Fit driver: imports an instance, parks its vehicles and exports the outcome.
pub fn solve(ext_instance: ExtInstance, config: GFFConfig) -> Result<GFFOutput> {
    let start = Instant::now();
    let importer = Importer::new(config.alloc_config, config.prng_seed);
    let GarageInstance {
        name,
        mut garage,
        vehicles,
    } = importer.import(&ext_instance)?;

    let n_vehicles = vehicles.len();
    let rejected = garage.assign(vehicles);
    let solution = export(&garage, &rejected, start.elapsed());

    info!(
        "[GFF] {name}: parked {}/{} vehicles, {} rejected, {}/{} spaces occupied ({:.3}ms)",
        (n_vehicles - rejected.len()).separate_with_commas(),
        n_vehicles.separate_with_commas(),
        rejected.len().separate_with_commas(),
        solution.occupancy.separate_with_commas(),
        solution.capacity.separate_with_commas(),
        solution.run_time_sec * 1000.0
    );

    if let Some(threshold) = config.rejected_warn_threshold {
        let rejected_frac = match n_vehicles {
            0 => 0.0,
            n => rejected.len() as f32 / n as f32,
        };
        if rejected_frac > threshold {
            warn!(
                "[GFF] {name}: {:.1}% of the vehicles were rejected",
                rejected_frac * 100.0
            );
        }
    }

    Ok(GFFOutput {
        instance: ext_instance,
        solution,
        config,
    })
}
