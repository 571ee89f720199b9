use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

use crate::alloc::AllocConfig;
use crate::entities::{Garage, ParkingLevel, ParkingSpace, PermitSet, Vehicle, VehicleId};
use crate::io::ext_repr::{ExtInstance, ExtLevel, ExtSpace, ExtVehicle};
use crate::util::assertions;

/// A garage and the batch of vehicles waiting to be parked in it
#[derive(Clone, Debug)]
pub struct GarageInstance {
    pub name: String,
    pub garage: Garage,
    /// Vehicles in order of arrival
    pub vehicles: Vec<Vehicle>,
}

/// Converts external representations into internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    /// Configuration of the allocator of every imported garage
    pub alloc_config: AllocConfig,
    /// Seed for the identifiers generated for vehicles without one.
    /// If undefined, identifiers are drawn from entropy.
    pub prng_seed: Option<u64>,
}

impl Importer {
    pub fn new(alloc_config: AllocConfig, prng_seed: Option<u64>) -> Importer {
        Importer {
            alloc_config,
            prng_seed,
        }
    }

    pub fn import(&self, ext_instance: &ExtInstance) -> Result<GarageInstance> {
        let mut rng = match self.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let ext_levels: &[ExtLevel] = ext_instance.garage.levels.as_deref().unwrap_or_default();

        //identifiers are resolved sequentially so that generated ones only depend on the seed
        let occupant_ids = ext_levels
            .iter()
            .map(|l| {
                ext_spaces(l)
                    .iter()
                    .map(|s| s.occupant.as_ref().map(|v| resolve_id(v, &mut rng)).transpose())
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let vehicle_ids = ext_instance
            .vehicles
            .iter()
            .map(|v| resolve_id(v, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        {
            let all_ids = occupant_ids
                .iter()
                .flatten()
                .flatten()
                .chain(vehicle_ids.iter())
                .collect_vec();
            ensure!(
                all_ids.iter().all_unique(),
                "All vehicles should have unique IDs. Duplicates: {:?}",
                all_ids.iter().duplicates().collect_vec()
            );
        }

        let levels = ext_levels
            .par_iter()
            .zip(occupant_ids.into_par_iter())
            .map(|(ext_level, ids)| import_level(ext_level, ids))
            .collect::<Vec<ParkingLevel>>();

        let vehicles = ext_instance
            .vehicles
            .iter()
            .zip(vehicle_ids)
            .map(|(ext_vehicle, id)| import_vehicle(ext_vehicle, id))
            .collect_vec();

        let garage = Garage::with_config(levels, self.alloc_config);

        if !assertions::occupants_fit(&garage) {
            warn!("[IMPORT] garage contains vehicles parked in spaces they do not fit");
        }
        info!(
            "[IMPORT] imported instance {:?}: {} levels, {} spaces ({} occupied), {} arriving vehicles",
            ext_instance.name,
            garage.levels().len(),
            garage.capacity(),
            garage.occupancy(),
            vehicles.len()
        );

        Ok(GarageInstance {
            name: ext_instance.name.clone(),
            garage,
            vehicles,
        })
    }
}

pub fn import_level(ext_level: &ExtLevel, occupant_ids: Vec<Option<VehicleId>>) -> ParkingLevel {
    let spaces = ext_spaces(ext_level)
        .iter()
        .zip(occupant_ids)
        .map(|(ext_space, id)| import_space(ext_space, id))
        .collect_vec();
    ParkingLevel::new(spaces)
}

pub fn import_space(ext_space: &ExtSpace, occupant_id: Option<VehicleId>) -> ParkingSpace {
    let space = ParkingSpace::new(ext_space.compact, ext_space.required_permits);
    match (&ext_space.occupant, occupant_id) {
        (Some(ext_vehicle), Some(id)) => space.with_occupant(import_vehicle(ext_vehicle, id)),
        _ => space,
    }
}

pub fn import_vehicle(ext_vehicle: &ExtVehicle, id: VehicleId) -> Vehicle {
    Vehicle::with_id(
        id,
        ext_vehicle.vehicle_type.unwrap_or_default(),
        ext_vehicle.permits.unwrap_or(PermitSet::NONE),
    )
}

fn ext_spaces(ext_level: &ExtLevel) -> &[ExtSpace] {
    ext_level.spaces.as_deref().unwrap_or_default()
}

fn resolve_id(ext_vehicle: &ExtVehicle, rng: &mut SmallRng) -> Result<VehicleId> {
    match &ext_vehicle.id {
        Some(id) => {
            ensure!(!id.trim().is_empty(), "vehicle IDs should not be blank");
            Ok(VehicleId::new(id.as_str()))
        }
        None => Ok(VehicleId::generate(rng)),
    }
}
