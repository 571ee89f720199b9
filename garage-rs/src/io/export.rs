use std::time::Duration;

use itertools::Itertools;

use crate::entities::{Garage, ParkingLevel, Vehicle};
use crate::io::ext_repr::{ExtGarage, ExtLevel, ExtSolution, ExtSpace, ExtVehicle};

/// Exports the state of a garage after an assignment pass
pub fn export(garage: &Garage, rejected: &[Vehicle], run_time: Duration) -> ExtSolution {
    ExtSolution {
        levels: garage.levels().iter().map(export_level_occupants).collect(),
        rejected: rejected.iter().map(|v| v.id.to_string()).collect(),
        capacity: garage.capacity(),
        occupancy: garage.occupancy(),
        run_time_sec: run_time.as_secs_f64(),
    }
}

/// Exports the full garage, including its occupants, so it can be imported again
pub fn export_garage(garage: &Garage) -> ExtGarage {
    let levels = garage
        .levels()
        .iter()
        .map(|level| ExtLevel {
            spaces: Some(
                level
                    .spaces()
                    .iter()
                    .map(|space| ExtSpace {
                        compact: space.compact,
                        required_permits: space.required_permits,
                        occupant: space.occupant().map(export_vehicle),
                    })
                    .collect(),
            ),
        })
        .collect();
    ExtGarage {
        levels: Some(levels),
    }
}

pub fn export_vehicle(vehicle: &Vehicle) -> ExtVehicle {
    ExtVehicle {
        id: Some(vehicle.id.to_string()),
        vehicle_type: Some(vehicle.vehicle_type),
        permits: Some(vehicle.permits),
    }
}

fn export_level_occupants(level: &ParkingLevel) -> Vec<Option<String>> {
    level
        .vehicles()
        .map(|v| v.map(|v| v.id.to_string()))
        .collect_vec()
}
