use serde::{Deserialize, Serialize};

use crate::entities::{PermitSet, VehicleType};

/// A garage together with a batch of vehicles to park in it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub garage: ExtGarage,
    /// Vehicles to be parked, in order of arrival
    #[serde(default)]
    pub vehicles: Vec<ExtVehicle>,
}

/// External representation of a [`Garage`](crate::entities::Garage).
/// A missing or `null` list of levels is a garage without capacity.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtGarage {
    #[serde(default)]
    pub levels: Option<Vec<ExtLevel>>,
}

/// External representation of a [`ParkingLevel`](crate::entities::ParkingLevel)
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtLevel {
    #[serde(default)]
    pub spaces: Option<Vec<ExtSpace>>,
}

/// External representation of a [`ParkingSpace`](crate::entities::ParkingSpace)
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtSpace {
    #[serde(default)]
    pub compact: bool,
    /// Permits required to park in the space, none if not specified
    #[serde(default, skip_serializing_if = "PermitSet::is_empty")]
    pub required_permits: PermitSet,
    /// Vehicle already parked in the space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant: Option<ExtVehicle>,
}

/// External representation of a [`Vehicle`](crate::entities::Vehicle)
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ExtVehicle {
    /// Unique identifier of the vehicle, generated on import if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// [`VehicleType::Car`] if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permits: Option<PermitSet>,
}

/// Outcome of parking a batch of vehicles
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Id of the occupant of every space, level by level. `null` for empty spaces.
    pub levels: Vec<Vec<Option<String>>>,
    /// Ids of the vehicles that could not be parked, in order of arrival
    pub rejected: Vec<String>,
    /// Total number of spaces
    pub capacity: usize,
    /// Number of occupied spaces
    pub occupancy: usize,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: f64,
}
