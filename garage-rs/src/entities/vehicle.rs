use std::fmt::{Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::entities::PermitSet;

/// Kind of vehicle, determines which [`ParkingSpace`](crate::entities::ParkingSpace)s it fits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Fits in both compact and standard spaces
    Compact,
    #[default]
    Car,
    Truck,
}

impl VehicleType {
    /// True if vehicles of this type may occupy a compact space
    pub fn fits_compact(self) -> bool {
        matches!(self, VehicleType::Compact)
    }
}

/// Opaque identifier of a [`Vehicle`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        VehicleId(id.into())
    }

    /// Generates a fresh 128-bit identifier drawn from the thread-local RNG
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Generates a fresh 128-bit identifier drawn from `rng`.
    /// Use a seeded RNG to get reproducible identifiers.
    pub fn generate(rng: &mut impl Rng) -> Self {
        VehicleId(format!("{:032x}", rng.random::<u128>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VehicleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle looking for a parking space.
/// Once created, a vehicle does not change; it is moved into the space it is assigned to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub vehicle_type: VehicleType,
    /// Permits held by the vehicle
    pub permits: PermitSet,
}

impl Vehicle {
    /// Creates a vehicle with a freshly generated id
    pub fn new(vehicle_type: VehicleType, permits: impl Into<PermitSet>) -> Self {
        Self::with_id(VehicleId::random(), vehicle_type, permits)
    }

    pub fn with_id(
        id: VehicleId,
        vehicle_type: VehicleType,
        permits: impl Into<PermitSet>,
    ) -> Self {
        Vehicle {
            id,
            vehicle_type,
            permits: permits.into(),
        }
    }

    pub fn of_type(vehicle_type: VehicleType) -> Self {
        Self::new(vehicle_type, PermitSet::NONE)
    }

    pub fn with_permits(permits: impl Into<PermitSet>) -> Self {
        Self::new(VehicleType::default(), permits)
    }
}

impl Default for Vehicle {
    /// A [`VehicleType::Car`] without permits and with a freshly generated id
    fn default() -> Self {
        Self::new(VehicleType::default(), PermitSet::NONE)
    }
}
