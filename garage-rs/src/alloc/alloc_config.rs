use serde::{Deserialize, Serialize};

use crate::entities::{Permit, Vehicle};

/// Configuration of the [`Allocator`](crate::alloc::Allocator)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocConfig {
    /// Order in which the vehicles of a single batch are processed
    pub vehicle_order: VehicleOrder,
}

/// Order in which the vehicles of one [`Garage::assign`](crate::entities::Garage::assign) call
/// are processed. Whatever the order, rejected vehicles are always reported in the order they
/// were handed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleOrder {
    /// Vehicles are processed in the order they arrive
    #[default]
    Arrival,
    /// Vehicles holding a premium permit go first: those also holding a disability permit ahead
    /// of the others. Within each group, arrival order is kept.
    PremiumFirst,
}

impl VehicleOrder {
    /// Rank of `vehicle` in this order, lower ranks are processed first
    pub fn rank(self, vehicle: &Vehicle) -> usize {
        match self {
            VehicleOrder::Arrival => 0,
            VehicleOrder::PremiumFirst => {
                let premium = vehicle.permits.contains(Permit::Premium);
                let disability = vehicle.permits.contains(Permit::Disability);
                match (premium, disability) {
                    (true, true) => 0,
                    (true, false) => 1,
                    (false, _) => 2,
                }
            }
        }
    }
}
