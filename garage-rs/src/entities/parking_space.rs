use crate::entities::{PermitSet, Vehicle};

/// A single parking space, which holds at most one [`Vehicle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParkingSpace {
    /// Compact spaces only accept
    /// [`VehicleType::Compact`](crate::entities::VehicleType::Compact) vehicles
    pub compact: bool,
    /// Permits a vehicle must hold to park here. [`PermitSet::NONE`] if unrestricted.
    pub required_permits: PermitSet,
    occupant: Option<Vehicle>,
}

impl ParkingSpace {
    pub fn new(compact: bool, required_permits: impl Into<PermitSet>) -> Self {
        ParkingSpace {
            compact,
            required_permits: required_permits.into(),
            occupant: None,
        }
    }

    /// An unrestricted compact space
    pub fn compact() -> Self {
        Self::new(true, PermitSet::NONE)
    }

    /// A standard space requiring `permits`
    pub fn reserved(permits: impl Into<PermitSet>) -> Self {
        Self::new(false, permits)
    }

    /// Builds the space with a vehicle already parked in it
    pub fn with_occupant(mut self, vehicle: Vehicle) -> Self {
        self.occupant = Some(vehicle);
        self
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// True if `vehicle` may legally be parked here right now
    pub fn accepts(&self, vehicle: &Vehicle) -> bool {
        !self.is_occupied()
            && (!self.compact || vehicle.vehicle_type.fits_compact())
            && vehicle.permits.satisfies(self.required_permits)
    }

    /// Parks `vehicle` in this space.
    /// Only the allocator parks vehicles, after checking [`ParkingSpace::accepts`].
    pub(crate) fn park(&mut self, vehicle: Vehicle) {
        debug_assert!(self.accepts(&vehicle), "space does not accept {}", vehicle.id);
        self.occupant = Some(vehicle);
    }
}
