//! Checks of invariants which should hold at all times.
//! They return `bool` so they can be wrapped in `debug_assert!`.

use itertools::Itertools;

use crate::entities::{Garage, ParkingLevel, Vehicle};

/// No vehicle is parked in more than one space
pub fn occupants_unique(levels: &[ParkingLevel]) -> bool {
    levels
        .iter()
        .flat_map(|l| l.vehicles())
        .flatten()
        .map(|v| &v.id)
        .all_unique()
}

/// Every vehicle handed to the allocator ended up either in a space or in the rejection list
pub fn vehicles_conserved(
    occupancy_before: usize,
    occupancy_after: usize,
    n_vehicles: usize,
    n_rejected: usize,
) -> bool {
    occupancy_after >= occupancy_before
        && occupancy_after - occupancy_before + n_rejected == n_vehicles
}

/// Every occupant fits the space it is parked in, ignoring the fact that the space is now taken
pub fn occupants_fit(garage: &Garage) -> bool {
    garage.spaces().all(|(_, space)| match space.occupant() {
        None => true,
        Some(v) => {
            (!space.compact || v.vehicle_type.fits_compact())
                && v.permits.satisfies(space.required_permits)
        }
    })
}

/// `subsequence` appears in `sequence` in the same relative order
pub fn order_preserved(sequence: &[Vehicle], subsequence: &[Vehicle]) -> bool {
    let mut remaining = sequence.iter();
    subsequence
        .iter()
        .all(|v| remaining.any(|candidate| candidate.id == v.id))
}
