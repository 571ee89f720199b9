use std::collections::HashSet;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::alloc::AllocConfig;
use crate::entities::{N_PERMITS, ParkingLevel, ParkingSpace, SpaceKey, Vehicle, VehicleId};
use crate::util::assertions;

/// Greedy first-fit allocator.
///
/// Vehicles are processed one at a time. Each one is parked in the eligible space with the best
/// [`SpacePriority`], ties broken by scan order (level by level, space by space).
/// Placements are final: a later vehicle never displaces an earlier one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Allocator {
    pub config: AllocConfig,
}

impl Allocator {
    pub fn new(config: AllocConfig) -> Self {
        Allocator { config }
    }

    /// Parks `vehicles` in `levels` and returns the rejected ones in their original order.
    /// A vehicle whose id is already parked, or was already handed in earlier in the same batch,
    /// is rejected.
    pub fn assign(&self, levels: &mut [ParkingLevel], vehicles: Vec<Vehicle>) -> Vec<Vehicle> {
        let start = Instant::now();
        let n_vehicles = vehicles.len();
        let occupancy_before = occupancy(levels);
        let unique_before = cfg!(debug_assertions) && assertions::occupants_unique(levels);

        let mut seen_ids: HashSet<VehicleId> = levels
            .iter()
            .flat_map(|l| l.vehicles().flatten())
            .map(|v| v.id.clone())
            .collect();

        //stable sort, vehicles with equal rank keep their arrival order
        let queue = vehicles
            .into_iter()
            .enumerate()
            .sorted_by_key(|(_, v)| self.config.vehicle_order.rank(v))
            .collect_vec();

        let mut rejected = vec![];
        for (arrival, vehicle) in queue {
            if !seen_ids.insert(vehicle.id.clone()) {
                warn!("[ALLOC] duplicate vehicle id {}, rejecting it", vehicle.id);
                rejected.push((arrival, vehicle));
                continue;
            }
            match search(levels, &vehicle) {
                Some(key) => {
                    debug!(
                        "[ALLOC] parking vehicle {} ({:?}, permits: {}) at {key}",
                        vehicle.id, vehicle.vehicle_type, vehicle.permits
                    );
                    levels[key.level].spaces_mut()[key.space].park(vehicle);
                }
                None => {
                    debug!(
                        "[ALLOC] no space for vehicle {} ({:?}, permits: {})",
                        vehicle.id, vehicle.vehicle_type, vehicle.permits
                    );
                    rejected.push((arrival, vehicle));
                }
            }
        }

        //report rejections in arrival order
        rejected.sort_by_key(|(arrival, _)| *arrival);
        let rejected = rejected.into_iter().map(|(_, v)| v).collect_vec();

        //no duplicate occupants are introduced by the pass
        debug_assert!(!unique_before || assertions::occupants_unique(levels));
        debug_assert!(assertions::vehicles_conserved(
            occupancy_before,
            occupancy(levels),
            n_vehicles,
            rejected.len()
        ));

        info!(
            "[ALLOC] parked {}/{} vehicles in {:.3}ms, {} rejected ({}/{} spaces occupied)",
            n_vehicles - rejected.len(),
            n_vehicles,
            start.elapsed().as_secs_f64() * 1000.0,
            rejected.len(),
            occupancy(levels),
            levels.iter().map(|l| l.capacity()).sum::<usize>()
        );

        rejected
    }
}

/// Preference of a vehicle for an eligible space, lower is better.
/// Fields are compared in declaration order: the permit tier dominates the compact tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpacePriority {
    /// Precedence of the first permit the space requires, [`N_PERMITS`] for unrestricted spaces
    pub permit_tier: usize,
    /// 0 for compact spaces, 1 for standard ones
    pub compact_tier: usize,
}

impl SpacePriority {
    pub fn of(space: &ParkingSpace) -> Self {
        SpacePriority {
            permit_tier: space
                .required_permits
                .first()
                .map_or(N_PERMITS, |p| p.index()),
            compact_tier: match space.compact {
                true => 0,
                false => 1,
            },
        }
    }
}

/// Finds the best open space for `vehicle`, if any
fn search(levels: &[ParkingLevel], vehicle: &Vehicle) -> Option<SpaceKey> {
    levels
        .iter()
        .enumerate()
        .flat_map(|(l, level)| {
            level
                .spaces()
                .iter()
                .enumerate()
                .map(move |(s, space)| (SpaceKey { level: l, space: s }, space))
        })
        .filter(|(_, space)| space.accepts(vehicle))
        //min_by_key keeps the first of equal elements, i.e. the first in scan order
        .min_by_key(|(_, space)| SpacePriority::of(space))
        .map(|(key, _)| key)
}

fn occupancy(levels: &[ParkingLevel]) -> usize {
    levels.iter().map(|l| l.occupancy()).sum()
}
