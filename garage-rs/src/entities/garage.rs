use std::fmt::{Display, Formatter};

use crate::alloc::{AllocConfig, Allocator};
use crate::entities::{ParkingLevel, ParkingSpace, Vehicle, VehicleId};

/// Position of a [`ParkingSpace`] within a [`Garage`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpaceKey {
    /// Index of the level in the garage
    pub level: usize,
    /// Index of the space in its level
    pub space: usize,
}

impl Display for SpaceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}S{}", self.level, self.space)
    }
}

/// An ordered sequence of [`ParkingLevel`]s together with the [`Allocator`] that fills them.
/// Levels are scanned in order: a space on level 0 is preferred over an equivalent space on
/// level 1.
#[derive(Clone, Debug, Default)]
pub struct Garage {
    levels: Vec<ParkingLevel>,
    allocator: Allocator,
}

impl Garage {
    pub fn new(levels: Vec<ParkingLevel>) -> Self {
        Self::with_config(levels, AllocConfig::default())
    }

    pub fn with_config(levels: Vec<ParkingLevel>, config: AllocConfig) -> Self {
        Garage {
            levels,
            allocator: Allocator::new(config),
        }
    }

    /// Parks as many of `vehicles` as possible and returns the ones which could not be placed,
    /// in the order they were given.
    /// Placed vehicles are moved into their space; earlier placements are never revisited.
    pub fn assign(&mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> Vec<Vehicle> {
        let vehicles = vehicles.into_iter().collect();
        self.allocator.assign(&mut self.levels, vehicles)
    }

    pub fn levels(&self) -> &[ParkingLevel] {
        &self.levels
    }

    pub fn allocator(&self) -> &Allocator {
        &self.allocator
    }

    pub fn space(&self, key: SpaceKey) -> Option<&ParkingSpace> {
        self.levels.get(key.level)?.spaces().get(key.space)
    }

    /// Iterates over all spaces in scan order
    pub fn spaces(&self) -> impl Iterator<Item = (SpaceKey, &ParkingSpace)> {
        self.levels.iter().enumerate().flat_map(|(l, level)| {
            level
                .spaces()
                .iter()
                .enumerate()
                .map(move |(s, space)| (SpaceKey { level: l, space: s }, space))
        })
    }

    /// All parked vehicles, in scan order
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.spaces().filter_map(|(_, space)| space.occupant())
    }

    /// Finds the space the vehicle with `id` is parked in
    pub fn locate(&self, id: &VehicleId) -> Option<SpaceKey> {
        self.spaces()
            .find(|(_, space)| space.occupant().is_some_and(|v| &v.id == id))
            .map(|(key, _)| key)
    }

    pub fn capacity(&self) -> usize {
        self.levels.iter().map(|l| l.capacity()).sum()
    }

    pub fn occupancy(&self) -> usize {
        self.levels.iter().map(|l| l.occupancy()).sum()
    }

    pub fn is_full(&self) -> bool {
        self.occupancy() == self.capacity()
    }
}
