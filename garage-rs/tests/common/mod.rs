#![allow(dead_code)]

use garage_rs::alloc::{AllocConfig, VehicleOrder};
use garage_rs::entities::{
    Garage, ParkingLevel, ParkingSpace, PermitSet, Vehicle, VehicleId, VehicleType,
};

/// Shows the allocator's log lines of failing tests, e.g. with `RUST_LOG=debug`
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env().is_test(true).try_init();
}

/// Vehicle with id `v{n}`
pub fn vehicle(n: usize, vehicle_type: VehicleType, permits: impl Into<PermitSet>) -> Vehicle {
    Vehicle::with_id(VehicleId::new(format!("v{n}")), vehicle_type, permits)
}

pub fn car(n: usize) -> Vehicle {
    vehicle(n, VehicleType::Car, PermitSet::NONE)
}

/// `n` plain cars with ids `v1..=vn`
pub fn cars(n: usize) -> Vec<Vehicle> {
    (1..=n).map(car).collect()
}

pub fn garage(levels: Vec<Vec<ParkingSpace>>) -> Garage {
    Garage::new(levels.into_iter().map(ParkingLevel::new).collect())
}

pub fn premium_first_garage(levels: Vec<Vec<ParkingSpace>>) -> Garage {
    let config = AllocConfig {
        vehicle_order: VehicleOrder::PremiumFirst,
    };
    Garage::with_config(levels.into_iter().map(ParkingLevel::new).collect(), config)
}

pub fn standard_spaces(n: usize) -> Vec<ParkingSpace> {
    (0..n).map(|_| ParkingSpace::default()).collect()
}

/// Occupant ids of every space, level by level
pub fn occupants(garage: &Garage) -> Vec<Vec<Option<String>>> {
    garage
        .levels()
        .iter()
        .map(|l| l.vehicles().map(|v| v.map(|v| v.id.to_string())).collect())
        .collect()
}

pub fn expected(levels: &[&[Option<&str>]]) -> Vec<Vec<Option<String>>> {
    levels
        .iter()
        .map(|l| l.iter().map(|v| v.map(String::from)).collect())
        .collect()
}

pub fn ids(vehicles: &[Vehicle]) -> Vec<String> {
    vehicles.iter().map(|v| v.id.to_string()).collect()
}
