//! Assignment of vehicles to the parking spaces of a multi-level garage.
//!
//! A [`Garage`](entities::Garage) is built bottom-up from
//! [`ParkingSpace`](entities::ParkingSpace)s grouped into
//! [`ParkingLevel`](entities::ParkingLevel)s. Vehicles are handed to
//! [`Garage::assign`](entities::Garage::assign), which places them one by one with a greedy
//! first-fit policy and returns the ones that could not be placed.

/// Entities to model a garage, its levels, spaces and the vehicles parked in them
pub mod entities;

/// The allocation policy which decides where every vehicle is parked
pub mod alloc;

/// Importing garage instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
