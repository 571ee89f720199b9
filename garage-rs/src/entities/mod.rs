mod garage;
mod parking_level;
mod parking_space;
mod permit;
mod vehicle;

#[doc(inline)]
pub use permit::Permit;

#[doc(inline)]
pub use permit::PermitSet;

#[doc(inline)]
pub use permit::N_PERMITS;

#[doc(inline)]
pub use vehicle::Vehicle;

#[doc(inline)]
pub use vehicle::VehicleId;

#[doc(inline)]
pub use vehicle::VehicleType;

#[doc(inline)]
pub use parking_space::ParkingSpace;

#[doc(inline)]
pub use parking_level::ParkingLevel;

#[doc(inline)]
pub use garage::Garage;

#[doc(inline)]
pub use garage::SpaceKey;
