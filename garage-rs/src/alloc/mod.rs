mod alloc_config;
mod allocator;

#[doc(inline)]
pub use alloc_config::AllocConfig;

#[doc(inline)]
pub use alloc_config::VehicleOrder;

#[doc(inline)]
pub use allocator::Allocator;

#[doc(inline)]
pub use allocator::SpacePriority;
