/// External (serializable) representations of garages, vehicles and solutions
pub mod ext_repr;

/// Conversion of external representations into the library's entities
pub mod import;

/// Conversion of a filled garage into an external solution
pub mod export;
