// Domain layer: property records, filters and the ports the adapters implement.

pub mod model;
pub mod ports;
