// Domain layer: calculation models and ports. No external dependencies.

pub mod model;
pub mod ports;
