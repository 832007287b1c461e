// Domain layer: core models, ports (interfaces), and pure services.

pub mod model;
pub mod ports;
pub mod services;
