// Domain layer: core models and ports (interfaces). No external dependencies beyond std/serde.

pub mod model;
pub mod money;
pub mod ports;
