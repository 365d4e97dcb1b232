// Domain layer: core models and ports (interfaces). No I/O beyond std/serde types.

pub mod model;
pub mod ports;
