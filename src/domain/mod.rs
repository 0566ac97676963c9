// Domain layer: lifecycle state and the status output port. No external dependencies beyond std.

pub mod model;
pub mod ports;
