// Domain layer: plain data and the ports the generators are written against.

pub mod model;
pub mod ports;
