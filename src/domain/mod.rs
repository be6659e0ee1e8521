// Domain layer: catalog/row models and the ports the pipeline is built on.

pub mod model;
pub mod ports;
