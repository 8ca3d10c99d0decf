// Domain layer: plain models and the ports (traits) the pipelines and store are written against.

pub mod model;
pub mod ports;
