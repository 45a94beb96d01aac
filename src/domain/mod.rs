// Domain layer: the bird model and the capability traits a cage needs.

pub mod model;
pub mod ports;
