// Domain layer: models and ports. Nothing here touches the filesystem or the terminal.

pub mod model;
pub mod ports;
