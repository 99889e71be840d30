// Domain layer: module identifiers, API payloads and ports.

pub mod model;
pub mod module;
pub mod ports;
