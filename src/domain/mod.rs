pub mod dish;
pub mod errors;
pub mod id;
pub mod order;
pub mod ports;
