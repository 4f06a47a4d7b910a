pub mod dish_service;
pub mod order_service;
pub mod pipeline;
pub mod validation;
