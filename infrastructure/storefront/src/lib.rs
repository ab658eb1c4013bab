pub mod catalog_service;
pub mod client;
pub mod dto;
pub mod stock_service;
