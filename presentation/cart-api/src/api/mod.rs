pub mod cart;
pub mod error;
pub mod health;
pub mod stock;
pub mod tags;
