//! SeaORM entities
//!
//! Database row models. Conversions into domain entities live next to each model.

pub mod customers;
