//! Domain Layer
//!
//! Value objects parsed from API payloads, the file map and manifest rules,
//! and the ports implemented by the infrastructure layer.

pub mod entities;
pub mod ports;
pub mod value_objects;
