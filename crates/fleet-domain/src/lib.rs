//! Domain layer for delivery vehicle comparison
//!
//! Holds the vehicle catalog model, trip requests and the feasibility and
//! scoring engine. Nothing in here performs I/O.

pub mod model;
pub mod repository;
pub mod service;
