//! Star-schema dimension loader for the sales warehouse.
//!
//! Reads the customer, product and order extracts, cleans their fields and
//! replaces the category, customer, product, warehouse and date dimensions of
//! the warehouse in one sequential run. See [`service::orchestrator`] for the
//! entry point.

pub mod config;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
