//! Pure helpers shared by the loaders.
//!
//! Nothing in here touches the database: field cleaning turns noisy extract
//! values into typed values, and the calendar helpers derive the date
//! dimension from a set of observed order dates.

pub mod calendar;
pub mod clean;
