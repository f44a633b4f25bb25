//! In-memory models passed between loaders.

pub mod calendar;
pub mod category;
pub mod row;
pub mod summary;
