//! Report module - textual dataset summary

pub mod summary;

pub use summary::*;
