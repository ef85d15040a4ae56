//! Hepascope: Hepatitis-B Survey Analysis Library
//!
//! A library for descriptive analysis of a hepatitis-B occupational
//! survey dataset: feature derivation (BMI and class bins), dataset
//! summaries, and static chart rendering.

pub mod charts;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
