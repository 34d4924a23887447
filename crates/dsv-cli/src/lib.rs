//! CLI library components for the dataset-structure validator.

pub mod logging;
