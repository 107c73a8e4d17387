//! # Cocktails
//!
//! Builds and maintains a curated cocktail recipe dataset: heuristic
//! classification of spirit, taste, method, strength and region, measurement
//! conversion between imperial and metric units, and the queries the display
//! layer runs over the finished collection.

pub mod catalog;
pub mod classification_patterns;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod dataset_errors;
pub mod ingest;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod observability;
pub mod overrides;
pub mod recipe_model;
pub mod region;
pub mod unit_conversion;
