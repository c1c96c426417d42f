//! Core data types for CosmicStore pricing

pub mod actor;
pub mod catalog_item;
pub mod price_decision;
