// src/config/mod.rs
//! Externally supplied configuration.

pub mod rules;

pub use rules::{BusinessRules, ResponseTemplate, SectorRule, GENERAL_SECTOR};
