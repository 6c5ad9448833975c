//! # Marketlens - Value Normalization & Formatting Engine
//!
//! A Rust implementation of the value normalization layer behind a
//! financial analytics dashboard: it turns loosely-typed backend payloads
//! (mixed numbers, currency strings, percentage strings, multiples, or
//! missing values) into consistently formatted, presentation-ready
//! records, and maps semi-structured JSON payloads onto tables and
//! key-value grids without a fixed schema.
//!
//! ## Features
//!
//! - **Unit Classification**: label heuristics pick the formatting rule
//!   (currency, percent, multiple, integer) via an ordered rule table
//! - **Text Coercion**: display strings ("$1.2B", "17.8%", "4.2x",
//!   "n/a") are parsed back into normalized numeric + unit pairs and
//!   never fail, including mojibake repair for mis-encoded text
//! - **Deterministic Formatting**: magnitude-bucketed currency, percent,
//!   multiple and integer rendering with stable rounding rules
//! - **Schema-Tolerant Rendering**: key-value and tabular payload
//!   fragments in several equivalent shapes render to a toolkit-neutral
//!   record tree, degrading per-cell to a placeholder
//! - **Settings Persistence**: theme, density and search history stored
//!   through an injected backend
//! - **Configuration**: YAML-based configuration with validation
//!
//! ## Architecture
//!
//! The crate follows a modular architecture with clear separation of concerns:
//!
//! - `classify`: unit inference from value labels
//! - `coerce`: text coercion and value normalization
//! - `format`: display formatting rules per unit kind
//! - `render`: key-value and table renderers
//! - `payload`: adaptive payload walking and section detection
//! - `config`: configuration management and validation
//! - `logging`: structured logging and tracing
//! - `persistence`: UI settings storage
//! - `error`: error types

pub mod classify;
pub mod coerce;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod payload;
pub mod persistence;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use error::{MarketlensError, Result};
pub use payload::render_payload;
