//! Folio Core — shared types, errors, configuration, and the host trait.
//!
//! This crate has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Page configuration and defaults
//! - [`geometry`]: Vertical viewport geometry
//! - [`host`]: Host environment capability, selector engine, in-memory host

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod geometry;
pub mod host;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::{PortfolioConfig, RevealConfig};
pub use error::{Error, Result};
pub use host::{
    ClickEvent, ClickHandler, Host, IntersectionEntry, IntersectionHandler, IntersectionOptions,
    ScrollHandler,
};
