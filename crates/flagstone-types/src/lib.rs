//! Shared types, adapter traits, and core utilities for the Flagstone
//! resolution engine.
//!
//! This crate contains the foundational types shared between the engine
//! crates and all adapter implementations. Extracting these into a separate
//! crate allows adapter crates to compile in parallel with the engine's
//! feature crates.

pub mod env_adapter;
pub mod error;
pub mod override_adapter;
pub mod prelude;
pub mod remote_adapter;
pub mod types;

// vim: ts=4
