//! Flag resolution engine for the Flagstone platform.
//!
//! # Architecture
//!
//! - **Cache** (`cache.rs`): injectable TTL cache store
//! - **Resolver** (`resolver.rs`): ordered multi-tier source chain
//! - **Service** (`service.rs`): the public resolution surface
//!
//! Lookups traverse Cache → Remote Config → Tenant Overrides → Environment
//! Defaults → hard default, short-circuiting on the first definitive
//! answer. Every result, including the hard default, is written back to the
//! cache with the configured TTL, so repeat lookups inside the TTL window
//! never touch a backend. Backend failures degrade to the next tier; flag
//! evaluation never breaks the feature it gates.

pub mod cache;
pub mod resolver;
pub mod service;

mod prelude;

pub use cache::{FlagCache, LruFlagCache, MemoryFlagCache};
pub use service::FlagService;

// vim: ts=4
