pub use crate::error::{Error, FlResult};
pub use crate::types::{CacheStats, FlagConfig, FlagValue, ResolutionContext};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
