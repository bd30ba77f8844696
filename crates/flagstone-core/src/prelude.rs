pub use flagstone_types::prelude::*;

// vim: ts=4
