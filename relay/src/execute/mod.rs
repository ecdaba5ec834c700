//! Execute handlers for the GMP relay.
//!
//! - `send` - `Send` and `SendWithPermit`

mod send;

pub use send::*;
