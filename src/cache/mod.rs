//! Time-bounded response cache.
//!
//! This module provides a transport-agnostic cache that:
//! - Keys raw JSON payloads by the fully-qualified request URL
//! - Reuses a payload only while it is younger than the TTL
//! - Replaces expired payloads lazily on the next access, never evicts
//! - Reads time from an injected `Clock` so freshness is testable

mod layer;
mod traits;

pub use layer::ResponseCache;
pub use traits::{Clock, SystemClock};

#[cfg(test)]
pub use traits::{CacheSource, ManualClock};
