//! Built-in route handlers.
//!
//! A fixed dispatch table keyed on the first path segment; only the
//! `/files` POST handler has side effects (file creation, never
//! overwrite).

pub mod files;
pub mod router;

pub use router::dispatch;
