//! Report renderers.
//!
//! - [`drift`] — indented tree of version transitions, severity-colored,
//!   with clean subtrees suppressed.
//! - [`licenses`] — indented tree of packages whose subtree is not entirely
//!   allow-listed, plus a summary table of license usage.

pub mod drift;
pub mod licenses;
