//! License discovery, normalization, and allow-list marking.
//!
//! - [`normalize`] — alias table mapping noisy community spellings to
//!   canonical identifiers, plus a closed table of known composite strings.
//! - [`content`] — fuzzy recognition of license bodies in README/LICENSE
//!   files.
//! - [`guess`] — per-package license discovery combining metadata fields and
//!   file sniffing.
//! - [`mark`] — bottom-up "entirely allow-listed" propagation.

pub mod content;
pub mod guess;
pub mod mark;
pub mod normalize;
