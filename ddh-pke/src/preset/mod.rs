//! # Preset Module
//!
//! Ready-made safe-prime groups, from a toy group for hand-checked examples up to RFC
//! MODP sizes.

pub mod groups;

pub use groups::by_name;
