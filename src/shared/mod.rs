//! Usage: Cross-cutting utilities shared across layers.

pub(crate) mod fs;
pub(crate) mod mutex_ext;
