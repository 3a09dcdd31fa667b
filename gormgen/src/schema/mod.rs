//! Schema introspection module

mod introspector;
mod metadata;

pub use introspector::*;
pub use metadata::*;
