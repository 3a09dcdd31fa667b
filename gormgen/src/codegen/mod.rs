//! Code generation module

mod model;
mod model_generator;
mod naming;
mod type_resolver;

pub use model::*;
pub use model_generator::*;
pub use naming::*;
pub use type_resolver::*;
