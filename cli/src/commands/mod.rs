//! Command implementations for the geekbot CLI

pub mod logout;
pub mod report;

pub use logout::*;
pub use report::*;
