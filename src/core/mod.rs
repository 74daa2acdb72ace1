//! Core modules: the content contract and shared primitives.

pub mod assets;
pub mod content;
pub mod error;
pub mod output;
