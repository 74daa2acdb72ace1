//! Markup rendering: layout chrome, the section primitive, content
//! components, and the per-route page renderers.

pub mod components;
pub mod layout;
pub mod pages;
pub mod section;
