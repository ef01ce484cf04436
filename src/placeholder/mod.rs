//! Placeholder containers and their registry
//!
//! Placeholders let one part of a rendering pass (a view script) collect
//! fragments that another part (the layout) renders:
//! - [`Container`] is the capability a container type provides
//! - [`PlaceholderContainer`] is the default implementation
//! - [`Registry`] stores containers by name and builds new ones on demand

mod class;
mod container;
mod registry;

pub use class::{ContainerClass, ContainerClasses};
pub use container::{Container, Indent, PlaceholderContainer, SharedContainer};
pub use registry::Registry;
