//! Document model types for the parsed resource list.
//!
//! This module defines the intermediate representation that bridges the
//! markdown scanner and the renderers. Section order follows the order of
//! first appearance in the source document.

mod document;
mod resource;
mod table;

pub use document::{Document, Section, Subsection};
pub use resource::Resource;
pub use table::Table;
