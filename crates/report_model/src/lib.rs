//! Report Model - Project tree, document metadata, and block nodes
//!
//! This crate provides the data types shared between the report editor's
//! storage layer and the export renderers: the project/section tree with
//! its HTML content strings, the per-project document metadata records,
//! and an intermediate block tree that renderers consume without knowing
//! anything about the final serialization format.

mod block;
mod changelog;
mod history;
mod info;
mod project;
mod table;
pub mod templates;

pub use block::*;
pub use changelog::*;
pub use history::*;
pub use info::*;
pub use project::*;
pub use table::*;
