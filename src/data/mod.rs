//! Menu tree data structures.
//!
//! This module provides the core data structures for the command menu tree,
//! including:
//!
//! - Parsing JSON node specs into typed nodes
//! - Serialization back to the source JSON shape
//! - Load/save orchestration for the whole tree
//!
//! ## Architecture
//!
//! The data module is organized into several submodules:
//!
//! - [`error`] - Error taxonomy for parsing and persistence
//! - [`menu`] - Submenus holding ordered, keyed child nodes
//! - [`node`] - Node kind dispatch and command entries
//! - [`text`] - Text blocks and their renderable lines
//! - [`tree`] - The root container and its file orchestration

/// Error taxonomy for parsing and persistence.
pub mod error;

/// Submenus holding ordered, keyed child nodes.
pub mod menu;

/// Node kind dispatch and command entries.
pub mod node;

/// Text blocks and their renderable lines.
pub mod text;

/// The root container and its file orchestration.
pub mod tree;

pub use error::ConfigError;
pub use menu::Menu;
pub use node::{CommandEntry, ConfigNode, to_json_str};
pub use text::{LineOrigin, TextBlock, TextLine};
pub use tree::{ConfigTree, DEFAULT_INDENT};
