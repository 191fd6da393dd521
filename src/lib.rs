//! # cmdmenu
//!
//! A JSON-backed hierarchical command menu model.
//!
//! A menu file is a JSON object mapping menu labels to node specs, where the
//! shape of each value picks the node kind:
//!
//! - a **string** is an executable command entry; an optional trailing
//!   `&read` (case-insensitive) tells the executor to wait for a key press
//!   after running it
//! - an **array** is a text block; string elements are printed verbatim,
//!   object elements map command names to arguments and print the captured
//!   output instead
//! - a nested **object** is a submenu, recursively holding the same grammar
//!
//! `cmdmenu` owns parsing, serialization and command-output resolution for
//! this tree. The interactive executor that walks the tree, draws it and
//! handles key input lives elsewhere and consumes this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cmdmenu::{ConfigNode, ConfigTree, ShellRunner};
//!
//! let tree = ConfigTree::new(Some("menu.json"))?;
//! for item in &tree.root().items {
//!     match item {
//!         ConfigNode::Command(entry) => println!("[{}] {}", entry.key, entry.command),
//!         ConfigNode::Text(block) => println!("{}", block.render(&ShellRunner)),
//!         ConfigNode::Menu(menu) => println!("{} ...", menu.key.as_deref().unwrap_or("")),
//!     }
//! }
//! # Ok::<(), cmdmenu::data::ConfigError>(())
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Menu tree model, parsing, serialization and persistence
//! - [`runner`] - Shell command execution and the [`CommandRunner`] seam

/// Menu tree model, parsing, serialization and persistence.
pub mod data;

/// Shell command execution.
pub mod runner;

#[macro_use]
extern crate log;

pub use data::{
    CommandEntry, ConfigError, ConfigNode, ConfigTree, LineOrigin, Menu, TextBlock, TextLine,
};
pub use runner::{CommandRunner, ShellRunner};
