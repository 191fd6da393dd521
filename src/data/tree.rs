use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Value, json};

use crate::data::{
    error::{ConfigError, json_type_name},
    menu::Menu,
    node::to_json_str,
};

/// Default indent width in spaces for saved JSON.
pub const DEFAULT_INDENT: usize = 2;

/// The root container: an unkeyed menu plus load/save orchestration.
///
/// A tree always has a root. Reloading replaces it wholesale; there is no
/// partial-update path. Access from multiple threads must be serialized by
/// the caller.
#[derive(Debug, Clone)]
pub struct ConfigTree {
    root: Menu,
    source_path: Option<PathBuf>,
}

impl ConfigTree {
    /// Build a tree bound to an optional source file and load it.
    ///
    /// A `None` path or a file that does not exist yields the default
    /// placeholder menu, not an error.
    pub fn new(source_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        let mut tree = Self {
            root: Self::default_root(),
            source_path: source_path.map(|p| p.as_ref().to_path_buf()),
        };
        tree.reload()?;
        Ok(tree)
    }

    /// The root menu. Its key is always `None`.
    pub fn root(&self) -> &Menu {
        &self.root
    }

    /// The bound source file, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Re-read the tree from the source file, replacing the root wholesale.
    ///
    /// Without a source path, or when the file does not exist, the default
    /// placeholder menu is installed instead.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedJson`] for invalid JSON,
    /// [`ConfigError::InvalidRootType`] when the top level is not an object,
    /// plus I/O and node parse errors.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let Some(path) = self.source_path.as_deref().filter(|p| p.exists()) else {
            debug!("no menu file to load, installing default menu");
            self.root = Self::default_root();
            return Ok(());
        };
        debug!("loading menu from {}", path.display());
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        self.install_root(&value)
    }

    /// Replace the tree from a JSON string, ignoring the source path.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        self.install_root(&value)
    }

    /// Write the serialized tree to the source file, overwriting it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoSourcePath`] when the tree has no source file.
    pub fn save(&self, indent: usize) -> Result<(), ConfigError> {
        let Some(path) = self.source_path.as_deref() else {
            return Err(ConfigError::NoSourcePath);
        };
        fs::write(path, self.save_to_string(indent)?)?;
        debug!("menu saved to {}", path.display());
        Ok(())
    }

    /// Serialize the tree to a JSON string with the given indent width.
    ///
    /// Unlike [`ConfigTree::save`], this works without a source path.
    pub fn save_to_string(&self, indent: usize) -> Result<String, ConfigError> {
        to_json_str(&self.root.as_json(), indent)
    }

    fn install_root(&mut self, value: &Value) -> Result<(), ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::InvalidRootType {
                actual: json_type_name(value),
            });
        }
        self.root = Menu::from_object(None, value)?;
        Ok(())
    }

    fn default_root() -> Menu {
        let placeholder = json!({"T1": "(No commands configured)"});
        Menu::from_object(None, &placeholder).expect("placeholder menu is a valid object")
    }
}
