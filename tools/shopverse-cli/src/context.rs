//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopverse_commerce::{Currency, Shop};
use shopverse_storage::FileStorage;
use tracing::debug;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Path the configuration was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Storage directory override from the command line.
    data_dir_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&Path>,
        data_dir: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(path.to_path_buf())),
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(ref path) = config_path {
            debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_dir_override: data_dir,
        })
    }

    /// Directory holding the persisted stores.
    pub fn data_dir(&self) -> PathBuf {
        match self.data_dir_override {
            Some(ref dir) => self.resolve_path(dir),
            None => self.resolve_path(Path::new(&self.config.storage.data_dir)),
        }
    }

    /// Open the shop session over the data directory.
    pub fn open_shop(&self) -> Result<Shop<FileStorage>> {
        let dir = self.data_dir();
        if self.output.is_verbose() {
            self.output.info(&format!("Data directory: {}", dir.display()));
        }
        let storage = FileStorage::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        Shop::open(storage).context("Failed to load stored cart and wishlist")
    }

    /// Display currency.
    pub fn currency(&self) -> Currency {
        self.config.display.currency
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("shopverse.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join("shopverse.toml")));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("shopverse.json"), "{}").unwrap();
        std::fs::write(root.path().join(".shopverse.toml"), "").unwrap();

        assert_eq!(
            find_config(root.path()),
            Some(root.path().join(".shopverse.toml"))
        );
    }
}
