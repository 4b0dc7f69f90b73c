//! Project context for CLI operations.

use std::path::{Path, PathBuf};

use adrkit_extract::{ScanOutput, Scanner};
use adrkit_render::Template;
use adrkit_types::Adr;
use tracing::debug;

use crate::config::{default_config_path, default_template_path, AdrkitConfig};
use crate::error::{CliError, CliResult};

/// A project root together with its loaded configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root; scan paths and locations are relative to it.
    pub root: PathBuf,
    /// Where the configuration was (or would be) loaded from.
    pub config_path: PathBuf,
    pub config: AdrkitConfig,
}

impl ProjectContext {
    /// Load the configuration for `root`.
    ///
    /// `config_path` overrides `<root>/.adrkit/config.toml`. A missing
    /// configuration file yields defaults; a missing root is an error.
    pub fn load(root: &Path, config_path: Option<PathBuf>) -> CliResult<Self> {
        if !root.is_dir() {
            return Err(CliError::FileNotFound(root.display().to_string()));
        }
        let config_path = config_path.unwrap_or_else(|| default_config_path(root));
        let config = AdrkitConfig::load(&config_path)?;
        config.validate()?;
        debug!(root = %root.display(), config = %config_path.display(), "loaded project");

        Ok(Self {
            root: root.to_path_buf(),
            config_path,
            config,
        })
    }

    /// Scanner configured from the project settings.
    pub fn scanner(&self) -> CliResult<Scanner> {
        Ok(Scanner::new(
            self.config.syntax_table()?,
            self.config.exclude_set()?,
        ))
    }

    /// Scan every configured path.
    pub fn scan(&self) -> CliResult<ScanOutput> {
        let output = self
            .scanner()?
            .scan_paths(&self.root, &self.config.scan_paths)?;
        Ok(output)
    }

    /// Scan and aggregate into decisions.
    pub fn decisions(&self) -> CliResult<Vec<Adr>> {
        let scan = self.scan()?;
        Ok(adrkit_valid::aggregate(&scan.records)?)
    }

    /// The configured template, the project template if present, or the
    /// built-in default.
    pub fn template(&self) -> CliResult<Template> {
        if let Some(path) = self.config.template_path(&self.root) {
            return Ok(Template::load(&path)?);
        }
        let path = default_template_path(&self.root);
        if path.is_file() {
            Ok(Template::load(&path)?)
        } else {
            Ok(Template::default())
        }
    }
}
