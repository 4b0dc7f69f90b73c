//! CLI configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use adrkit_extract::{CommentSyntax, ExcludeSet, SyntaxTable};
use adrkit_types::{CONFIG_DIR, CONFIG_FILE, TEMPLATE_FILE};

use crate::error::{CliError, CliResult};

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax.
fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

/// Default configuration path for a project root.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Default template path for a project root.
pub fn default_template_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(TEMPLATE_FILE)
}

/// Project configuration loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdrkitConfig {
    /// Paths to scan, relative to the project root.
    pub scan_paths: Vec<String>,
    /// Exclude globs matched against root-relative paths.
    pub exclude: Vec<String>,
    /// Markdown template path, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Treat unknown statuses as errors.
    pub strict_mode: bool,
    /// Comment syntax settings.
    pub syntax: SyntaxConfig,
}

impl Default for AdrkitConfig {
    fn default() -> Self {
        Self {
            scan_paths: vec![".".to_string()],
            exclude: default_excludes(),
            template: None,
            strict_mode: false,
            syntax: SyntaxConfig::default(),
        }
    }
}

fn default_excludes() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/.git/**",
        "**/vendor/**",
        "**/build/**",
        "**/dist/**",
        "**/.next/**",
        "**/target/**",
        "**/.adrkit/**",
        "**/.github/**",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl AdrkitConfig {
    /// Load configuration from a file.
    /// Returns defaults if the file does not exist.
    /// Environment variables in `${VAR}` format are expanded in the template path.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        config.template = config.template.as_deref().map(expand_env_vars);

        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Build the per-extension comment syntax table.
    pub fn syntax_table(&self) -> CliResult<SyntaxTable> {
        let indent = self.syntax.continuation_indent;
        let mut table = SyntaxTable::default()
            .with_default(CommentSyntax::new(&self.syntax.default_prefix, indent)?);
        for (ext, prefix) in &self.syntax.overrides {
            table = table.with_extension(ext, CommentSyntax::new(prefix, indent)?);
        }
        Ok(table.with_continuation_indent(indent))
    }

    /// Compile the exclude globs.
    pub fn exclude_set(&self) -> CliResult<ExcludeSet> {
        Ok(ExcludeSet::new(&self.exclude)?)
    }

    /// Template path for a project root, if one is configured.
    pub fn template_path(&self, root: &Path) -> Option<PathBuf> {
        self.template.as_ref().map(|t| root.join(t))
    }

    /// Reject settings that would make every scan empty.
    pub fn validate(&self) -> CliResult<()> {
        if self.scan_paths.is_empty() {
            return Err(CliError::config("scan_paths must not be empty"));
        }
        if self.syntax.continuation_indent == 0 {
            return Err(CliError::config(
                "syntax.continuation_indent must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Comment syntax configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Prefix for extensions without an override.
    pub default_prefix: String,
    /// Indentation a continuation line needs past its tag.
    pub continuation_indent: usize,
    /// Extension to prefix, merged over the built-in `#` extensions.
    pub overrides: BTreeMap<String, String>,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            default_prefix: "//".to_string(),
            continuation_indent: CommentSyntax::DEFAULT_CONTINUATION_INDENT,
            overrides: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AdrkitConfig::default();
        assert_eq!(config.scan_paths, vec!["."]);
        assert!(config.exclude.contains(&"**/node_modules/**".to_string()));
        assert!(!config.strict_mode);
        assert_eq!(config.syntax.default_prefix, "//");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = AdrkitConfig::load(&temp_dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AdrkitConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".adrkit").join("config.toml");

        let mut config = AdrkitConfig::default();
        config.strict_mode = true;
        config
            .syntax
            .overrides
            .insert("sql".to_string(), "--".to_string());
        config.save(&path).unwrap();

        assert_eq!(AdrkitConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "scan_paths = [\"src\"]\n[syntax]\ncontinuation_indent = 2\n").unwrap();

        let config = AdrkitConfig::load(&path).unwrap();
        assert_eq!(config.scan_paths, vec!["src"]);
        assert_eq!(config.syntax.continuation_indent, 2);
        assert_eq!(config.syntax.default_prefix, "//");
        assert_eq!(config.exclude, default_excludes());
    }

    #[test]
    fn test_template_env_expansion() {
        std::env::set_var("ADRKIT_TEST_TEMPLATE_DIR", "docs");
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "template = \"${ADRKIT_TEST_TEMPLATE_DIR}/adr.md\"\n",
        )
        .unwrap();

        let config = AdrkitConfig::load(&path).unwrap();
        assert_eq!(config.template.as_deref(), Some("docs/adr.md"));
        assert_eq!(
            config.template_path(Path::new("/p")),
            Some(PathBuf::from("/p/docs/adr.md"))
        );
    }

    #[test]
    fn test_unset_env_var_left_as_is() {
        assert_eq!(
            expand_env_vars("${ADRKIT_TEST_SURELY_UNSET}/x"),
            "${ADRKIT_TEST_SURELY_UNSET}/x"
        );
    }

    #[test]
    fn test_syntax_table_overrides() {
        let mut config = AdrkitConfig::default();
        config
            .syntax
            .overrides
            .insert("sql".to_string(), "--".to_string());
        let table = config.syntax_table().unwrap();
        assert_eq!(table.for_path(Path::new("a.sql")).prefix, "--");
        assert_eq!(table.for_path(Path::new("a.py")).prefix, "#");
        assert_eq!(table.for_path(Path::new("a.ts")).prefix, "//");
    }

    #[test]
    fn test_invalid_settings() {
        let mut config = AdrkitConfig::default();
        config.syntax.default_prefix = String::new();
        assert!(config.syntax_table().is_err());

        let mut config = AdrkitConfig::default();
        config.exclude.push("src/[ab]".to_string());
        assert!(config.exclude_set().is_err());

        let mut config = AdrkitConfig::default();
        config.scan_paths.clear();
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }
}
