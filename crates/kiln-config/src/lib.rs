//! Configuration management for kiln.
//!
//! Parses `kiln.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `source.dir`
//! - `source.contents`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the publication/expiration date format.
    pub date_format: Option<String>,
    /// Override recursive asset enumeration.
    pub recursive_assets: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "kiln.toml";

/// Default date format for `publication` and `expiration` front matter values.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Singleton page locations.
    pub pages: PagesConfig,
    /// Repeated content collections.
    pub collections: CollectionsConfig,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw source configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    dir: Option<String>,
    contents: Option<String>,
    date_format: Option<String>,
    recursive_assets: Option<bool>,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct SourceConfig {
    /// Site source root.
    pub source_dir: PathBuf,
    /// Content root containing pages and collection folders.
    pub contents_dir: PathBuf,
    /// `chrono` format string for publication and expiration dates.
    pub date_format: String,
    /// Whether asset directories are listed recursively.
    pub recursive_assets: bool,
}

/// Singleton page locations, relative to the content root, without extension.
///
/// `home` and `not_found` are required at load time; the overview pages are
/// optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PagesConfig {
    pub home: String,
    pub not_found: String,
    pub blog_home: String,
    pub blog_authors: String,
    pub blog_tags: String,
    pub blog_posts: String,
    pub docs_home: String,
    pub docs_categories: String,
    pub docs_guides: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: "pages/main/home".to_owned(),
            not_found: "pages/main/404".to_owned(),
            blog_home: "pages/blog/home".to_owned(),
            blog_authors: "pages/blog/authors".to_owned(),
            blog_tags: "pages/blog/tags".to_owned(),
            blog_posts: "pages/blog/posts".to_owned(),
            docs_home: "pages/docs/home".to_owned(),
            docs_categories: "pages/docs/categories".to_owned(),
            docs_guides: "pages/docs/guides".to_owned(),
        }
    }
}

impl PagesConfig {
    fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("pages.home", self.home.as_str()),
            ("pages.not_found", self.not_found.as_str()),
            ("pages.blog_home", self.blog_home.as_str()),
            ("pages.blog_authors", self.blog_authors.as_str()),
            ("pages.blog_tags", self.blog_tags.as_str()),
            ("pages.blog_posts", self.blog_posts.as_str()),
            ("pages.docs_home", self.docs_home.as_str()),
            ("pages.docs_categories", self.docs_categories.as_str()),
            ("pages.docs_guides", self.docs_guides.as_str()),
        ]
    }
}

/// A repeated content category scanned from one folder.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Folder relative to the content root.
    pub folder: String,
    /// Prefix joined in front of every item slug.
    #[serde(default)]
    pub slug_prefix: Option<String>,
}

impl CollectionConfig {
    /// Create a collection config.
    #[must_use]
    pub fn new(folder: &str, slug_prefix: Option<&str>) -> Self {
        Self {
            folder: folder.to_owned(),
            slug_prefix: slug_prefix.map(str::to_owned),
        }
    }
}

/// All repeated content collections.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionsConfig {
    pub custom: CollectionConfig,
    pub authors: CollectionConfig,
    pub tags: CollectionConfig,
    pub posts: CollectionConfig,
    pub categories: CollectionConfig,
    pub guides: CollectionConfig,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            custom: CollectionConfig::new("pages/custom", None),
            authors: CollectionConfig::new("blog/authors", Some("authors")),
            tags: CollectionConfig::new("blog/tags", Some("tags")),
            posts: CollectionConfig::new("blog/posts", Some("posts")),
            categories: CollectionConfig::new("docs/categories", Some("categories")),
            guides: CollectionConfig::new("docs/guides", Some("guides")),
        }
    }
}

impl CollectionsConfig {
    fn entries(&self) -> [(&'static str, &CollectionConfig); 6] {
        [
            ("collections.custom", &self.custom),
            ("collections.authors", &self.authors),
            ("collections.tags", &self.tags),
            ("collections.posts", &self.posts),
            ("collections.categories", &self.categories),
            ("collections.guides", &self.guides),
        ]
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`source.dir`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a path field to be relative to the content root.
fn require_relative(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if Path::new(value).is_absolute() {
        return Err(ConfigError::Validation(format!(
            "{field} must be relative to the content root"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `kiln.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.source_resolved.contents_dir = source_dir.join(self.contents_folder());
            self.source_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(date_format) = &settings.date_format {
            self.source_resolved.date_format.clone_from(date_format);
        }
        if let Some(recursive_assets) = settings.recursive_assets {
            self.source_resolved.recursive_assets = recursive_assets;
        }
    }

    /// Content folder name inside the source root.
    fn contents_folder(&self) -> &str {
        self.source.contents.as_deref().unwrap_or("contents")
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let source_dir = base.join("src");
        Self {
            source: SourceConfigRaw::default(),
            pages: PagesConfig::default(),
            collections: CollectionsConfig::default(),
            source_resolved: SourceConfig {
                contents_dir: source_dir.join("contents"),
                source_dir,
                date_format: DEFAULT_DATE_FORMAT.to_owned(),
                recursive_assets: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.source_resolved.date_format, "source.date_format")?;
        for (field, path) in self.pages.entries() {
            require_relative(path, field)?;
        }
        for (field, collection) in self.collections.entries() {
            require_relative(&collection.folder, field)?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.source.dir {
            self.source.dir = Some(expand::expand_env(dir, "source.dir")?);
        }
        if let Some(ref contents) = self.source.contents {
            self.source.contents = Some(expand::expand_env(contents, "source.contents")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = config_dir.join(self.source.dir.as_deref().unwrap_or("src"));
        self.source_resolved = SourceConfig {
            contents_dir: source_dir.join(self.contents_folder()),
            source_dir,
            date_format: self
                .source
                .date_format
                .clone()
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_owned()),
            recursive_assets: self.source.recursive_assets.unwrap_or(true),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.source_resolved.source_dir, PathBuf::from("/test/src"));
        assert_eq!(
            config.source_resolved.contents_dir,
            PathBuf::from("/test/src/contents")
        );
        assert_eq!(config.source_resolved.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.source_resolved.recursive_assets);
        assert_eq!(config.pages.home, "pages/main/home");
        assert_eq!(config.pages.not_found, "pages/main/404");
        assert_eq!(
            config.collections.authors,
            CollectionConfig::new("blog/authors", Some("authors"))
        );
        assert_eq!(
            config.collections.custom,
            CollectionConfig::new("pages/custom", None)
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.pages, PagesConfig::default());
        assert_eq!(config.collections, CollectionsConfig::default());
    }

    #[test]
    fn test_parse_pages_config() {
        let toml = r#"
[pages]
home = "home"
not_found = "errors/404"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pages.home, "home");
        assert_eq!(config.pages.not_found, "errors/404");
        assert_eq!(config.pages.blog_home, "pages/blog/home");
    }

    #[test]
    fn test_parse_collection_config() {
        let toml = r#"
[collections.posts]
folder = "articles"
slug_prefix = "blog"

[collections.custom]
folder = "extra"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.collections.posts,
            CollectionConfig::new("articles", Some("blog"))
        );
        assert_eq!(config.collections.custom, CollectionConfig::new("extra", None));
        assert_eq!(
            config.collections.tags,
            CollectionConfig::new("blog/tags", Some("tags"))
        );
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[source]
dir = "site"
contents = "content"
date_format = "%Y-%m-%d"
recursive_assets = false
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.source_resolved.source_dir, PathBuf::from("/project/site"));
        assert_eq!(
            config.source_resolved.contents_dir,
            PathBuf::from("/project/site/content")
        );
        assert_eq!(config.source_resolved.date_format, "%Y-%m-%d");
        assert!(!config.source_resolved.recursive_assets);
    }

    #[test]
    fn test_validate_rejects_empty_page_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.pages.home = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("pages.home"));
    }

    #[test]
    fn test_validate_rejects_absolute_collection_folder() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.collections.posts = CollectionConfig::new("/abs/posts", None);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("collections.posts"));
    }

    #[test]
    fn test_validate_rejects_empty_date_format() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.source_resolved.date_format = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/site")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.source_resolved.source_dir,
            PathBuf::from("/custom/site")
        );
        assert_eq!(
            config.source_resolved.contents_dir,
            PathBuf::from("/custom/site/contents")
        );
    }

    #[test]
    fn test_apply_cli_settings_date_format_and_assets() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            date_format: Some("%d/%m/%Y".to_owned()),
            recursive_assets: Some(false),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.source_resolved.date_format, "%d/%m/%Y");
        assert!(!config.source_resolved.recursive_assets);
        assert_eq!(config.source_resolved.source_dir, PathBuf::from("/test/src"));
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let result = Config::load(Some(Path::new("/nonexistent/kiln.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("kiln.toml");
        std::fs::write(&path, "[source]\ndir = \"website\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.source_resolved.source_dir, temp_dir.path().join("website"));
        assert_eq!(
            config.source_resolved.contents_dir,
            temp_dir.path().join("website/contents")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_from_file_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("kiln.toml");
        std::fs::write(&path, "[source\n").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
