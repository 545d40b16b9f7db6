//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. User config: `~/.config/essay-rank/config.<ext>`
//! 3. Project config: `essay-rank.<ext>` or `.essay-rank.<ext>`, found by
//!    walking up from the working directory (stopping at a `.git` boundary)
//! 4. Explicit files (e.g. from a `--config` flag)
//! 5. `ESSAY_RANK_*` environment variables
//!
//! Supported formats: TOML, YAML, JSON, chosen by file extension.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use essay_rank_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("default top words: {}", config.default_top_words);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default number of top words returned when the caller does not ask
/// for a specific count.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

/// Default bind address for the HTTP server.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default port for the HTTP server.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// The configuration for essay-rank.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (stderr only if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Number of top words returned when no count is requested.
    pub default_top_words: usize,
    /// Drop words shorter than this many characters before counting.
    pub min_word_len: Option<usize>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Applies to both the CLI and the HTTP server. Use
    /// `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<u64>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Bind address for the `serve` command.
    pub server_host: Option<String>,
    /// Port for the `serve` command.
    pub server_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            default_top_words: DEFAULT_TOP_WORDS,
            min_word_len: None,
            max_input_bytes: None,
            disable_input_limit: false,
            server_host: None,
            server_port: None,
        }
    }
}

impl Config {
    /// Effective input size limit: `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<u64> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "essay-rank";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub const fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/essay-rank/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // ESSAY_RANK_DEFAULT_TOP_WORDS=25, ESSAY_RANK_LOG_LEVEL=debug, ...
        figment = figment.merge(Env::prefixed("ESSAY_RANK_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }
}

/// Find project config files by walking up from the given directory.
///
/// Returns all matches from the closest directory that has any, ordered
/// low-to-high precedence: dotfiles before regular files. The walk stops
/// at the first directory containing `.git` (checked after the config
/// lookup, so a config next to `.git` is still found).
fn find_project_configs(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut current = Some(start.to_path_buf());

    while let Some(dir) = current {
        let mut found = Vec::new();

        for ext in CONFIG_EXTENSIONS {
            let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
            if dotfile.is_file() {
                found.push(dotfile);
            }
        }
        for ext in CONFIG_EXTENSIONS {
            let regular = dir.join(format!("{APP_NAME}.{ext}"));
            if regular.is_file() {
                found.push(regular);
            }
        }

        if !found.is_empty() {
            return found;
        }

        if dir.join(".git").exists() {
            break;
        }

        current = dir.parent().map(Utf8Path::to_path_buf);
    }

    Vec::new()
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let config_dir = proj_dirs.config_dir();

    for ext in CONFIG_EXTENSIONS {
        let config_path = config_dir.join(format!("config.{ext}"));
        if config_path.is_file() {
            return Utf8PathBuf::from_path_buf(config_path).ok();
        }
    }

    None
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}
