//! Blog configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── locale     # [locale]
//! │   ├── logo       # [logo]
//! │   └── social     # [[social]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[site]`     | Site metadata (title, author, website, paging) |
//! | `[locale]`   | Language code and BCP 47 formatting tags       |
//! | `[logo]`     | Logo display (vector/raster, dimensions)       |
//! | `[[social]]` | Ordered social link roster                     |
//!
//! The configuration is constructed once at startup and immutable afterwards;
//! consumers receive it by explicit `&BlogConfig` parameter, never through a
//! global.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{LocaleConfig, LogoConfig, SiteConfig, SocialLink, SocialRoster};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Blog root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteConfig,

    /// Locale settings
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Logo display settings
    #[serde(default)]
    pub logo: LogoConfig,

    /// Ordered social link roster
    #[serde(default)]
    pub social: SocialRoster,
}

impl BlogConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The blog root is determined by the config file's parent
    /// directory. Validation runs once here; a valid `BlogConfig` never
    /// changes afterwards.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'blogconf init' to create a new blog.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()
            .map_err(|err| ConfigError::Io(PathBuf::from("."), err))?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    ///
    /// Resolves the blog root, applies CLI overrides, and derives every
    /// social link label from its template. This is the only place labels
    /// are computed.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.root = root;

        if let Commands::Check { verbose } = cli.command {
            crate::logger::set_verbose(verbose);
        }

        // Override canonical URL if provided via CLI
        if let Some(ref website) = cli.website {
            self.site.website = website.clone();
        }

        self.social.derive_labels(&self.site.title);
    }

    /// Parse configuration from TOML string.
    ///
    /// Labels are not derived here; callers that bypass `load` must invoke
    /// `finalize` (or `SocialRoster::derive_labels`) themselves.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (blog.toml) since it's always at blog root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the blog root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration invariants.
    ///
    /// Collects all violations and returns them at once, so an author sees
    /// every mistake in a single run instead of fixing them one by one.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.logo.validate(&mut diag);
        self.social.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML with labels derived for title interpolation.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BlogConfig {
    let (mut parsed, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    let title = parsed.site.title.clone();
    parsed.social.derive_labels(&title);
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<BlogConfig, _> = toml::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_blog_config_default() {
        let config = BlogConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.posts_per_page, 5);
        assert_eq!(config.locale.language, "en");
        assert!(config.logo.enable);
        assert!(config.social.is_empty());
    }

    #[test]
    fn test_get_root_default() {
        let config = BlogConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = BlogConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\nwebsite = \"https://example.com\"";
        let (_, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let content = r#"
[site]
title = "Test"
website = "not-a-url"
posts_per_page = 0

[logo]
enable = true
width = 0
height = 45
"#;
        let config = test_parse_config(content);
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        config.logo.validate(&mut diag);

        // website, posts_per_page, and logo.width all reported together
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_parse_twice_is_deterministic() {
        let content = r#"
[site]
title = "abdadeel"
website = "https://abdadeel.com"

[[social]]
name = "Github"
url = "https://github.com/mabdullahadeel"
"#;
        let first = test_parse_config(content);
        let second = test_parse_config(content);
        assert_eq!(first, second);
    }
}
