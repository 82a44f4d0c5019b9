//! Blog initialization command.
//!
//! Writes the starter `blog.toml` (sample roster included) and ignore files
//! into a new or existing directory. Never overwrites an existing config.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::BlogConfig;
use crate::embed::STARTER_CONFIG;
use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "blog.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `blogconf init` - initialize in current directory
    CurrentDir,
    /// `blogconf init <name>` - create new subdirectory
    NewDir,
}

/// Create a new blog configuration.
///
/// # Steps
/// 1. Validate the target directory
/// 2. Write the starter `blog.toml`
/// 3. Write `.gitignore` / `.ignore` files
///
/// If `dry_run` is true, only prints the starter config to stdout.
pub fn new_blog(config: &BlogConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{STARTER_CONFIG}");
        return Ok(());
    }

    let root = config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    write_config(root)?;
    write_ignore_files(root)?;

    log!("init"; "Blog configuration initialized at '{}'", root.join(CONFIG_FILE).display());
    Ok(())
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: a config file must not already exist
/// - `NewDir`: the directory must not exist
fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let config_path = root.join(CONFIG_FILE);
            if config_path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Remove it first, or use `blogconf init <name>` for a new directory.",
                    config_path.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Write the starter blog.toml configuration.
fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns.
fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = [".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join(CONFIG_FILE);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[[social]]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains(".DS_Store"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }

    #[test]
    fn test_existing_config_rejected_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[site]").unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_clean_dir_accepted_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_dir_rejected_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_accepted_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_blog");
        assert!(validate_target(&new_path, InitMode::NewDir).is_ok());
    }
}
