//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that a string is an absolute URL usable as a link target.
///
/// Uses the `url` crate for strict parsing. `http`/`https` URLs must carry a
/// host; `mailto` is accepted when `allow_mailto` is set (social rosters link
/// email addresses). Returns the reason for rejection, `None` when valid.
///
/// # Examples
/// ```ignore
/// check_absolute_url("https://example.com", false)        -> None
/// check_absolute_url("mailto:me@example.com", true)       -> None
/// check_absolute_url("mailto:me@example.com", false)      -> Some(..)
/// check_absolute_url("/relative/path", false)             -> Some(..)
/// check_absolute_url("ftp://example.com", false)          -> Some(..)
/// ```
pub fn check_absolute_url(url_str: &str, allow_mailto: bool) -> Option<String> {
    let parsed = match url::Url::parse(url_str) {
        Ok(parsed) => parsed,
        Err(e) => return Some(format!("invalid URL: {}", e)),
    };

    match parsed.scheme() {
        "http" | "https" => {
            if parsed.host_str().is_none() {
                return Some("URL must have a valid host".into());
            }
            None
        }
        "mailto" if allow_mailto => None,
        scheme => Some(format!(
            "scheme '{}' not supported, must be http or https{}",
            scheme,
            if allow_mailto { " (or mailto)" } else { "" }
        )),
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding
/// `config_name`. Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← cwd
/// /home/user/blog/blog.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // An absolute config path is used as-is
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_absolute_url_valid() {
        assert_eq!(check_absolute_url("https://example.com", false), None);
        assert_eq!(check_absolute_url("http://localhost:8080/blog", false), None);
        assert_eq!(
            check_absolute_url("https://www.linkedin.com/in/someone", true),
            None
        );
    }

    #[test]
    fn test_check_absolute_url_mailto() {
        assert_eq!(check_absolute_url("mailto:me@example.com", true), None);
        // mailto rejected where only web URLs make sense
        assert!(check_absolute_url("mailto:me@example.com", false).is_some());
    }

    #[test]
    fn test_check_absolute_url_rejects_relative() {
        // No scheme at all
        assert!(check_absolute_url("example.com/profile", false).is_some());
        assert!(check_absolute_url("/profile", false).is_some());
    }

    #[test]
    fn test_check_absolute_url_rejects_other_schemes() {
        let reason = check_absolute_url("ftp://example.com", false).unwrap();
        assert!(reason.contains("ftp"));
    }
}
