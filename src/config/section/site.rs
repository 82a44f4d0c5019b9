//! `[site]` configuration.
//!
//! Site-wide metadata reused across every generated page: canonical URL,
//! author, description, title, default Open Graph image, and pagination size.
//! The `title` is also the interpolation input for derived social labels.

use crate::config::ConfigDiagnostics;
use crate::config::util::check_absolute_url;
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteConfig {
    /// Canonical URL of the deployed domain (e.g., "https://example.com").
    pub website: String,

    /// Author display name.
    pub author: String,

    /// Free-text site summary.
    pub description: String,

    /// Short site title, interpolated into derived fields.
    pub title: String,

    /// Default social-preview image filename.
    pub og_image: String,

    /// Whether the site supports light and dark themes.
    pub light_dark_mode: bool,

    /// Number of posts per paginated page. Must be greater than zero.
    pub posts_per_page: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            description: String::new(),
            title: String::new(),
            og_image: "og-image.jpg".into(),
            light_dark_mode: true,
            posts_per_page: 5,
        }
    }
}

impl SiteConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `website` must be set and parse as an absolute http(s) URL
    /// - `posts_per_page` must be greater than zero
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.website.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.website,
                "is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.website),
            );
        } else if let Some(reason) = check_absolute_url(&self.website, false) {
            diag.error_with_hint(
                Self::FIELDS.website,
                reason,
                "use format like https://example.com",
            );
        }

        if self.posts_per_page == 0 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                "must be greater than zero",
                "pagination needs at least one post per page",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.website, "");
        assert_eq!(config.site.og_image, "og-image.jpg");
        assert!(config.site.light_dark_mode);
        assert_eq!(config.site.posts_per_page, 5);
    }

    #[test]
    fn test_custom_config() {
        let config = test_parse_config(
            r#"
[site]
website = "https://abdadeel.com"
author = "Abdullah Adeel | abdadeel"
description = "A blog about web development, programming, and other stuff."
title = "abdadeel"
og_image = "og-image-default.jpg"
light_dark_mode = true
posts_per_page = 3
"#,
        );
        assert_eq!(config.site.website, "https://abdadeel.com");
        assert_eq!(config.site.title, "abdadeel");
        assert_eq!(config.site.og_image, "og-image-default.jpg");
        assert_eq!(config.site.posts_per_page, 3);
    }

    #[test]
    fn test_missing_website_rejected() {
        let config = test_parse_config("[site]\ntitle = \"Test\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.website");
    }

    #[test]
    fn test_relative_website_rejected() {
        let config = test_parse_config("[site]\nwebsite = \"example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_zero_posts_per_page_rejected() {
        let config =
            test_parse_config("[site]\nwebsite = \"https://example.com\"\nposts_per_page = 0");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.posts_per_page");
    }

    #[test]
    fn test_valid_site_passes() {
        let config = test_parse_config(
            "[site]\nwebsite = \"https://example.com\"\ntitle = \"Test\"\nposts_per_page = 3",
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
