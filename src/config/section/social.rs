//! `[[social]]` configuration.
//!
//! The ordered roster of outbound profile links shown in site navigation and
//! footer. Entry order in `blog.toml` is display order and is preserved
//! exactly; consumers filter to active entries without reordering.
//!
//! Accessible labels are never authored by hand. Each entry carries a
//! template with `{title}` / `{platform}` placeholders and the final label is
//! derived once at load time by [`derive_label`], so renaming the site can
//! never leave a stale label behind.
//!
//! # Example
//!
//! ```toml
//! [[social]]
//! name = "Github"
//! url = "https://github.com/alice"
//! active = true
//!
//! [[social]]
//! name = "Mail"
//! url = "mailto:alice@example.com"
//! template = "Send an email to {title}"
//! active = false
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::check_absolute_url;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Label template used when an entry does not set its own.
pub const DEFAULT_TEMPLATE: &str = "{title} on {platform}";

/// Placeholders a label template may reference.
const TEMPLATE_PLACEHOLDERS: &[&str] = &["title", "platform"];

// ============================================================================
// SocialLink
// ============================================================================

/// One outbound profile link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "social")]
pub struct SocialLink {
    /// Platform identifier, unique within the roster (e.g., "Github").
    pub name: String,

    /// Absolute profile URL (http, https, or mailto).
    pub url: String,

    /// Label template with `{title}` and `{platform}` placeholders.
    pub template: String,

    /// Whether consumers should render this link.
    pub active: bool,

    /// Accessible label, derived from `template` at load time.
    /// Serialize-only: present in query output, never read from TOML.
    #[serde(skip_deserializing)]
    #[config(skip)]
    pub label: String,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            template: DEFAULT_TEMPLATE.into(),
            active: true,
            label: String::new(),
        }
    }
}

// ============================================================================
// SocialRoster
// ============================================================================

/// Ordered collection of social links (`[[social]]` tables).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialRoster(Vec<SocialLink>);

impl SocialRoster {
    pub fn iter(&self) -> impl Iterator<Item = &SocialLink> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Links consumers should render, in declared order.
    pub fn active_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.0.iter().filter(|link| link.active)
    }

    /// Derive every entry's accessible label from its template.
    ///
    /// Called once from `BlogConfig::finalize`; idempotent, so re-deriving
    /// with the same title is a no-op.
    pub fn derive_labels(&mut self, site_title: &str) {
        for link in &mut self.0 {
            link.label = derive_label(&link.template, site_title, &link.name);
        }
    }

    /// Validate the roster.
    ///
    /// # Checks
    /// - `name` set and unique across the roster
    /// - `url` set and absolute (http, https, or mailto)
    /// - `template` references only known placeholders
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();

        for link in &self.0 {
            if link.name.is_empty() {
                diag.error(SocialLink::FIELDS.name, "entry is missing a platform name");
            } else if !seen.insert(link.name.as_str()) {
                diag.error_with_hint(
                    SocialLink::FIELDS.name,
                    format!("duplicate platform name '{}'", link.name),
                    "every [[social]] entry needs a distinct name",
                );
            }

            if link.url.is_empty() {
                diag.error(
                    SocialLink::FIELDS.url,
                    format!("entry '{}' is missing a URL", link.name),
                );
            } else if let Some(reason) = check_absolute_url(&link.url, true) {
                diag.error(
                    SocialLink::FIELDS.url,
                    format!("entry '{}': {}", link.name, reason),
                );
            }

            if let Some(placeholder) = unknown_placeholder(&link.template) {
                diag.error_with_hint(
                    SocialLink::FIELDS.template,
                    format!("entry '{}': unknown placeholder '{{{}}}'", link.name, placeholder),
                    "available placeholders: {title}, {platform}",
                );
            }
        }
    }
}

impl<'a> IntoIterator for &'a SocialRoster {
    type Item = &'a SocialLink;
    type IntoIter = std::slice::Iter<'a, SocialLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for SocialRoster {
    type Output = SocialLink;

    fn index(&self, index: usize) -> &SocialLink {
        &self.0[index]
    }
}

// ============================================================================
// label derivation
// ============================================================================

/// Interpolate a label template with the site title and platform name.
///
/// Pure and deterministic: the same inputs always produce the same label.
/// Whitespace in the template is preserved literally, including any leading
/// space an author wrote into it.
pub fn derive_label(template: &str, site_title: &str, platform: &str) -> String {
    template
        .replace("{title}", site_title)
        .replace("{platform}", platform)
}

/// Find the first placeholder in `template` that is not a known one.
///
/// Returns the offending placeholder content, or `None` when the template is
/// well-formed. An unclosed `{` reports the rest of the string.
fn unknown_placeholder(template: &str) -> Option<String> {
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let token = &after[..close];
                if !TEMPLATE_PLACEHOLDERS.contains(&token) {
                    return Some(token.to_string());
                }
                rest = &after[close + 1..];
            }
            None => return Some(after.to_string()),
        }
    }
    None
}

// ============================================================================
// tests
// ============================================================================
