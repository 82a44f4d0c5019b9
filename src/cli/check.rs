//! Configuration check command.
//!
//! By the time this runs, `BlogConfig::load` has already parsed and
//! validated the file; a broken config never reaches here. The command's job
//! is the human-facing summary.

use anyhow::Result;

use crate::config::BlogConfig;
use crate::{debug, log};

/// Print a validation summary for a loaded configuration.
///
/// The verbose flag was already applied globally during config load.
pub fn run_check(config: &BlogConfig) -> Result<()> {
    log!("check"; "{}", config.config_path.display());

    let active = config.social.active_links().count();
    let total = config.social.len();

    log!("check"; "site: '{}' by {} ({})", config.site.title, config.site.author, config.site.website);
    log!(
        "check";
        "locale: {} [{}]",
        config.locale.language_or_default(),
        config.locale.tags().map(|t| t.join(", ")).unwrap_or_else(|| "environment default".into())
    );
    log!(
        "check";
        "logo: {} ({}x{}, {})",
        if config.logo.enable { "enabled" } else { "disabled" },
        config.logo.width,
        config.logo.height,
        if config.logo.svg { "svg" } else { "raster" }
    );
    log!("check"; "social: {active} active of {total} entries");

    for link in config.social.active_links() {
        debug!("check"; "  {} -> {} ('{}')", link.name, link.url, link.label);
    }

    log!("check"; "config ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_run_check_on_valid_config() {
        let config = test_parse_config(
            r#"
[site]
website = "https://example.com"
title = "Test"

[[social]]
name = "Github"
url = "https://github.com/someone"
"#,
        );
        // Summary printing must not fail on a valid config
        run_check(&config).unwrap();
    }
}
