//! Embedded static resources.
//!
//! The starter `blog.toml` written by `blogconf init` lives here as a
//! compiled-in constant, so a fresh scaffold never depends on files shipped
//! next to the binary.

/// Starter configuration with the sample social roster.
pub const STARTER_CONFIG: &str = include_str!("blog.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_starter_config_parses_clean() {
        // test_parse_config panics on unknown fields, so a typo in the
        // shipped starter fails here
        let config = test_parse_config(STARTER_CONFIG);

        assert_eq!(config.site.title, "abdadeel");
        assert_eq!(config.site.posts_per_page, 3);
        assert_eq!(config.social.len(), 10);
    }

    #[test]
    fn test_starter_config_validates() {
        let config = test_parse_config(STARTER_CONFIG);
        config.validate().unwrap();
    }

    #[test]
    fn test_starter_active_roster() {
        let config = test_parse_config(STARTER_CONFIG);
        let active: Vec<&str> = config
            .social
            .active_links()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(active, ["Github", "LinkedIn", "Twitter", "YouTube"]);
    }

    #[test]
    fn test_starter_labels() {
        let config = test_parse_config(STARTER_CONFIG);

        // The Github entry keeps the literal leading space authored in
        // its template
        assert_eq!(config.social[0].label, " abdadeel on Github");
        assert_eq!(config.social[2].label, "Send an email to abdadeel");
        assert_eq!(config.social[9].label, "abdadeel on Reddit");
    }
}
