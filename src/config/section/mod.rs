//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blog.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `site`   | `[site]`     | Site metadata and pagination         |
//! | `locale` | `[locale]`   | Language code and formatting tags    |
//! | `logo`   | `[logo]`     | Logo display parameters              |
//! | `social` | `[[social]]` | Ordered social link roster           |

mod locale;
mod logo;
mod site;
mod social;

// Re-export section configs
pub use locale::LocaleConfig;
pub use logo::LogoConfig;
pub use site::SiteConfig;
pub use social::{SocialLink, SocialRoster, derive_label};
