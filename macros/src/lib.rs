//! Proc macros for blogconf.
//!
//! # Config derive macro
//!
//! Generates typed TOML field path accessors for diagnostic messages.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! pub struct SiteConfig {
//!     pub website: String,
//!
//!     /// Internal field, never reported in diagnostics.
//!     #[config(skip)]
//!     pub root: PathBuf,
//! }
//!
//! // Generates:
//! // - SiteConfig::FIELDS.website -> FieldPath("site.website")
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (internal use)
//! - `#[config(name = "x")]` - Custom TOML field name
//!
//! # Section inference
//!
//! Without a `section` attribute, inferred from the struct name:
//! - `SiteConfig` → `site`
//! - `LocaleConfig` → `locale`

mod fields;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates the FIELDS accessor constant.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::derive(&input).into()
}
