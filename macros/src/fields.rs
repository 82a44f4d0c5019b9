//! Field path generation for the Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields};

/// Generate the `<Name>Fields` struct and the `FIELDS` constant.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section =
        get_string_attr(&input.attrs, "section").unwrap_or_else(|| infer_section(&name.to_string()));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    // Skip fields marked #[config(skip)]
    let infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(FieldInfo::from_field)
        .filter(|f| !f.skip)
        .collect();

    let field_defs = infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = infos.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{}.{}", section, f.toml_name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }
    }
}

/// Parsed per-field attribute state.
struct FieldInfo {
    name: syn::Ident,
    toml_name: String,
    skip: bool,
}

impl FieldInfo {
    fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        Some(Self {
            name: ident.clone(),
            toml_name: get_string_attr(&field.attrs, "name").unwrap_or_else(|| ident.to_string()),
            skip: has_attr(&field.attrs, "skip"),
        })
    }
}

/// Get string value from #[config(key = "value")].
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Skip value if present (e.g., `section = "site"`)
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Infer section name from struct name: `SiteConfig` → `site`.
fn infer_section(name: &str) -> String {
    let name = name.strip_suffix("Config").unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case.
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
