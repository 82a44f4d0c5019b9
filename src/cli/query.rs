//! Configuration query command.
//!
//! Prints the resolved configuration (derived labels included) as JSON for
//! consumption by external tooling - renderers, feed generators, CI checks.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::config::BlogConfig;
use crate::log;

/// Resolve and print the configuration per query arguments.
pub fn run_query(config: &BlogConfig, args: &QueryArgs) -> Result<()> {
    let output = resolve_output(config, args)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Build the JSON value for the query, applying section and roster filters.
fn resolve_output(config: &BlogConfig, args: &QueryArgs) -> Result<JsonValue> {
    let mut value = serde_json::to_value(config)?;

    // --active narrows the roster before any section filter
    if args.active {
        if let Some(social) = value.get_mut("social") {
            let active: Vec<JsonValue> = config
                .social
                .active_links()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?;
            *social = JsonValue::Array(active);
        }
    }

    if let Some(ref fields) = args.fields {
        value = filter_sections(&value, fields);
    }

    Ok(value)
}

/// Keep only the requested top-level sections, in requested order.
fn filter_sections(value: &JsonValue, fields: &[String]) -> JsonValue {
    let Some(obj) = value.as_object() else {
        return value.clone();
    };

    let mut filtered = Map::new();
    for field in fields {
        if let Some(v) = obj.get(field) {
            filtered.insert(field.clone(), v.clone());
        }
    }
    JsonValue::Object(filtered)
}
