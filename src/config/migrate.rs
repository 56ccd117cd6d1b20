//! Config migration: add fields missing from an existing config file.
//!
//! Works on the TOML document with `toml_edit` so existing comments,
//! ordering and formatting survive.

use toml_edit::{DocumentMut, Item};

use super::{Config, ConfigError};

/// Outcome of a migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// The migrated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist at all
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty() || !self.sections_added.is_empty()
    }
}

/// Add every field from the default config that `content` lacks.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            if !doc.contains_key(section) {
                doc.insert(section, default_item.clone());
                added_fields.push(section.to_string());
            }
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(default_table.clone()));
            sections_added.push(section.to_string());
            added_fields.extend(
                default_table
                    .iter()
                    .map(|(key, _)| format!("{}.{}", section, key)),
            );
            continue;
        }

        let Some(existing) = doc.get_mut(section).and_then(Item::as_table_mut) else {
            // Present but not a table; leave the user's value alone
            continue;
        };
        for (key, value) in default_table.iter() {
            if !existing.contains_key(key) {
                existing.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
