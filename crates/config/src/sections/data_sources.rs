//! `data_sources/<name>/`: linked data sources and their collection rules
//!
//! Rules live two levels below a data source, at
//! `<database>/<collection>/rules.json`, with the collection schema in a
//! sibling `schema.json`. In memory the schema is merged into the rule under
//! the `"schema"` key and split back out on write.

use super::{ensure_dir, require_document};
use crate::names::{reject_reserved, require_segment, require_str, NameClaims};
use crate::options::CollisionPolicy;
use appdir_core::{
    Document, Error, Result, DIR_DATA_SOURCES, FILE_CONFIG, FILE_RULES, FILE_SCHEMA,
    KEY_COLLECTION, KEY_DATABASE, KEY_NAME, KEY_SCHEMA,
};
use appdir_utils::{parse_document, walk, write_document, WalkOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

const SECTION: &str = "data_sources";
const RULE_SECTION: &str = "data_sources.rules";
const KEY_TYPE: &str = "type";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Data source config, named by its `"name"` field
    #[serde(default)]
    pub config: Document,
    /// Collection rules, each carrying its schema under `"schema"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Document>,
}

pub fn parse(root: &Path) -> Result<Vec<DataSource>> {
    let mut data_sources = Vec::new();
    walk(&root.join(DIR_DATA_SOURCES), &WalkOptions::dirs(), |entry| {
        let dir = entry.path();
        let data_source = DataSource {
            config: require_document(&dir.join(FILE_CONFIG))?,
            rules: parse_rules(dir)?,
        };
        debug!(
            data_source = %dir.display(),
            rules = data_source.rules.len(),
            "parsed data source"
        );
        data_sources.push(data_source);
        Ok(())
    })?;
    Ok(data_sources)
}

fn parse_rules(data_source_dir: &Path) -> Result<Vec<Document>> {
    let mut rules = Vec::new();
    walk(data_source_dir, &WalkOptions::dirs(), |database| {
        walk(database.path(), &WalkOptions::dirs(), |collection| {
            // Not every directory under a data source holds a rule
            let Some(mut rule) = parse_document(&collection.path().join(FILE_RULES))? else {
                return Ok(());
            };
            let schema = parse_document(&collection.path().join(FILE_SCHEMA))?.unwrap_or_default();
            rule.insert(KEY_SCHEMA.to_string(), Value::Object(schema));
            rules.push(rule);
            Ok(())
        })
    })?;
    Ok(rules)
}

/// Directory of a rule relative to its data source
fn rule_dir(rule: &Document) -> Result<PathBuf> {
    let database = require_segment(rule, RULE_SECTION, KEY_DATABASE)?;
    // Database directories sit beside the data source's config.json
    reject_reserved(RULE_SECTION, database, &[FILE_CONFIG])?;
    let collection = require_segment(rule, RULE_SECTION, KEY_COLLECTION)?;
    Ok(Path::new(database).join(collection))
}

pub fn validate(data_sources: &[DataSource], policy: CollisionPolicy) -> Result<()> {
    let mut claims = NameClaims::new(SECTION, policy);
    for data_source in data_sources {
        let name = require_segment(&data_source.config, SECTION, KEY_NAME)?;
        require_str(&data_source.config, SECTION, KEY_TYPE)?;
        claims.claim(name)?;

        let mut rule_claims = NameClaims::new(format!("{RULE_SECTION}[{name}]"), policy);
        for rule in &data_source.rules {
            let dir = rule_dir(rule)?;
            if !matches!(rule.get(KEY_SCHEMA), None | Some(Value::Object(_))) {
                return Err(Error::missing_field(RULE_SECTION, KEY_SCHEMA, "an object"));
            }
            rule_claims.claim(dir.to_string_lossy())?;
        }
    }
    Ok(())
}

pub fn write(root: &Path, data_sources: &[DataSource], policy: CollisionPolicy) -> Result<()> {
    validate(data_sources, policy)?;
    write_validated(root, data_sources)
}

pub(crate) fn write_validated(root: &Path, data_sources: &[DataSource]) -> Result<()> {
    let dir = root.join(DIR_DATA_SOURCES);
    ensure_dir(&dir)?;
    for data_source in data_sources {
        let data_source_dir = dir.join(require_segment(&data_source.config, SECTION, KEY_NAME)?);
        write_document(&data_source_dir.join(FILE_CONFIG), &data_source.config)?;

        for rule in &data_source.rules {
            let rule_dir = data_source_dir.join(rule_dir(rule)?);

            let mut rule = rule.clone();
            let schema = match rule.remove(KEY_SCHEMA) {
                Some(Value::Object(schema)) => schema,
                _ => Document::new(),
            };

            write_document(&rule_dir.join(FILE_RULES), &rule)?;
            write_document(&rule_dir.join(FILE_SCHEMA), &schema)?;
        }
    }
    Ok(())
}
