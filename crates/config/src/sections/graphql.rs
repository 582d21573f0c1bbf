//! `graphql/`: GraphQL config and custom resolvers
//!
//! Resolvers are stored as `custom_resolvers/<on_type>_<field_name>.json`.

use super::{ensure_dir, require_document};
use crate::names::{require_segment, NameClaims};
use crate::options::CollisionPolicy;
use appdir_core::{
    Document, Result, DIR_CUSTOM_RESOLVERS, DIR_GRAPHQL, EXT_JSON, FILE_CONFIG, KEY_FIELD_NAME,
    KEY_ON_TYPE,
};
use appdir_utils::{is_dir, parse_document, walk, write_document, WalkOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SECTION: &str = "graphql.custom_resolvers";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQl {
    #[serde(default)]
    pub config: Document,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_resolvers: Vec<Document>,
}

pub fn parse(root: &Path) -> Result<Option<GraphQl>> {
    let dir = root.join(DIR_GRAPHQL);
    if !is_dir(&dir)? {
        return Ok(None);
    }

    let mut custom_resolvers = Vec::new();
    walk(
        &dir.join(DIR_CUSTOM_RESOLVERS),
        &WalkOptions::files_with_extension(EXT_JSON),
        |entry| {
            custom_resolvers.push(require_document(entry.path())?);
            Ok(())
        },
    )?;

    Ok(Some(GraphQl {
        config: parse_document(&dir.join(FILE_CONFIG))?.unwrap_or_default(),
        custom_resolvers,
    }))
}

/// File name a resolver is written to
pub fn resolver_file_name(resolver: &Document) -> Result<String> {
    let on_type = require_segment(resolver, SECTION, KEY_ON_TYPE)?;
    let field_name = require_segment(resolver, SECTION, KEY_FIELD_NAME)?;
    Ok(format!("{on_type}_{field_name}.{EXT_JSON}"))
}

pub fn validate(graphql: Option<&GraphQl>, policy: CollisionPolicy) -> Result<()> {
    let mut claims = NameClaims::new(SECTION, policy);
    graphql
        .into_iter()
        .flat_map(|graphql| &graphql.custom_resolvers)
        .try_for_each(|resolver| claims.claim(resolver_file_name(resolver)?))
}

/// Write the section; an absent section is written as an empty one
pub fn write(root: &Path, graphql: Option<&GraphQl>, policy: CollisionPolicy) -> Result<()> {
    validate(graphql, policy)?;
    write_validated(root, graphql)
}

pub(crate) fn write_validated(root: &Path, graphql: Option<&GraphQl>) -> Result<()> {
    let empty = GraphQl::default();
    let graphql = graphql.unwrap_or(&empty);

    let dir = root.join(DIR_GRAPHQL);
    write_document(&dir.join(FILE_CONFIG), &graphql.config)?;

    let resolvers_dir = dir.join(DIR_CUSTOM_RESOLVERS);
    ensure_dir(&resolvers_dir)?;
    for resolver in &graphql.custom_resolvers {
        write_document(&resolvers_dir.join(resolver_file_name(resolver)?), resolver)?;
    }
    Ok(())
}
