// SPDX-License-Identifier: MPL-2.0
//! Translation catalogs: the nested label/string trees behind every translator.
//!
//! A catalog is parsed once from a JSON resource into a tree of
//! [`CatalogNode`]s and never mutated afterwards. The catalogs shipped with
//! the crate are embedded at build time from `assets/i18n/` (one
//! `<locale>.json` per supported locale) and exposed process-wide through
//! [`embedded`]; callers with their own translation sources can build a
//! [`Catalogs`] registry from parsed [`Catalog`]s instead.

use crate::error::{Error, Result};
use crate::locale;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::LazyLock;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// One node of a catalog tree: a translatable string, or a labelled set of
/// child nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogNode {
    Leaf(String),
    Branch(HashMap<String, CatalogNode>),
}

/// The full translation tree for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: CatalogNode,
}

impl Catalog {
    /// Parses a catalog from JSON source text.
    ///
    /// The document must be an object whose values are, recursively, either
    /// nested objects or strings. Arrays, numbers, booleans, and nulls are
    /// rejected as malformed.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        match value {
            serde_json::Value::Object(_) => Ok(Self {
                root: node_from_json(value)?,
            }),
            _ => Err(Error::Catalog(
                "catalog root must be a JSON object".to_string(),
            )),
        }
    }

    /// Resolves a dot-delimited key path to its leaf string.
    ///
    /// Returns `None` when a label along the path is absent or the path
    /// ends on an internal node. An empty-string leaf counts as resolved.
    pub fn lookup(&self, key_path: &str) -> Option<&str> {
        let mut node = &self.root;
        for label in key_path.split('.') {
            match node {
                CatalogNode::Branch(children) => node = children.get(label)?,
                CatalogNode::Leaf(_) => return None,
            }
        }
        match node {
            CatalogNode::Leaf(text) => Some(text.as_str()),
            CatalogNode::Branch(_) => None,
        }
    }
}

fn node_from_json(value: serde_json::Value) -> Result<CatalogNode> {
    match value {
        serde_json::Value::String(text) => Ok(CatalogNode::Leaf(text)),
        serde_json::Value::Object(map) => {
            let mut children = HashMap::with_capacity(map.len());
            for (label, child) in map {
                children.insert(label, node_from_json(child)?);
            }
            Ok(CatalogNode::Branch(children))
        }
        other => Err(Error::Catalog(format!(
            "catalog values must be strings or nested objects, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Object(_) => "an object",
    }
}

/// An immutable registry of catalogs keyed by locale, with a fixed default
/// locale whose catalog answers for every unsupported request.
#[derive(Debug, Clone)]
pub struct Catalogs {
    catalogs: HashMap<LanguageIdentifier, Catalog>,
    available_locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
}

impl Catalogs {
    /// Builds a registry from pre-parsed catalogs.
    ///
    /// Fails when `catalogs` has no entry for `default_locale`, since every
    /// fallback ultimately lands there.
    pub fn new(
        catalogs: HashMap<LanguageIdentifier, Catalog>,
        default_locale: LanguageIdentifier,
    ) -> Result<Self> {
        if !catalogs.contains_key(&default_locale) {
            return Err(Error::Catalog(format!(
                "no catalog for default locale {}",
                default_locale
            )));
        }
        let mut available_locales: Vec<LanguageIdentifier> = catalogs.keys().cloned().collect();
        available_locales.sort_by_key(|l| l.to_string());
        Ok(Self {
            catalogs,
            available_locales,
            default_locale,
        })
    }

    /// Loads every `<locale>.json` embedded under `assets/i18n/`.
    ///
    /// Embedded resources are build inputs; a file that fails to parse is a
    /// packaging defect and panics here rather than surfacing at lookup time.
    pub fn from_embedded() -> Self {
        let mut catalogs = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".json") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source = String::from_utf8_lossy(content.data.as_ref());
                        let catalog = Catalog::from_json_str(&source)
                            .expect("Failed to parse embedded catalog.");
                        catalogs.insert(locale, catalog);
                    }
                }
            }
        }

        Self::new(catalogs, locale::default_locale())
            .expect("Embedded catalogs are missing the default locale.")
    }

    /// Maps a locale code to its catalog.
    ///
    /// Total: an unsupported or unparsable code silently resolves to the
    /// default locale's catalog.
    pub fn resolve(&self, code: &str) -> &Catalog {
        match code.parse::<LanguageIdentifier>() {
            Ok(locale) => self.resolve_id(&locale),
            Err(_) => self.default_catalog(),
        }
    }

    /// As [`Catalogs::resolve`], for an already-parsed identifier.
    pub fn resolve_id(&self, locale: &LanguageIdentifier) -> &Catalog {
        self.catalogs
            .get(locale)
            .unwrap_or_else(|| self.default_catalog())
    }

    /// The locales with a catalog in this registry, sorted by code.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// The locale every fallback resolves to.
    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }

    fn default_catalog(&self) -> &Catalog {
        // Presence is checked in `new`.
        &self.catalogs[&self.default_locale]
    }
}

static EMBEDDED: LazyLock<Catalogs> = LazyLock::new(Catalogs::from_embedded);

/// The process-wide registry of embedded catalogs, loaded on first access.
pub fn embedded() -> &'static Catalogs {
    &EMBEDDED
}
