// SPDX-License-Identifier: MPL-2.0
//! Locale-bound translators: key-path lookup with a visible fallback.
//!
//! A [`Translator`] is the lookup function the rest of an application calls
//! for every user-visible string. It never fails: a key that does not
//! resolve to a translation comes back as the key itself, so a missing
//! entry shows up in the UI as dotted-path text instead of breaking the
//! render.

use crate::catalog::{self, Catalog, Catalogs};
use crate::interpolate::{interpolate, Params};
use unic_langid::LanguageIdentifier;

/// A lookup function bound to one locale's catalog.
///
/// The catalog is resolved once at construction; after that every call is a
/// pure read, so two translators for the same locale are interchangeable.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Translator<'a> {
    /// Binds a translator to `code`'s catalog in `catalogs`.
    ///
    /// An unsupported or unparsable code binds to the default locale's
    /// catalog instead.
    pub fn new(catalogs: &'a Catalogs, code: &str) -> Self {
        Self {
            catalog: catalogs.resolve(code),
        }
    }

    /// As [`Translator::new`], for an already-parsed identifier.
    pub fn for_locale(catalogs: &'a Catalogs, locale: &LanguageIdentifier) -> Self {
        Self {
            catalog: catalogs.resolve_id(locale),
        }
    }

    /// Resolves `key_path` to its translation.
    pub fn translate(&self, key_path: &str) -> String {
        match self.catalog.lookup(key_path) {
            Some(text) => text.to_string(),
            None => key_path.to_string(),
        }
    }

    /// As [`Translator::translate`], then substitutes `{name}` placeholders
    /// from `params`.
    ///
    /// The fallback path is exempt: a key that did not resolve is returned
    /// verbatim, never interpolated.
    pub fn translate_with(&self, key_path: &str, params: &Params) -> String {
        match self.catalog.lookup(key_path) {
            Some(text) => interpolate(text, params),
            None => key_path.to_string(),
        }
    }
}

/// Returns a translator over the embedded catalogs for `code`.
pub fn create_translator(code: &str) -> Translator<'static> {
    Translator::new(catalog::embedded(), code)
}
