// SPDX-License-Identifier: MPL-2.0
//! `innlingo` is a small key-based translation (i18n) engine.
//!
//! Translations live in per-locale catalogs, nested label/string trees
//! embedded at build time as JSON. A [`Translator`] bound to a locale
//! resolves dot-delimited key paths against its catalog and substitutes
//! `{name}` placeholders from caller-supplied parameters. Every operation
//! is total: an unsupported locale resolves to the default locale's
//! catalog, a missing key comes back as the key path itself, and an absent
//! parameter leaves its placeholder verbatim.
//!
//! ```
//! use innlingo::{create_translator, Params};
//!
//! let t = create_translator("fr");
//! assert_eq!(t.translate("staff.actions.stockIn"), "Entrée de stock");
//!
//! let text = t.translate_with(
//!     "staff.inventory.acrossCategories",
//!     &Params::new().with("count", 5),
//! );
//! assert_eq!(text, "sur 5 catégories");
//! ```

#![doc(html_root_url = "https://docs.rs/innlingo/0.2.0")]

pub mod catalog;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod locale;
pub mod translator;

pub use catalog::{Catalog, CatalogNode, Catalogs};
pub use error::{Error, Result};
pub use interpolate::{ParamValue, Params};
pub use translator::{create_translator, Translator};
