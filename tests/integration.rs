// SPDX-License-Identifier: MPL-2.0
use innlingo::interpolate::Params;
use innlingo::translator::{create_translator, Translator};
use innlingo::{catalog, config, locale};
use innlingo::config::Config;
use tempfile::tempdir;

#[test]
fn test_embedded_catalogs_ship_en_and_fr() {
    let catalogs = catalog::embedded();
    let codes: Vec<String> = catalogs
        .available_locales()
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert_eq!(codes, vec!["en", "fr"]);
    assert_eq!(catalogs.default_locale().to_string(), "en");
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");
    let catalogs = catalog::embedded();

    // 1. Initial config: en
    let initial_config = Config {
        language: Some("en".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let selected = locale::resolve_locale(None, &loaded, catalogs.available_locales())
        .expect("en should be available");
    assert_eq!(selected.to_string(), "en");
    let translator = Translator::for_locale(catalogs, &selected);
    assert_eq!(translator.translate("staff.actions.stockIn"), "Stock In");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let selected = locale::resolve_locale(None, &loaded, catalogs.available_locales())
        .expect("fr should be available");
    assert_eq!(selected.to_string(), "fr");
    let translator = Translator::for_locale(catalogs, &selected);
    assert_eq!(
        translator.translate("staff.actions.stockIn"),
        "Entrée de stock"
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_flag_overrides_saved_preference() {
    let catalogs = catalog::embedded();
    let config = Config {
        language: Some("en".to_string()),
    };
    let selected = locale::resolve_locale(Some("fr"), &config, catalogs.available_locales())
        .expect("fr should be available");
    assert_eq!(selected.to_string(), "fr");
}

#[test]
fn test_unsupported_locale_translates_like_default() {
    let fallback = create_translator("de");
    let default = create_translator("en");

    for key in [
        "staff.actions.stockIn",
        "staff.inventory.totalItems",
        "staff.tabs.history",
        "staff.actions.missingKey",
    ] {
        assert_eq!(fallback.translate(key), default.translate(key));
    }
}

#[test]
fn test_parameterized_translation_end_to_end() {
    let translator = create_translator("en");
    let text = translator.translate_with(
        "staff.inventory.acrossCategories",
        &Params::new().with("count", 7),
    );
    assert_eq!(text, "across 7 categories");

    let translator = create_translator("fr");
    let text = translator.translate_with(
        "staff.inventory.acrossCategories",
        &Params::new().with("count", 7),
    );
    assert_eq!(text, "sur 7 catégories");
}

#[test]
fn test_missing_key_is_visibly_echoed() {
    let translator = create_translator("fr");
    assert_eq!(
        translator.translate("staff.dialog.unknownDialog.title"),
        "staff.dialog.unknownDialog.title"
    );
}
