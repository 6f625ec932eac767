// SPDX-License-Identifier: MPL-2.0
use innlingo::interpolate::{ParamValue, Params};
use innlingo::translator::Translator;
use innlingo::{catalog, config, locale};

const USAGE: &str = "Usage: innlingo [--lang <code>] [--set-lang <code>] [--locales] <key> [name=value ...]";

fn main() {
    let mut args = pico_args::Arguments::from_env();

    if args.contains("--locales") {
        let catalogs = catalog::embedded();
        for l in catalogs.available_locales() {
            println!("{}\t{}", l, locale::display_name(l).unwrap_or("-"));
        }
        return;
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let set_lang: Option<String> = args.opt_value_from_str("--set-lang").unwrap();

    let mut cfg = config::load().unwrap_or_default();
    if let Some(code) = set_lang {
        cfg.language = Some(code);
        if let Err(error) = config::save(&cfg) {
            eprintln!("Failed to save config: {:?}", error);
        }
    }

    let catalogs = catalog::embedded();
    let selected = locale::resolve_locale(lang.as_deref(), &cfg, catalogs.available_locales())
        .unwrap_or_else(locale::default_locale);
    let translator = Translator::for_locale(catalogs, &selected);

    let mut words = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok());

    let Some(key) = words.next() else {
        println!("{}", USAGE);
        return;
    };

    let mut params = Params::new();
    let mut has_params = false;
    for pair in words {
        if let Some((name, value)) = pair.split_once('=') {
            params = params.with(name, parse_param(value));
            has_params = true;
        }
    }

    let text = if has_params {
        translator.translate_with(&key, &params)
    } else {
        translator.translate(&key)
    };
    println!("{}", text);
}

/// CLI parameters arrive as text; numeric-looking values are passed to the
/// engine as numbers, everything else as strings.
fn parse_param(value: &str) -> ParamValue {
    if let Ok(number) = value.parse::<i64>() {
        return ParamValue::Int(number);
    }
    if let Ok(number) = value.parse::<f64>() {
        return ParamValue::Float(number);
    }
    ParamValue::Str(value.to_string())
}
