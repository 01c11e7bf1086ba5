use swatch::{Configuration, Platform};

/// The standard fixture: one generic token, one specific override, a theme,
/// and a font.
pub fn sample_definition() -> &'static str {
    r##"{
        "tokens": {
            "space": { "md": 10 },
            "color": { "red": "#ff0000" }
        },
        "specificTokens": { "$space.lg": 20 },
        "themes": {
            "light": { "background": "#ffffff", "color": "#111111" },
            "dark": { "background": "#111111", "color": "#ffffff" }
        },
        "fonts": {
            "body": { "family": "Inter", "attributes": { "size.md": 16 } }
        }
    }"##
}

pub fn sample_config(platform: Platform) -> Configuration {
    Configuration::from_json(sample_definition(), platform).expect("fixture definition is valid")
}

/// A configuration where a specific override shadows a generic token of the
/// same base name.
pub fn overlapping_config(platform: Platform) -> Configuration {
    Configuration::builder(platform)
        .with_tokens("space", [("md", 10)])
        .unwrap()
        .with_specific_token("$space.md", 25)
        .unwrap()
        .build()
}

/// A second configuration with different values, for replacement tests.
pub fn replacement_config(platform: Platform) -> Configuration {
    Configuration::builder(platform)
        .with_tokens("space", [("md", 99)])
        .unwrap()
        .build()
}
