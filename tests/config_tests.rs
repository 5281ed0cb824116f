use std::path::{Path, PathBuf};

use figment::Jail;
use pavlette::config::{ConfigError, CurveOverrides, Settings, SettingsOverrides};
use pavlette::curves::CurveType;
use pavlette::interpolation::ColorSpace;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pavlette-{}-{}.toml", std::process::id(), name))
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.step_count, 10);
    assert!(!settings.grey_scale);
    assert_eq!(settings.color_space, ColorSpace::Oklab);
    assert_eq!(settings.curve.curve_type, CurveType::Linear);
}

#[test]
fn test_parse_toml() {
    let toml_str = r#"
step_count = 4
grey_scale = true
color_space = "srgb-linear"

[curve]
type = "sigmoid"
strength = 2.0
"#;

    let settings = Settings::from_toml_str(toml_str).unwrap();
    assert_eq!(settings.step_count, 4);
    assert!(settings.grey_scale);
    assert_eq!(settings.color_space, ColorSpace::SrgbLinear);
    assert_eq!(settings.curve.curve_type, CurveType::Sigmoid);
    assert_eq!(settings.curve.strength, 2.0);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let settings = Settings::from_toml_str("grey_scale = true").unwrap();
    assert!(settings.grey_scale);
    assert_eq!(settings.step_count, 10);
    assert_eq!(settings.color_space, ColorSpace::Oklab);
}

#[test]
fn test_out_of_range_values_are_normalized() {
    let settings = Settings::from_toml_str(
        r#"
step_count = 40

[curve]
strength = 12.0
"#,
    )
    .unwrap();
    assert_eq!(settings.step_count, 10);
    assert_eq!(settings.curve.strength, 5.0);
}

#[test]
fn test_invalid_value_is_rejected() {
    let result = Settings::from_toml_str("step_count = \"many\"");
    assert!(matches!(result, Err(ConfigError::Extract(_))));
}

#[test]
fn test_missing_file_is_reported() {
    Jail::expect_with(|_jail| {
        let path = Path::new("does-not-exist.toml");
        let result = Settings::load(Some(path), &SettingsOverrides::default());
        assert!(matches!(result, Err(ConfigError::NotFound(p)) if p == path));
        Ok(())
    });
}

#[test]
fn test_overrides_beat_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "pavlette.toml",
            "step_count = 6\ncolor_space = \"lab\"\n\n[curve]\ntype = \"sigmoid\"\n",
        )?;

        let overrides = SettingsOverrides {
            step_count: Some(3),
            curve: CurveOverrides {
                curve_type: None,
                strength: Some(3.0),
            },
            ..Default::default()
        };
        let settings = Settings::load(Some(Path::new("pavlette.toml")), &overrides)
            .map_err(|e| e.to_string())?;

        assert_eq!(settings.step_count, 3);
        assert_eq!(settings.color_space, ColorSpace::Lab);
        // Nested tables merge key by key
        assert_eq!(settings.curve.curve_type, CurveType::Sigmoid);
        assert_eq!(settings.curve.strength, 3.0);
        Ok(())
    });
}

#[test]
fn test_env_layer_sits_between_file_and_flags() {
    Jail::expect_with(|jail| {
        jail.create_file("pavlette.toml", "step_count = 6\ncolor_space = \"lab\"\n")?;
        jail.set_env("PAVLETTE_STEP_COUNT", "4");
        jail.set_env("PAVLETTE_CURVE__TYPE", "sigmoid");
        jail.set_env("PAVLETTE_CURVE__STRENGTH", "2.5");

        let path = Path::new("pavlette.toml");
        let settings = Settings::load(Some(path), &SettingsOverrides::default())
            .map_err(|e| e.to_string())?;
        assert_eq!(settings.step_count, 4);
        assert_eq!(settings.color_space, ColorSpace::Lab);
        assert_eq!(settings.curve.curve_type, CurveType::Sigmoid);
        assert_eq!(settings.curve.strength, 2.5);

        let overrides = SettingsOverrides {
            step_count: Some(2),
            ..Default::default()
        };
        let settings = Settings::load(Some(path), &overrides).map_err(|e| e.to_string())?;
        assert_eq!(settings.step_count, 2);
        assert_eq!(settings.curve.curve_type, CurveType::Sigmoid);
        Ok(())
    });
}

#[test]
fn test_env_layer_without_file() {
    Jail::expect_with(|jail| {
        jail.set_env("PAVLETTE_GREY_SCALE", "true");
        jail.set_env("PAVLETTE_COLOR_SPACE", "srgb-linear");

        let settings =
            Settings::load(None, &SettingsOverrides::default()).map_err(|e| e.to_string())?;
        assert!(settings.grey_scale);
        assert_eq!(settings.color_space, ColorSpace::SrgbLinear);
        assert_eq!(settings.step_count, 10);
        Ok(())
    });
}

#[test]
fn test_empty_overrides_serialize_to_nothing() {
    let overrides = SettingsOverrides::default();
    assert!(overrides.curve.is_empty());
    assert_eq!(toml::to_string(&overrides).unwrap(), "");
}

#[test]
fn test_save_and_reload() {
    let path = temp_path("save");
    let settings = Settings {
        step_count: 7,
        grey_scale: true,
        color_space: ColorSpace::Oklch,
        ..Default::default()
    };
    settings.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(content.contains("step_count = 7"));
    assert!(content.contains("color_space = \"oklch\""));
    assert_eq!(Settings::from_toml_str(&content).unwrap(), settings);
}
