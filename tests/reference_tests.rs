use pavlette::color::Hsb;
use pavlette::reference::{ColorConfiguration, Reference, update_reference};

#[test]
fn test_default_configuration() {
    let config = ColorConfiguration::default();
    assert_eq!(config.dark, Hsb::new(0.0, 50.0, 5.0));
    assert_eq!(config.base, Hsb::new(0.0, 100.0, 100.0));
    assert_eq!(config.light, Hsb::new(0.0, 50.0, 100.0));
    assert!(config.is_hue_sync);
}

#[test]
fn test_hue_sync_carries_hue_to_all_references() {
    let config = ColorConfiguration::default();
    let updated = update_reference(&config, Reference::Base, Hsb::new(200.0, 80.0, 90.0));

    assert_eq!(updated.base, Hsb::new(200.0, 80.0, 90.0));
    assert_eq!(updated.dark, Hsb::new(200.0, 50.0, 5.0));
    assert_eq!(updated.light, Hsb::new(200.0, 50.0, 100.0));
    assert!(updated.is_hue_sync);
}

#[test]
fn test_hue_sync_from_an_endpoint() {
    let config = ColorConfiguration::default();
    let updated = update_reference(&config, Reference::Light, Hsb::new(90.0, 20.0, 95.0));

    assert_eq!(updated.light, Hsb::new(90.0, 20.0, 95.0));
    assert_eq!(updated.base, Hsb::new(90.0, 100.0, 100.0));
    assert_eq!(updated.dark, Hsb::new(90.0, 50.0, 5.0));
}

#[test]
fn test_without_sync_only_target_changes() {
    let config = ColorConfiguration::default().with_hue_sync(false);
    let updated = update_reference(&config, Reference::Dark, Hsb::new(300.0, 10.0, 20.0));

    assert_eq!(updated.dark, Hsb::new(300.0, 10.0, 20.0));
    assert_eq!(updated.base, config.base);
    assert_eq!(updated.light, config.light);
    assert!(!updated.is_hue_sync);
}

#[test]
fn test_update_does_not_touch_input() {
    let config = ColorConfiguration::default();
    let _ = update_reference(&config, Reference::Base, Hsb::new(45.0, 50.0, 50.0));
    assert_eq!(config, ColorConfiguration::default());
}

#[test]
fn test_same_hue_edit_keeps_other_references() {
    let config = ColorConfiguration::default();
    let updated = update_reference(&config, Reference::Base, Hsb::new(0.0, 70.0, 60.0));
    assert_eq!(updated.dark, config.dark);
    assert_eq!(updated.light, config.light);
}

#[test]
fn test_get_matches_fields() {
    let config = ColorConfiguration::from_base(Hsb::new(33.0, 44.0, 55.0));
    assert_eq!(config.get(Reference::Dark), config.dark);
    assert_eq!(config.get(Reference::Base), config.base);
    assert_eq!(config.get(Reference::Light), config.light);
}
