use std::collections::BTreeMap;

use pavlette::collection::Collection;
use pavlette::color::Hsb;
use pavlette::config::Settings;
use pavlette::export::{palette_report, references_json, references_yaml, render_text};
use pavlette::reference::ColorConfiguration;
use pavlette::session::{Session, SessionEvent};

#[test]
fn test_default_references_json() {
    let json = references_json(&Session::default()).unwrap();
    insta::assert_snapshot!(json, @r#"
[
  {
    "base": "hsb(0, 100%, 100%)",
    "dark": "hsb(0, 50%, 5%)",
    "light": "hsb(0, 50%, 100%)"
  }
]
"#);
}

#[test]
fn test_references_yaml_lists_every_row() {
    let session = Session::new(
        &Settings::default(),
        Collection::from_rows(vec![
            ColorConfiguration::default(),
            ColorConfiguration::from_base(Hsb::new(200.0, 80.0, 90.0)),
        ]),
    );
    let yaml = references_yaml(&session).unwrap();
    let rows: Vec<BTreeMap<String, String>> = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["base"], "hsb(200, 80%, 90%)");
    assert_eq!(rows[1]["dark"], "hsb(200, 50%, 5%)");
    assert_eq!(rows[1]["light"], "hsb(200, 50%, 100%)");
}

#[test]
fn test_references_of_empty_session() {
    let session = Session::new(&Settings::default(), Collection::empty());
    assert_eq!(references_json(&session).unwrap(), "[]");
}

#[test]
fn test_palette_report() {
    let mut session = Session::default();
    session.apply(SessionEvent::StepCountChanged(2));

    let report = palette_report(&session);
    assert_eq!(report.step_count, 2);
    assert_eq!(report.color_space, "oklab");
    assert_eq!(report.rows.len(), 1);

    let ramp = &report.rows[0].ramp;
    assert_eq!(ramp.len(), 5);
    assert_eq!(ramp[0], "#0d0606");
    assert_eq!(ramp[2], "#ff0000");
    assert_eq!(ramp[4], "#ff8080");
}

#[test]
fn test_grey_scale_report_uses_grey_hex() {
    let mut session = Session::default();
    session.apply(SessionEvent::GreyScaleToggled(true));

    let report = palette_report(&session);
    assert!(report.grey_scale);
    assert_eq!(report.rows[0].ramp[10], "#363636");
    // Reference strings stay in color
    assert_eq!(report.rows[0].references.base, "hsb(0, 100%, 100%)");
}

#[test]
fn test_text_output() {
    let session = Session::default();
    let text = render_text(&session);

    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("  0 [sync] #0d0606 "));
    assert!(text.ends_with(" #ff8080\n"));
    assert_eq!(text.split_whitespace().count(), 2 + 21);
}
