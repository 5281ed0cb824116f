use clap::Parser;
use pavlette::cli::Cli;
use pavlette::color::Hsb;

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("pavlette").chain(args.iter().copied()))
}

#[test]
fn test_default_collection() {
    let collection = parse(&[]).collection().unwrap();
    assert_eq!(collection.len(), 1);
    assert!(collection.rows()[0].is_hue_sync);
}

#[test]
fn test_synced_endpoint_override_takes_base_hue() {
    let collection = parse(&["--color", "red", "--dark", "#0000ff", "--light", "hsb(90, 20%, 95%)"])
        .collection()
        .unwrap();
    let row = collection.rows()[0];

    assert!(row.is_hue_sync);
    assert_eq!(row.base.hue(), 0.0);
    assert_eq!(row.dark, Hsb::new(0.0, 100.0, 100.0));
    assert_eq!(row.light, Hsb::new(0.0, 20.0, 95.0));
}

#[test]
fn test_free_endpoint_override_is_kept() {
    let collection = parse(&["--color", "red", "--dark", "#0000ff", "--no-hue-sync"])
        .collection()
        .unwrap();
    let row = collection.rows()[0];

    assert!(!row.is_hue_sync);
    assert!(row.dark.approx_eq(&Hsb::new(240.0, 100.0, 100.0)));
}

#[test]
fn test_each_color_gets_its_own_synced_endpoints() {
    let collection = parse(&["-c", "red", "-c", "#0000ff", "--dark", "hsb(120, 50%, 10%)"])
        .collection()
        .unwrap();

    for row in collection.iter() {
        assert!((row.dark.hue() - row.base.hue()).abs() < 1e-3);
        assert!((row.light.hue() - row.base.hue()).abs() < 1e-3);
    }
}

#[test]
fn test_invalid_endpoint_is_an_error() {
    assert!(parse(&["--dark", "nope"]).collection().is_err());
}
