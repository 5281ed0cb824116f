use pavlette::color::Hsb;
use pavlette::curves::{CurveConfig, CurveType};
use pavlette::generate::{GenerateConfig, generate_palette, generate_row, generate_with};
use pavlette::interpolation::ColorSpace;
use pavlette::reference::ColorConfiguration;

fn red_row() -> (Hsb, Hsb, Hsb) {
    (
        Hsb::new(0.0, 100.0, 100.0),
        Hsb::new(0.0, 50.0, 5.0),
        Hsb::new(0.0, 50.0, 100.0),
    )
}

#[test]
fn test_ramp_length_is_two_n_plus_one() {
    let (base, dark, light) = red_row();
    for n in 1..=10 {
        assert_eq!(generate_palette(base, dark, light, n).len(), 2 * n + 1);
    }
}

#[test]
fn test_middle_is_base() {
    let (base, dark, light) = red_row();
    for n in [1, 4, 7, 10] {
        let ramp = generate_palette(base, dark, light, n);
        assert_eq!(ramp[n], base);
    }
}

#[test]
fn test_two_steps() {
    let (base, dark, light) = red_row();
    let ramp = generate_palette(base, dark, light, 2);

    assert_eq!(ramp.len(), 5);
    // Full dark weight and full light weight land on the endpoints
    assert_eq!(ramp[0], dark);
    assert_eq!(ramp[2], base);
    assert_eq!(ramp[4], light);

    // Halfway mixes sit strictly between their neighbours
    assert!(ramp[1].brightness() > dark.brightness());
    assert!(ramp[1].brightness() < base.brightness());
    assert!(ramp[3].saturation() < base.saturation());
    assert!(ramp[3].saturation() > light.saturation());
}

#[test]
fn test_generation_is_deterministic() {
    let (base, dark, light) = red_row();
    let config = GenerateConfig {
        step_count: 6,
        color_space: ColorSpace::Oklch,
        curve: CurveConfig::of(CurveType::Smoothstep),
    };
    assert_eq!(
        generate_with(base, dark, light, &config),
        generate_with(base, dark, light, &config)
    );
}

#[test]
fn test_srgb_shades_brighten_toward_base() {
    let (base, dark, light) = red_row();
    let config = GenerateConfig {
        step_count: 10,
        color_space: ColorSpace::Srgb,
        curve: CurveConfig::linear(),
    };
    let ramp = generate_with(base, dark, light, &config);

    for pair in ramp[..=10].windows(2) {
        assert!(
            pair[1].brightness() > pair[0].brightness(),
            "{} should be brighter than {}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn test_row_matches_explicit_references() {
    let row = ColorConfiguration::from_base(Hsb::new(210.0, 70.0, 80.0));
    let config = GenerateConfig::with_step_count(3);
    assert_eq!(
        generate_row(&row, &config),
        generate_with(row.base, row.dark, row.light, &config)
    );
}

#[test]
fn test_identical_references_give_flat_ramp() {
    let color = Hsb::new(120.0, 40.0, 60.0);
    for space in ColorSpace::ALL {
        let config = GenerateConfig {
            step_count: 4,
            color_space: space,
            curve: CurveConfig::linear(),
        };
        for shade in generate_with(color, color, color, &config) {
            assert!(
                (shade.brightness() - color.brightness()).abs() < 0.5,
                "{:?} drifted to {}",
                space,
                shade
            );
        }
    }
}

#[test]
fn test_full_weight_is_endpoint_for_any_curve() {
    let (base, dark, light) = red_row();
    let curves = [
        CurveConfig::of(CurveType::Sigmoid),
        CurveConfig {
            curve_type: CurveType::BSpline,
            strength: 1.0,
            control_points: Some(vec![(0.0, 0.3), (1.0, 0.7)]),
        },
    ];
    for curve in curves {
        let config = GenerateConfig {
            step_count: 2,
            color_space: ColorSpace::Oklab,
            curve,
        };
        let ramp = generate_with(base, dark, light, &config);
        assert_eq!(ramp[0], dark);
        assert_eq!(ramp[4], light);
    }
}
