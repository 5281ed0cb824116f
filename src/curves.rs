//! Easing curves applied to mix fractions.
//!
//! A ramp step asks for "p percent of the endpoint". The curve remaps that
//! fraction before mixing, which bunches ramp steps toward the base color or
//! toward the endpoints. The linear curve leaves fractions unchanged.

use enterpolation::{Signal, bspline::BSpline};
use serde::{Deserialize, Serialize};

/// Available easing shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    #[default]
    Linear,
    /// Hermite S-curve
    Smoothstep,
    /// Perlin's fifth-order S-curve
    Smootherstep,
    SmoothStart,
    SmoothEnd,
    /// S-curve with steepness taken from `strength`
    Sigmoid,
    /// Clamped B-spline through `control_points`
    BSpline,
}

impl CurveType {
    /// Every curve type, in cycling order.
    pub const ALL: [CurveType; 7] = [
        Self::Linear,
        Self::Smoothstep,
        Self::Smootherstep,
        Self::SmoothStart,
        Self::SmoothEnd,
        Self::Sigmoid,
        Self::BSpline,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Next type that works without control points.
    pub fn next_preset(self) -> Self {
        let next = self.next();
        if next.needs_control_points() { next.next() } else { next }
    }

    /// Previous type that works without control points.
    pub fn prev_preset(self) -> Self {
        let prev = self.prev();
        if prev.needs_control_points() { prev.prev() } else { prev }
    }

    pub fn needs_control_points(self) -> bool {
        self == Self::BSpline
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Smoothstep => "Smoothstep",
            Self::Smootherstep => "Smootherstep",
            Self::SmoothStart => "Ease In",
            Self::SmoothEnd => "Ease Out",
            Self::Sigmoid => "Sigmoid",
            Self::BSpline => "B-Spline",
        }
    }
}

/// Curve selection plus its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    #[serde(rename = "type")]
    pub curve_type: CurveType,
    /// Steepness for sigmoid, 0.1-5.0
    pub strength: f32,
    /// `(t, value)` pairs for the B-spline; only the values are used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_points: Option<Vec<(f32, f32)>>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            curve_type: CurveType::Linear,
            strength: 1.0,
            control_points: None,
        }
    }
}

impl CurveConfig {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn of(curve_type: CurveType) -> Self {
        Self {
            curve_type,
            ..Self::default()
        }
    }

    pub fn is_linear(&self) -> bool {
        self.curve_type == CurveType::Linear
    }
}

/// Map `t` in 0..=1 through the configured curve.
///
/// Every curve fixes both ends: 0 maps to 0 and 1 maps to 1.
pub fn evaluate_curve(config: &CurveConfig, t: f32) -> f32 {
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mapped = match config.curve_type {
        CurveType::Linear => t,
        CurveType::Smoothstep => t * t * (3.0 - 2.0 * t),
        CurveType::Smootherstep => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        CurveType::SmoothStart => t * t,
        CurveType::SmoothEnd => 1.0 - (1.0 - t) * (1.0 - t),
        CurveType::Sigmoid => sigmoid(t, config.strength),
        CurveType::BSpline => bspline(config.control_points.as_deref(), t),
    };

    mapped.clamp(0.0, 1.0)
}

/// Logistic curve rescaled so that it passes through (0, 0) and (1, 1).
fn sigmoid(t: f32, strength: f32) -> f32 {
    let k = strength.max(0.1) * 6.0;
    let logistic = |x: f32| 1.0 / (1.0 + (-(x - 0.5) * k).exp());
    let low = logistic(0.0);
    let high = logistic(1.0);
    (logistic(t) - low) / (high - low)
}

fn bspline(points: Option<&[(f32, f32)]>, t: f32) -> f32 {
    let Some(points) = points.filter(|p| p.len() >= 2) else {
        return t;
    };

    let values = anchored_values(points);
    let degree = (values.len() - 1).min(3);

    let spline = BSpline::builder()
        .clamped()
        .elements(values)
        .equidistant::<f64>()
        .degree(degree)
        .normalized()
        .dynamic()
        .build();

    match spline {
        Ok(spline) => spline.eval(f64::from(t)) as f32,
        Err(e) => {
            tracing::debug!(error = %e, "invalid mix curve control points, using linear");
            t
        }
    }
}

/// Control values pinned to 0 at the start and 1 at the end, clamped into
/// range and made non-decreasing, so the spline stays monotonic.
fn anchored_values(points: &[(f32, f32)]) -> Vec<f64> {
    let last = points.len() - 1;
    let mut floor = 0.0_f64;
    points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            let value = match i {
                0 => 0.0,
                i if i == last => 1.0,
                _ if v.is_finite() => f64::from(*v).clamp(0.0, 1.0),
                _ => floor,
            };
            floor = floor.max(value);
            floor
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn every_curve_fixes_endpoints() {
        for curve_type in CurveType::ALL {
            let config = CurveConfig {
                curve_type,
                strength: 2.0,
                control_points: Some(vec![(0.0, 0.0), (0.5, 0.2), (1.0, 1.0)]),
            };
            assert_relative_eq!(evaluate_curve(&config, 0.0), 0.0, epsilon = 1e-4);
            assert_relative_eq!(evaluate_curve(&config, 1.0), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn cycling_visits_all_types() {
        let mut curve = CurveType::Linear;
        for _ in 0..CurveType::ALL.len() {
            curve = curve.next();
        }
        assert_eq!(curve, CurveType::Linear);
        assert_eq!(CurveType::Linear.prev(), CurveType::BSpline);
    }

    #[test]
    fn control_values_are_anchored_and_non_decreasing() {
        let values = anchored_values(&[(0.0, 0.3), (0.4, 0.9), (0.6, 0.2), (1.0, 0.7)]);
        assert_eq!(values, vec![0.0, 0.9, 0.9, 1.0]);
    }

    #[test]
    fn preset_cycle_skips_bspline() {
        assert_eq!(CurveType::Sigmoid.next_preset(), CurveType::Linear);
        assert_eq!(CurveType::Linear.prev_preset(), CurveType::Sigmoid);

        let mut curve = CurveType::Linear;
        for _ in 0..CurveType::ALL.len() {
            curve = curve.next_preset();
            assert_ne!(curve, CurveType::BSpline);
        }
    }

    #[test]
    fn bspline_without_points_is_linear() {
        let config = CurveConfig::of(CurveType::BSpline);
        assert_relative_eq!(evaluate_curve(&config, 0.3), 0.3);
    }
}
