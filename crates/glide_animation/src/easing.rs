//! Easing functions for animations
//!
//! Robert Penner's easing equations in the form popularised by tween.js.
//! Every curve maps normalized time `k` to eased progress with `f(0) = 0` and
//! `f(1) = 1`; back and elastic curves overshoot `[0, 1]` in between.
//!
//! Each family exposes its three shapes as free functions (`quad::ease_in`,
//! `quad::ease_out`, `quad::ease_in_out`, ...). [`Easing`] selects one of them
//! by value.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use glide_core::error::normalize_name;
use glide_core::{Error, Result};

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Easing {
    /// Every curve, in declaration order
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => linear(t),
            Easing::EaseInQuad => quad::ease_in(t),
            Easing::EaseOutQuad => quad::ease_out(t),
            Easing::EaseInOutQuad => quad::ease_in_out(t),
            Easing::EaseInCubic => cubic::ease_in(t),
            Easing::EaseOutCubic => cubic::ease_out(t),
            Easing::EaseInOutCubic => cubic::ease_in_out(t),
            Easing::EaseInQuart => quart::ease_in(t),
            Easing::EaseOutQuart => quart::ease_out(t),
            Easing::EaseInOutQuart => quart::ease_in_out(t),
            Easing::EaseInQuint => quint::ease_in(t),
            Easing::EaseOutQuint => quint::ease_out(t),
            Easing::EaseInOutQuint => quint::ease_in_out(t),
            Easing::EaseInSine => sine::ease_in(t),
            Easing::EaseOutSine => sine::ease_out(t),
            Easing::EaseInOutSine => sine::ease_in_out(t),
            Easing::EaseInExpo => expo::ease_in(t),
            Easing::EaseOutExpo => expo::ease_out(t),
            Easing::EaseInOutExpo => expo::ease_in_out(t),
            Easing::EaseInCirc => circ::ease_in(t),
            Easing::EaseOutCirc => circ::ease_out(t),
            Easing::EaseInOutCirc => circ::ease_in_out(t),
            Easing::EaseInBack => back::ease_in(t),
            Easing::EaseOutBack => back::ease_out(t),
            Easing::EaseInOutBack => back::ease_in_out(t),
            Easing::EaseInElastic => elastic::ease_in(t),
            Easing::EaseOutElastic => elastic::ease_out(t),
            Easing::EaseInOutElastic => elastic::ease_in_out(t),
            Easing::EaseInBounce => bounce::ease_in(t),
            Easing::EaseOutBounce => bounce::ease_out(t),
            Easing::EaseInOutBounce => bounce::ease_in_out(t),
        }
    }

    /// Canonical snake_case name, e.g. `"ease_in_out_back"`
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "ease_in_quad",
            Easing::EaseOutQuad => "ease_out_quad",
            Easing::EaseInOutQuad => "ease_in_out_quad",
            Easing::EaseInCubic => "ease_in_cubic",
            Easing::EaseOutCubic => "ease_out_cubic",
            Easing::EaseInOutCubic => "ease_in_out_cubic",
            Easing::EaseInQuart => "ease_in_quart",
            Easing::EaseOutQuart => "ease_out_quart",
            Easing::EaseInOutQuart => "ease_in_out_quart",
            Easing::EaseInQuint => "ease_in_quint",
            Easing::EaseOutQuint => "ease_out_quint",
            Easing::EaseInOutQuint => "ease_in_out_quint",
            Easing::EaseInSine => "ease_in_sine",
            Easing::EaseOutSine => "ease_out_sine",
            Easing::EaseInOutSine => "ease_in_out_sine",
            Easing::EaseInExpo => "ease_in_expo",
            Easing::EaseOutExpo => "ease_out_expo",
            Easing::EaseInOutExpo => "ease_in_out_expo",
            Easing::EaseInCirc => "ease_in_circ",
            Easing::EaseOutCirc => "ease_out_circ",
            Easing::EaseInOutCirc => "ease_in_out_circ",
            Easing::EaseInBack => "ease_in_back",
            Easing::EaseOutBack => "ease_out_back",
            Easing::EaseInOutBack => "ease_in_out_back",
            Easing::EaseInElastic => "ease_in_elastic",
            Easing::EaseOutElastic => "ease_out_elastic",
            Easing::EaseInOutElastic => "ease_in_out_elastic",
            Easing::EaseInBounce => "ease_in_bounce",
            Easing::EaseOutBounce => "ease_out_bounce",
            Easing::EaseInOutBounce => "ease_in_out_bounce",
        }
    }

    /// Whether the curve leaves `[0, 1]` somewhere inside the unit interval
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Easing::EaseInBack
                | Easing::EaseOutBack
                | Easing::EaseInOutBack
                | Easing::EaseInElastic
                | Easing::EaseOutElastic
                | Easing::EaseInOutElastic
        )
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = Error;

    /// Accepts the canonical name in any case, with or without `_`/`-`
    /// separators (`"ease_in_quad"`, `"EaseInQuad"`, `"ease-in-quad"`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_name(s);
        Easing::ALL
            .into_iter()
            .find(|curve| normalize_name(curve.name()) == wanted)
            .ok_or_else(|| Error::UnknownEasing(s.to_string()))
    }
}

/// Evaluate `curve` at normalized time `t`
#[inline]
pub fn evaluate(curve: Easing, t: f32) -> f32 {
    curve.apply(t)
}

pub fn linear(k: f32) -> f32 {
    k
}

pub mod quad {
    pub fn ease_in(k: f32) -> f32 {
        k * k
    }

    pub fn ease_out(k: f32) -> f32 {
        k * (2.0 - k)
    }

    pub fn ease_in_out(k: f32) -> f32 {
        let k = k * 2.0;
        if k < 1.0 {
            return 0.5 * k * k;
        }
        let k = k - 1.0;
        -0.5 * (k * (k - 2.0) - 1.0)
    }
}

pub mod cubic {
    pub fn ease_in(k: f32) -> f32 {
        k * k * k
    }

    pub fn ease_out(k: f32) -> f32 {
        let k = k - 1.0;
        1.0 + k * k * k
    }

    pub fn ease_in_out(k: f32) -> f32 {
        let k = k * 2.0;
        if k < 1.0 {
            return 0.5 * k * k * k;
        }
        let k = k - 2.0;
        0.5 * (k * k * k + 2.0)
    }
}

pub mod quart {
    pub fn ease_in(k: f32) -> f32 {
        k * k * k * k
    }

    pub fn ease_out(k: f32) -> f32 {
        let k = k - 1.0;
        1.0 - k * k * k * k
    }

    pub fn ease_in_out(k: f32) -> f32 {
        let k = k * 2.0;
        if k < 1.0 {
            return 0.5 * k * k * k * k;
        }
        let k = k - 2.0;
        -0.5 * (k * k * k * k - 2.0)
    }
}

pub mod quint {
    pub fn ease_in(k: f32) -> f32 {
        k * k * k * k * k
    }

    pub fn ease_out(k: f32) -> f32 {
        let k = k - 1.0;
        1.0 + k * k * k * k * k
    }

    pub fn ease_in_out(k: f32) -> f32 {
        let k = k * 2.0;
        if k < 1.0 {
            return 0.5 * k * k * k * k * k;
        }
        let k = k - 2.0;
        0.5 * (k * k * k * k * k + 2.0)
    }
}

pub mod sine {
    use super::PI;

    pub fn ease_in(k: f32) -> f32 {
        1.0 - (k * PI / 2.0).cos()
    }

    pub fn ease_out(k: f32) -> f32 {
        (k * PI / 2.0).sin()
    }

    pub fn ease_in_out(k: f32) -> f32 {
        0.5 * (1.0 - (PI * k).cos())
    }
}

pub mod expo {
    pub fn ease_in(k: f32) -> f32 {
        if k == 0.0 {
            0.0
        } else {
            1024f32.powf(k - 1.0)
        }
    }

    pub fn ease_out(k: f32) -> f32 {
        if k == 1.0 {
            1.0
        } else {
            1.0 - 2f32.powf(-10.0 * k)
        }
    }

    pub fn ease_in_out(k: f32) -> f32 {
        if k == 0.0 {
            return 0.0;
        }
        if k == 1.0 {
            return 1.0;
        }
        let k = k * 2.0;
        if k < 1.0 {
            return 0.5 * 1024f32.powf(k - 1.0);
        }
        0.5 * (2.0 - 2f32.powf(-10.0 * (k - 1.0)))
    }
}

pub mod circ {
    pub fn ease_in(k: f32) -> f32 {
        1.0 - (1.0 - k * k).sqrt()
    }

    pub fn ease_out(k: f32) -> f32 {
        let k = k - 1.0;
        (1.0 - k * k).sqrt()
    }

    pub fn ease_in_out(k: f32) -> f32 {
        let k = k * 2.0;
        if k < 1.0 {
            return -0.5 * ((1.0 - k * k).sqrt() - 1.0);
        }
        let k = k - 2.0;
        0.5 * ((1.0 - k * k).sqrt() + 1.0)
    }
}

pub mod back {
    /// Overshoot amount (~10%)
    pub const S: f32 = 1.70158;
    /// `S * 1.525`, used by the in-out variant
    pub const S2: f32 = 2.594_909_5;

    pub fn ease_in(k: f32) -> f32 {
        k * k * ((S + 1.0) * k - S)
    }

    pub fn ease_out(k: f32) -> f32 {
        let k = k - 1.0;
        k * k * ((S + 1.0) * k + S) + 1.0
    }

    pub fn ease_in_out(k: f32) -> f32 {
        let k = k * 2.0;
        if k < 1.0 {
            return 0.5 * (k * k * ((S2 + 1.0) * k - S2));
        }
        let k = k - 2.0;
        0.5 * (k * k * ((S2 + 1.0) * k + S2) + 2.0)
    }
}

pub mod elastic {
    use super::PI;

    /// Oscillation period, in units of normalized time
    pub const PERIOD: f32 = 0.4;

    #[inline]
    fn wave(k: f32) -> f32 {
        ((k - 0.1) * (2.0 * PI) / PERIOD).sin()
    }

    pub fn ease_in(k: f32) -> f32 {
        if k == 0.0 {
            return 0.0;
        }
        if k == 1.0 {
            return 1.0;
        }
        let k = k - 1.0;
        -(2f32.powf(10.0 * k) * wave(k))
    }

    pub fn ease_out(k: f32) -> f32 {
        if k == 0.0 {
            return 0.0;
        }
        if k == 1.0 {
            return 1.0;
        }
        2f32.powf(-10.0 * k) * wave(k) + 1.0
    }

    pub fn ease_in_out(k: f32) -> f32 {
        if k == 0.0 {
            return 0.0;
        }
        if k == 1.0 {
            return 1.0;
        }
        let k = k * 2.0 - 1.0;
        if k < 0.0 {
            return -0.5 * 2f32.powf(10.0 * k) * wave(k);
        }
        2f32.powf(-10.0 * k) * wave(k) * 0.5 + 1.0
    }
}

pub mod bounce {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    pub fn ease_in(k: f32) -> f32 {
        1.0 - ease_out(1.0 - k)
    }

    pub fn ease_out(k: f32) -> f32 {
        if k < 1.0 / D {
            N * k * k
        } else if k < 2.0 / D {
            let k = k - 1.5 / D;
            N * k * k + 0.75
        } else if k < 2.5 / D {
            let k = k - 2.25 / D;
            N * k * k + 0.9375
        } else {
            let k = k - 2.625 / D;
            N * k * k + 0.984375
        }
    }

    pub fn ease_in_out(k: f32) -> f32 {
        if k < 0.5 {
            ease_in(k * 2.0) * 0.5
        } else {
            ease_out(k * 2.0 - 1.0) * 0.5 + 0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn samples(n: usize) -> impl Iterator<Item = f32> {
        (0..=n).map(move |i| i as f32 / n as f32)
    }

    #[test]
    fn test_all_lists_every_curve_once() {
        for (i, a) in Easing::ALL.iter().enumerate() {
            for b in &Easing::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for curve in Easing::ALL {
            assert!(curve.apply(0.0).abs() < EPS, "{curve} at 0 = {}", curve.apply(0.0));
            assert!(
                (curve.apply(1.0) - 1.0).abs() < EPS,
                "{curve} at 1 = {}",
                curve.apply(1.0)
            );
        }
    }

    #[test]
    fn test_boundary_special_cases_are_exact() {
        for curve in [
            Easing::EaseInExpo,
            Easing::EaseOutExpo,
            Easing::EaseInOutExpo,
            Easing::EaseInElastic,
            Easing::EaseOutElastic,
            Easing::EaseInOutElastic,
        ] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve}");
            assert_eq!(curve.apply(1.0), 1.0, "{curve}");
        }
    }

    #[test]
    fn test_linear_is_identity() {
        for t in [-0.5, 0.0, 0.123, 0.5, 0.9, 1.0, 2.0] {
            assert_eq!(evaluate(Easing::Linear, t), t);
        }
    }

    #[test]
    fn test_monotonic_families_never_decrease() {
        let monotonic: [(fn(f32) -> f32, fn(f32) -> f32); 6] = [
            (quad::ease_in, quad::ease_out),
            (cubic::ease_in, cubic::ease_out),
            (quart::ease_in, quart::ease_out),
            (quint::ease_in, quint::ease_out),
            (sine::ease_in, sine::ease_out),
            (circ::ease_in, circ::ease_out),
        ];
        for (ease_in, ease_out) in monotonic {
            for f in [ease_in, ease_out] {
                let mut prev = f(0.0);
                for t in samples(1000).skip(1) {
                    let v = f(t);
                    assert!(v >= prev - 1e-6, "decreased at t={t}: {prev} -> {v}");
                    prev = v;
                }
            }
        }
    }

    #[test]
    fn test_in_out_is_continuous_at_midpoint() {
        let in_outs = [
            Easing::EaseInOutQuad,
            Easing::EaseInOutCubic,
            Easing::EaseInOutQuart,
            Easing::EaseInOutQuint,
            Easing::EaseInOutSine,
            Easing::EaseInOutExpo,
            Easing::EaseInOutBack,
            Easing::EaseInOutElastic,
            Easing::EaseInOutBounce,
        ];
        let gap = |curve: Easing, h: f32| (curve.apply(0.5 + h) - curve.apply(0.5 - h)).abs();

        for curve in in_outs {
            let mid = curve.apply(0.5);
            assert!((mid - 0.5).abs() < EPS, "{curve} at 0.5 = {mid}");
            assert!(gap(curve, 1e-5) < 1e-3, "{curve}: gap {}", gap(curve, 1e-5));
        }

        // Circ meets the join with a vertical tangent, so the gap closes like sqrt(h)
        let circ = Easing::EaseInOutCirc;
        assert!((circ.apply(0.5) - 0.5).abs() < EPS);
        assert!(gap(circ, 1e-5) < gap(circ, 1e-3));
        assert!(gap(circ, 1e-5) < 1e-2, "circ: gap {}", gap(circ, 1e-5));
    }

    #[test]
    fn test_bounce_in_mirrors_out() {
        for k in samples(200) {
            let expected = 1.0 - bounce::ease_out(1.0 - k);
            assert!((bounce::ease_in(k) - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_reference_values() {
        assert!((Easing::EaseInQuad.apply(0.5) - 0.25).abs() < EPS);
        assert!((Easing::EaseOutQuad.apply(0.5) - 0.75).abs() < EPS);
        assert!((Easing::EaseInCubic.apply(0.5) - 0.125).abs() < EPS);
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < EPS);
        assert!((Easing::EaseInQuint.apply(0.5) - 0.03125).abs() < EPS);
        assert!((Easing::EaseOutSine.apply(0.5) - std::f32::consts::FRAC_1_SQRT_2).abs() < EPS);
        assert!((Easing::EaseInExpo.apply(0.5) - 1.0 / 32.0).abs() < EPS);
        assert!((Easing::EaseOutBounce.apply(0.5) - 0.765625).abs() < EPS);
    }

    #[test]
    fn test_overshoot_curves_leave_unit_range() {
        for curve in Easing::ALL {
            let escapes = samples(500)
                .map(|t| curve.apply(t))
                .any(|v| !(-EPS..=1.0 + EPS).contains(&v));
            assert_eq!(escapes, curve.overshoots(), "{curve}");
        }
        assert!(back::ease_in(0.3) < 0.0);
        assert!(back::ease_out(0.7) > 1.0);
    }

    #[test]
    fn test_names_parse_back() {
        for curve in Easing::ALL {
            assert_eq!(curve.name().parse::<Easing>(), Ok(curve));
            assert_eq!(format!("{curve:?}").parse::<Easing>(), Ok(curve));
        }
        assert_eq!("ease-in-out-back".parse::<Easing>(), Ok(Easing::EaseInOutBack));
        assert_eq!(
            "wobble".parse::<Easing>(),
            Err(Error::UnknownEasing("wobble".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Easing::EaseInOutBack).unwrap();
        assert_eq!(json, "\"ease_in_out_back\"");
        let curve: Easing = serde_json::from_str("\"ease_out_bounce\"").unwrap();
        assert_eq!(curve, Easing::EaseOutBounce);
    }
}
