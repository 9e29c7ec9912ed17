//! Easing curves
//!
//! Curves are named the way the page's motion design names them
//! (`power2.out`, `back.out(1.7)`, `expo.out`), so timing tables can be
//! written in configuration files and parsed with [`str::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Easing function applied to normalized tween progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    /// No easing (`none`)
    Linear,
    /// `power1.in`
    EaseInQuad,
    /// `power1.out`
    EaseOutQuad,
    /// `power2.in`
    EaseInCubic,
    /// `power2.out` - decelerating cubic
    #[default]
    EaseOutCubic,
    /// `power2.inOut`
    EaseInOutCubic,
    /// `expo.out` - fast start, long exponential tail
    EaseOutExpo,
    /// `back.out(s)` - overshoots the target by an amount set by `s`
    EaseOutBack(f32),
}

/// Default overshoot for `back.out`
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;

impl Easing {
    /// Map linear progress `t` (0.0 - 1.0) to eased progress
    ///
    /// Every curve maps 0 to 0 and 1 to 1. `EaseOutBack` exceeds 1 in
    /// between.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Easing::EaseOutBack(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

/// Error returned for an unknown easing name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown easing '{0}'")]
pub struct ParseEasingError(pub String);

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let easing = match name {
            "none" | "linear" => Easing::Linear,
            "power1.in" => Easing::EaseInQuad,
            "power1.out" | "power1" => Easing::EaseOutQuad,
            "power2.in" => Easing::EaseInCubic,
            "power2.out" | "power2" => Easing::EaseOutCubic,
            "power2.inOut" => Easing::EaseInOutCubic,
            "expo.out" | "expo" => Easing::EaseOutExpo,
            "back.out" | "back" => Easing::EaseOutBack(DEFAULT_OVERSHOOT),
            _ => {
                let overshoot = name
                    .strip_prefix("back.out(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .and_then(|arg| arg.trim().parse::<f32>().ok())
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| ParseEasingError(name.to_string()))?;
                Easing::EaseOutBack(overshoot)
            }
        };
        Ok(easing)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("none"),
            Easing::EaseInQuad => f.write_str("power1.in"),
            Easing::EaseOutQuad => f.write_str("power1.out"),
            Easing::EaseInCubic => f.write_str("power2.in"),
            Easing::EaseOutCubic => f.write_str("power2.out"),
            Easing::EaseInOutCubic => f.write_str("power2.inOut"),
            Easing::EaseOutExpo => f.write_str("expo.out"),
            Easing::EaseOutBack(overshoot) => write!(f, "back.out({overshoot})"),
        }
    }
}

impl TryFrom<String> for Easing {
    type Error = ParseEasingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseOutExpo,
        Easing::EaseOutBack(1.7),
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing} at 1");
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
        assert!(Easing::EaseOutExpo.apply(0.5) > Easing::EaseOutCubic.apply(0.5));
        assert!(Easing::EaseInCubic.apply(0.5) < 0.5);
    }

    #[test]
    fn test_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::EaseOutBack(1.7).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("power2.out".parse::<Easing>(), Ok(Easing::EaseOutCubic));
        assert_eq!("expo.out".parse::<Easing>(), Ok(Easing::EaseOutExpo));
        assert_eq!("none".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            "back.out(1.7)".parse::<Easing>(),
            Ok(Easing::EaseOutBack(1.7))
        );
        assert!("elastic.out".parse::<Easing>().is_err());
        assert!("back.out(x)".parse::<Easing>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for easing in ALL {
            assert_eq!(easing.to_string().parse::<Easing>(), Ok(easing));
        }
    }
}
