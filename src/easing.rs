// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the banner's slide transitions.
//!
//! The entry slide decelerates (`EaseOut`) and the exit slide accelerates
//! (`EaseIn`), so the banner arrives gently and leaves briskly.

/// Maps linear animation progress onto a perceptual curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Accelerating cubic curve, used for the exit slide.
    EaseIn,
    /// Decelerating cubic curve, used for the entry slide.
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Applies the curve to progress in `[0, 1]`.
    ///
    /// Input outside the unit interval is clamped, so callers may feed raw
    /// `elapsed / duration` ratios without guarding the tail end.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (2.0 - 2.0 * t).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} start");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} end");
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.apply(-0.5), 0.0, "{curve:?} below");
            assert_eq!(curve.apply(1.5), 1.0, "{curve:?} above");
        }
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn ease_in_back_loads_motion() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in CURVES {
            let mut previous = 0.0_f32;
            for step in 1..=20 {
                let value = curve.apply(step as f32 / 20.0);
                assert!(value >= previous, "{curve:?} dipped at step {step}");
                previous = value;
            }
        }
    }
}
