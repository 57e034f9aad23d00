use std::f64::consts::PI;

/// Easing curves mapping linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out, the default curve for entrance tweens.
    EaseOut,
    EaseInOutSine,
    /// Elastic ease-out. Amplitude is clamped to `[1, 10]` and period to `[0.1, 2]`.
    EaseOutElastic { amplitude: f64, period: f64 },
}

impl Easing {
    /// `easeOutElastic(1, .8)`, used by the hero title and the skill bars.
    pub const ELASTIC: Easing = Easing::EaseOutElastic {
        amplitude: 1.0,
        period: 0.8,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::EaseOutElastic { amplitude, period } => {
                let amplitude = amplitude.clamp(1.0, 10.0);
                let period = period.clamp(0.1, 2.0);
                1.0 - ease_in_elastic(1.0 - t, amplitude, period)
            }
        }
    }

    /// Closest CSS timing function, for stages rendered as CSS transitions.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0.25, 0.1, 0.25, 1)",
            Easing::EaseInOutSine => "cubic-bezier(0.37, 0, 0.63, 1)",
            // overshoot approximation, CSS has no elastic curve
            Easing::EaseOutElastic { .. } => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

fn ease_in_elastic(t: f64, amplitude: f64, period: f64) -> f64 {
    let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
    -amplitude * 2f64.powf(10.0 * (t - 1.0)) * (((t - 1.0) - shift) * 2.0 * PI / period).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOut,
        Easing::EaseInOutSine,
        Easing::ELASTIC,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.5), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn test_sine_is_symmetric() {
        let mid = Easing::EaseInOutSine.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-12);
        let a = Easing::EaseInOutSine.apply(0.25);
        let b = Easing::EaseInOutSine.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let v = Easing::EaseOut.apply(step as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_elastic_overshoots_then_settles() {
        // 1 - easeIn(0.7) with amplitude 1 and period 0.8 is 1 + 0.125 * sin(pi / 4)
        let v = Easing::ELASTIC.apply(0.3);
        assert!((v - (1.0 + 0.125 * (PI / 4.0).sin())).abs() < 1e-9);
        assert!(v > 1.0);
        let late = Easing::ELASTIC.apply(0.95);
        assert!((late - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_elastic_parameters_are_clamped() {
        let wild = Easing::EaseOutElastic {
            amplitude: 0.0,
            period: 50.0,
        };
        let clamped = Easing::EaseOutElastic {
            amplitude: 1.0,
            period: 2.0,
        };
        for step in 0..=10 {
            let t = step as f64 / 10.0;
            assert_eq!(wild.apply(t), clamped.apply(t));
        }
    }
}
