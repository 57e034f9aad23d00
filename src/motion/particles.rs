use std::fmt::Write;
use std::ops::RangeInclusive;

use rand::Rng;

use super::easing::Easing;
use super::engine::{Engine, TargetId, Track, TrackId};
use super::stage::{render_style, Property};
use super::{lock_engine, SharedEngine};

/// Bounds for the ambient particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size_px: RangeInclusive<f64>,
    pub opacity: RangeInclusive<f64>,
    /// Maximum displacement on each axis, in pixels.
    pub drift_px: RangeInclusive<f64>,
    /// Opacity each particle pulses towards.
    pub pulse_opacity: RangeInclusive<f64>,
    pub period_ms: RangeInclusive<f64>,
    pub easing: Easing,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            size_px: 1.0..=5.0,
            opacity: 0.1..=0.6,
            drift_px: -50.0..=50.0,
            pulse_opacity: 0.1..=0.7,
            period_ms: 2000.0..=5000.0,
            easing: Easing::EaseInOutSine,
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    if range.start() >= range.end() {
        *range.start()
    } else {
        rng.gen_range(range.clone())
    }
}

/// Randomized parameters of one particle, drawn once when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub id: TargetId,
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub pulse_opacity: f64,
    pub period_ms: f64,
}

impl ParticleState {
    pub fn random<R: Rng + ?Sized>(id: TargetId, config: &ParticleConfig, rng: &mut R) -> Self {
        Self {
            id,
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: pick(rng, &config.size_px),
            opacity: pick(rng, &config.opacity),
            drift_x: pick(rng, &config.drift_px),
            drift_y: pick(rng, &config.drift_px),
            pulse_opacity: pick(rng, &config.pulse_opacity),
            period_ms: pick(rng, &config.period_ms),
        }
    }

    fn tracks(&self, easing: Easing, now: f64) -> [Track; 3] {
        let track = |property, from, to| {
            Track::new(self.id, property, from, to)
                .starting_at(now)
                .lasting(self.period_ms)
                .eased(easing)
                .looping(true)
        };
        [
            track(Property::TranslateX, 0.0, self.drift_x),
            track(Property::TranslateY, 0.0, self.drift_y),
            track(Property::Opacity, self.opacity, self.pulse_opacity),
        ]
    }

    fn at_rest(&self) -> ParticleFrame {
        ParticleFrame {
            id: self.id,
            left_pct: self.left_pct,
            top_pct: self.top_pct,
            size_px: self.size_px,
            opacity: self.opacity,
            dx: 0.0,
            dy: 0.0,
        }
    }
}

/// Where a particle is drawn on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub id: TargetId,
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub dx: f64,
    pub dy: f64,
}

impl ParticleFrame {
    pub fn style(&self) -> String {
        let mut style = String::new();
        let _ = write!(
            style,
            "left: {}%; top: {}%; width: {}px; height: {}px; ",
            self.left_pct, self.top_pct, self.size_px, self.size_px
        );
        style.push_str(&render_style(&[
            (Property::Opacity, self.opacity),
            (Property::TranslateX, self.dx),
            (Property::TranslateY, self.dy),
        ]));
        style
    }
}

/// Owns the tracks of a batch of particles.
///
/// Dropping the field cancels every track it started, so a section that goes away
/// leaves nothing running in its engine.
#[derive(Debug)]
pub struct ParticleField {
    engine: SharedEngine,
    particles: Vec<ParticleState>,
    tracks: Vec<TrackId>,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(
        engine: SharedEngine,
        config: &ParticleConfig,
        rng: &mut R,
        now: f64,
    ) -> Self {
        let particles = (0..config.count)
            .map(|i| ParticleState::random(TargetId(i as u32), config, rng))
            .collect::<Vec<_>>();
        let tracks = {
            let mut engine = lock_engine(&engine);
            particles
                .iter()
                .flat_map(|p| p.tracks(config.easing, now))
                .map(|track| engine.play(track))
                .collect::<Vec<_>>()
        };
        log::debug!(
            "spawned {} particles with {} tracks",
            particles.len(),
            tracks.len()
        );
        Self {
            engine,
            particles,
            tracks,
        }
    }

    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Frames built from the values `engine` last sampled.
    ///
    /// Takes the engine by reference because callers already hold its lock while
    /// sampling the rest of their section.
    pub fn frames(&self, engine: &Engine) -> Vec<ParticleFrame> {
        self.particles
            .iter()
            .map(|p| {
                let rest = p.at_rest();
                ParticleFrame {
                    opacity: engine.value(p.id, Property::Opacity).unwrap_or(rest.opacity),
                    dx: engine.value(p.id, Property::TranslateX).unwrap_or(rest.dx),
                    dy: engine.value(p.id, Property::TranslateY).unwrap_or(rest.dy),
                    ..rest
                }
            })
            .collect()
    }

    /// Samples the engine at `now` and returns the resulting frames.
    pub fn frame(&self, now: f64) -> Vec<ParticleFrame> {
        let mut engine = lock_engine(&self.engine);
        engine.sample(now);
        self.frames(&engine)
    }
}

impl Drop for ParticleField {
    fn drop(&mut self) {
        let mut engine = lock_engine(&self.engine);
        let released = self
            .tracks
            .drain(..)
            .filter(|id| engine.cancel(*id))
            .count();
        log::debug!("released {released} particle tracks");
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::motion::shared_engine;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x6d65_6368_61)
    }

    #[test]
    fn test_random_state_within_bounds() {
        let config = ParticleConfig::default();
        let mut rng = rng();
        for i in 0..500 {
            let p = ParticleState::random(TargetId(i), &config, &mut rng);
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!(config.size_px.contains(&p.size_px));
            assert!(config.opacity.contains(&p.opacity));
            assert!(config.drift_px.contains(&p.drift_x));
            assert!(config.drift_px.contains(&p.drift_y));
            assert!(config.pulse_opacity.contains(&p.pulse_opacity));
            assert!(config.period_ms.contains(&p.period_ms));
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = ParticleConfig {
            size_px: 3.0..=3.0,
            period_ms: 9.0..=1.0,
            ..ParticleConfig::default()
        };
        let p = ParticleState::random(TargetId(0), &config, &mut rng());
        assert_eq!(p.size_px, 3.0);
        assert_eq!(p.period_ms, 9.0);
    }

    #[test]
    fn test_spawn_count_and_teardown() {
        let engine = shared_engine();
        let field = ParticleField::spawn(engine.clone(), &ParticleConfig::default(), &mut rng(), 0.0);
        assert_eq!(field.len(), 50);
        assert_eq!(lock_engine(&engine).active_tracks(), 150);

        drop(field);
        assert_eq!(lock_engine(&engine).active_tracks(), 0);
    }

    #[test]
    fn test_teardown_leaves_other_tracks() {
        let engine = shared_engine();
        let other = lock_engine(&engine).play(
            Track::new(TargetId(999), Property::Opacity, 0.0, 1.0).lasting(10.0),
        );
        let config = ParticleConfig {
            count: 4,
            ..ParticleConfig::default()
        };
        drop(ParticleField::spawn(engine.clone(), &config, &mut rng(), 0.0));
        let engine = lock_engine(&engine);
        assert_eq!(engine.active_tracks(), 1);
        assert!(engine.is_active(other));
    }

    #[test]
    fn test_parameters_fixed_per_particle() {
        let engine = shared_engine();
        let field = ParticleField::spawn(engine, &ParticleConfig::default(), &mut rng(), 0.0);
        let p = field.particles()[0].clone();
        // same phase of two different cycles of the same direction lands on the same spot
        let a = field.frame(p.period_ms * 0.25);
        let b = field.frame(p.period_ms * 2.25);
        assert!((a[0].dx - b[0].dx).abs() < 1e-6);
        assert!((a[0].dy - b[0].dy).abs() < 1e-6);
        // and the alternate cycle mirrors it
        let c = field.frame(p.period_ms * 1.75);
        assert!((a[0].dx - c[0].dx).abs() < 1e-6);
    }

    #[test]
    fn test_frames_start_at_rest() {
        let engine = shared_engine();
        let field = ParticleField::spawn(engine, &ParticleConfig::default(), &mut rng(), 100.0);
        let frames = field.frame(100.0);
        assert_eq!(frames.len(), 50);
        for (frame, p) in frames.iter().zip(field.particles()) {
            assert_eq!(frame.dx, 0.0);
            assert_eq!(frame.dy, 0.0);
            assert_eq!(frame.opacity, p.opacity);
        }
        let style = frames[0].style();
        assert!(style.starts_with("left: "));
        assert!(style.contains("transform: translate3d(0px, 0px, 0) scale(1);"));
    }
}
