use std::collections::{BTreeMap, HashMap};

use super::easing::Easing;
use super::stage::{Property, StageDescriptor, StageName, Transition};

/// Identifies one animated element within an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

/// One interpolation of one property on one target.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub target: TargetId,
    pub property: Property,
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Reverse direction on every other cycle.
    pub alternate: bool,
}

impl Track {
    pub fn new(target: TargetId, property: Property, from: f64, to: f64) -> Self {
        Self {
            target,
            property,
            from,
            to,
            start_ms: 0.0,
            duration_ms: 0.0,
            easing: Easing::Linear,
            repeat: Repeat::Once,
            alternate: false,
        }
    }

    pub fn starting_at(mut self, start_ms: f64) -> Self {
        self.start_ms = start_ms;
        self
    }

    pub fn lasting(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn looping(mut self, alternate: bool) -> Self {
        self.repeat = Repeat::Forever;
        self.alternate = alternate;
        self
    }

    pub fn value_at(&self, now: f64) -> f64 {
        let elapsed = now - self.start_ms;
        if elapsed <= 0.0 {
            return self.from;
        }
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = elapsed / self.duration_ms;
        let phase = match self.repeat {
            Repeat::Once => progress.min(1.0),
            Repeat::Forever => {
                let cycle = progress.floor();
                let phase = progress - cycle;
                if self.alternate && (cycle as u64) % 2 == 1 {
                    1.0 - phase
                } else {
                    phase
                }
            }
        };
        self.from + (self.to - self.from) * self.easing.apply(phase)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        match self.repeat {
            Repeat::Once => now >= self.start_ms + self.duration_ms.max(0.0),
            Repeat::Forever => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub target: TargetId,
    pub property: Property,
    pub value: f64,
}

/// Plays [`Track`]s and reports their values for a given time.
///
/// At most one track drives a (target, property) pair. Playing a new track on a
/// pair replaces the old one, starting from whatever value the old one had.
#[derive(Debug, Default)]
pub struct Engine {
    next_id: u64,
    tracks: BTreeMap<TrackId, Track>,
    current: HashMap<(TargetId, Property), f64>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, track: Track) -> TrackId {
        let superseded = self
            .tracks
            .iter()
            .filter(|(_, t)| t.target == track.target && t.property == track.property)
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        for id in superseded {
            self.tracks.remove(&id);
        }
        let id = TrackId(self.next_id);
        self.next_id += 1;
        self.tracks.insert(id, track);
        id
    }

    /// Animates one property to `to`, as the child at `index` of a staggered group.
    pub fn play_to(
        &mut self,
        target: TargetId,
        property: Property,
        to: f64,
        transition: &Transition,
        index: usize,
        now: f64,
    ) -> TrackId {
        let from = self
            .current_value(target, property, now)
            .unwrap_or_else(|| property.resting());
        self.play(
            Track::new(target, property, from, to)
                .starting_at(now + transition.start_offset(index))
                .lasting(transition.duration_ms)
                .eased(transition.easing),
        )
    }

    /// Enters `name` on every target, staggering by index.
    ///
    /// Targets that were never animated start from the other stage's values.
    pub fn play_stage(
        &mut self,
        descriptor: &StageDescriptor,
        name: StageName,
        targets: &[TargetId],
        now: f64,
    ) -> Vec<TrackId> {
        let stage = descriptor.stage(name);
        let origin = descriptor.stage(name.opposite());
        let mut ids = Vec::with_capacity(targets.len() * stage.props.len());
        for (index, target) in targets.iter().enumerate() {
            let start = now + stage.start_offset(index);
            for (property, to) in stage.props {
                let from = self
                    .current_value(*target, *property, now)
                    .or_else(|| origin.value(*property))
                    .unwrap_or_else(|| property.resting());
                let track = Track::new(*target, *property, from, *to)
                    .starting_at(start)
                    .lasting(stage.transition.duration_ms)
                    .eased(stage.transition.easing);
                ids.push(self.play(track));
            }
        }
        ids
    }

    pub fn cancel(&mut self, id: TrackId) -> bool {
        self.tracks.remove(&id).is_some()
    }

    pub fn cancel_target(&mut self, target: TargetId) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|_, t| t.target != target);
        before - self.tracks.len()
    }

    /// Computes every track at `now` and retires the ones that finished.
    pub fn sample(&mut self, now: f64) -> Vec<Sample> {
        let samples = self
            .tracks
            .values()
            .map(|t| Sample {
                target: t.target,
                property: t.property,
                value: t.value_at(now),
            })
            .collect::<Vec<_>>();
        for s in &samples {
            self.current.insert((s.target, s.property), s.value);
        }
        self.tracks.retain(|_, t| !t.is_finished(now));
        samples
    }

    /// Last sampled value.
    pub fn value(&self, target: TargetId, property: Property) -> Option<f64> {
        self.current.get(&(target, property)).copied()
    }

    fn current_value(&self, target: TargetId, property: Property, now: f64) -> Option<f64> {
        self.tracks
            .values()
            .find(|t| t.target == target && t.property == property)
            .map(|t| t.value_at(now))
            .or_else(|| self.value(target, property))
    }

    pub fn is_idle(&self, now: f64) -> bool {
        self.tracks.values().all(|t| t.is_finished(now))
    }

    pub fn active_tracks(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_active(&self, id: TrackId) -> bool {
        self.tracks.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::presets::{HEADING, RISE, SKILL_BAR};

    fn targets(n: u32) -> Vec<TargetId> {
        (0..n).map(TargetId).collect()
    }

    #[test]
    fn test_linear_track() {
        let track = Track::new(TargetId(0), Property::Opacity, 0.0, 1.0)
            .starting_at(100.0)
            .lasting(200.0);
        assert_eq!(track.value_at(0.0), 0.0);
        assert_eq!(track.value_at(100.0), 0.0);
        assert_eq!(track.value_at(200.0), 0.5);
        assert_eq!(track.value_at(300.0), 1.0);
        assert_eq!(track.value_at(10_000.0), 1.0);
        assert!(!track.is_finished(299.0));
        assert!(track.is_finished(300.0));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let track = Track::new(TargetId(0), Property::Width, 0.0, 80.0).starting_at(10.0);
        assert_eq!(track.value_at(5.0), 0.0);
        assert_eq!(track.value_at(10.5), 80.0);
    }

    #[test]
    fn test_alternating_loop() {
        let track = Track::new(TargetId(0), Property::TranslateX, 0.0, 40.0)
            .lasting(1000.0)
            .looping(true);
        assert_eq!(track.value_at(250.0), 10.0);
        assert_eq!(track.value_at(1000.0), 40.0);
        assert_eq!(track.value_at(1250.0), 30.0);
        assert_eq!(track.value_at(2250.0), 10.0);
        assert!(!track.is_finished(1.0e9));

        let forward = Track::new(TargetId(0), Property::TranslateX, 0.0, 40.0)
            .lasting(1000.0)
            .looping(false);
        assert_eq!(forward.value_at(1250.0), 10.0);
    }

    #[test]
    fn test_stagger_start_times() {
        let mut engine = Engine::new();
        let ids = engine.play_stage(&RISE, StageName::Visible, &targets(5), 1000.0);
        assert_eq!(ids.len(), 10);
        for (index, target) in targets(5).into_iter().enumerate() {
            let starts = engine
                .tracks
                .values()
                .filter(|t| t.target == target)
                .map(|t| t.start_ms)
                .collect::<Vec<_>>();
            assert_eq!(starts.len(), 2);
            for start in starts {
                assert_eq!(start, 1000.0 + index as f64 * 200.0);
            }
        }
    }

    #[test]
    fn test_stage_starts_from_opposite_stage() {
        let mut engine = Engine::new();
        engine.play_stage(&HEADING, StageName::Visible, &[TargetId(7)], 0.0);
        engine.sample(0.0);
        assert_eq!(engine.value(TargetId(7), Property::Opacity), Some(0.0));
        assert_eq!(engine.value(TargetId(7), Property::TranslateY), Some(50.0));
        engine.sample(600.0);
        assert_eq!(engine.value(TargetId(7), Property::Opacity), Some(1.0));
        assert_eq!(engine.value(TargetId(7), Property::TranslateY), Some(0.0));
        assert!(engine.is_idle(600.0));
        assert_eq!(engine.active_tracks(), 0);
    }

    #[test]
    fn test_empty_stage_is_immediately_idle() {
        let mut engine = Engine::new();
        let ids = engine.play_stage(&RISE, StageName::Visible, &[], 0.0);
        assert!(ids.is_empty());
        assert!(engine.is_idle(0.0));
        assert!(engine.sample(0.0).is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut engine = Engine::new();
        let first = engine.play(
            Track::new(TargetId(1), Property::Width, 0.0, 100.0).lasting(1000.0),
        );
        engine.sample(500.0);
        assert_eq!(engine.value(TargetId(1), Property::Width), Some(50.0));

        let second = engine.play_to(
            TargetId(1),
            Property::Width,
            0.0,
            &Transition::tween(100.0).eased(Easing::Linear),
            0,
            500.0,
        );
        assert!(!engine.is_active(first));
        assert!(engine.is_active(second));
        assert_eq!(engine.active_tracks(), 1);

        // picks up from the superseded track's value, not its origin
        let samples = engine.sample(550.0);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value, 25.0);
        engine.sample(600.0);
        assert_eq!(engine.value(TargetId(1), Property::Width), Some(0.0));
    }

    #[test]
    fn test_supersede_before_start_keeps_origin() {
        let mut engine = Engine::new();
        engine.play_to(TargetId(2), Property::Width, 80.0, &SKILL_BAR, 4, 0.0);
        // still waiting out its 400ms stagger
        let id = engine.play_to(TargetId(2), Property::Width, 60.0, &SKILL_BAR, 0, 100.0);
        let track = engine.tracks.get(&id).cloned();
        assert_eq!(track.map(|t| t.from), Some(0.0));
    }

    #[test]
    fn test_cancel() {
        let mut engine = Engine::new();
        let ids = engine.play_stage(&RISE, StageName::Visible, &targets(3), 0.0);
        assert!(engine.cancel(ids[0]));
        assert!(!engine.cancel(ids[0]));
        assert_eq!(engine.cancel_target(TargetId(2)), 2);
        assert_eq!(engine.active_tracks(), 3);
    }

    #[test]
    fn test_loops_never_idle() {
        let mut engine = Engine::new();
        engine.play(
            Track::new(TargetId(0), Property::Opacity, 0.1, 0.7)
                .lasting(2000.0)
                .looping(true),
        );
        engine.sample(1.0e7);
        assert!(!engine.is_idle(1.0e7));
        assert_eq!(engine.active_tracks(), 1);
    }
}
