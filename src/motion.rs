//! Framework independent animation pieces.
//!
//! Sections describe their entrance animations as plain [`StageDescriptor`] data,
//! latch their viewport state with a [`VisibilityLatch`], and hand timed work to an
//! [`Engine`] which is sampled with whatever clock the caller has (in the browser,
//! the `requestAnimationFrame` timestamp).

mod easing;
mod engine;
mod particles;
mod stage;
mod visibility;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use easing::Easing;
pub use engine::{Engine, Repeat, Sample, TargetId, Track, TrackId};
pub use particles::{ParticleConfig, ParticleField, ParticleFrame, ParticleState};
pub use stage::{presets, render_style, Property, Stage, StageDescriptor, StageName, Transition};
pub use visibility::{FallbackPolicy, ObserverOptions, VisibilityLatch, VisibilityState};

/// An engine owned by one section and shared with its frame loop.
pub type SharedEngine = Arc<Mutex<Engine>>;

pub fn shared_engine() -> SharedEngine {
    Arc::new(Mutex::new(Engine::new()))
}

/// Locks a shared engine, recovering the inner value if a previous holder panicked.
pub fn lock_engine(engine: &SharedEngine) -> MutexGuard<'_, Engine> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}
