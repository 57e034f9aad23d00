use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{ObserverOptions, StageDescriptor, StageName, VisibilityLatch};

/// Latches whether `target` has scrolled into view.
///
/// The observer is stopped as soon as a trigger-once latch fires. When the browser
/// has no `IntersectionObserver` the latch's fallback policy decides instead.
pub fn use_reveal(target: NodeRef<html::Div>, options: ObserverOptions) -> Signal<bool> {
    let latch = RwSignal::new(VisibilityLatch::new(options));

    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                record_ratio(latch, entry.intersection_ratio());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![options.threshold]),
    );

    Effect::watch(
        move || latch.with(|l| l.should_disconnect()),
        move |done, _, _| {
            if *done {
                stop();
            }
        },
        true,
    );

    Effect::new(move |_| {
        if !is_supported.get_untracked() {
            log::warn!("IntersectionObserver unavailable, applying {:?} fallback", options.fallback);
            record_unsupported(latch);
        }
    });

    Signal::derive(move || latch.with(|l| l.is_visible()))
}

// Subscribers are only notified when the visible flag flips.
fn record_ratio(latch: RwSignal<VisibilityLatch>, ratio: f64) -> bool {
    let changed = latch
        .try_update_untracked(|l| l.observe(ratio))
        .unwrap_or(false);
    if changed {
        latch.notify();
    }
    changed
}

fn record_unsupported(latch: RwSignal<VisibilityLatch>) -> bool {
    let changed = latch
        .try_update_untracked(|l| l.mark_unsupported())
        .unwrap_or(false);
    if changed {
        latch.notify();
    }
    changed
}

/// Inline style for child `index` of a section whose visibility is `visible`.
pub fn stage_style(
    descriptor: &'static StageDescriptor,
    visible: Signal<bool>,
    index: usize,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || descriptor.style(StageName::from(visible.get()), index)
}

/// Flips to true once the component has mounted in the browser.
///
/// Used for entrance animations that do not wait for the viewport. Stays false
/// during server rendering so the first paint shows the hidden stage.
pub fn use_entered() -> Signal<bool> {
    let entered = RwSignal::new(false);
    Effect::new(move |_| {
        // wait two frames so the hidden stage is painted before the transition starts
        request_animation_frame(move || {
            request_animation_frame(move || {
                let _ = entered.try_set(true);
            })
        });
    });
    entered.into()
}

/// Reveal for content that mounts after its section was already revealed.
///
/// Follows `visible`, but each mount starts hidden and enters once it is on screen,
/// so replaced children replay their entrance.
pub fn use_remount_reveal(visible: Signal<bool>) -> Signal<bool> {
    after_mount(visible, use_entered())
}

fn after_mount(visible: Signal<bool>, entered: Signal<bool>) -> Signal<bool> {
    Signal::derive(move || visible.get() && entered.get())
}
