use leptos::prelude::*;
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};
use rand::{rngs::SmallRng, SeedableRng};

use super::reveal::{stage_style, use_entered};
use crate::motion::{
    lock_engine, presets::*, render_style, shared_engine, ParticleConfig, ParticleField,
    ParticleFrame, Property, StageName, TargetId,
};

// Particles take ids from 0, keep the title clear of them
const TITLE: TargetId = TargetId(u32::MAX);

#[component]
pub fn Hero() -> impl IntoView {
    let engine = StoredValue::new(shared_engine());
    let field = StoredValue::new(None::<ParticleField>);
    let particles = RwSignal::new(Vec::<RwSignal<String>>::new());
    let title_style = RwSignal::new(HERO_TITLE.style(StageName::Hidden, 0));
    let entered = use_entered();
    // frame callbacks run without a reactive owner, so particle cells are created under this one
    let owner = Owner::current().unwrap_or_else(Owner::new);

    let _ = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let now = args.timestamp;
            let shared = engine.get_value();
            // start on the first frame so the timeline shares the frame clock
            if field.with_value(|f| f.is_none()) {
                lock_engine(&shared).play_stage(&HERO_TITLE, StageName::Visible, &[TITLE], now);
                let mut rng = SmallRng::from_entropy();
                let spawned = ParticleField::spawn(shared.clone(), &ParticleConfig::default(), &mut rng, now);
                let frames = spawned.frames(&lock_engine(&shared));
                particles.set(particle_styles(&owner, &frames));
                field.set_value(Some(spawned));
            }

            let mut engine = lock_engine(&shared);
            engine.sample(now);
            let title = [Property::Opacity, Property::TranslateY]
                .into_iter()
                .filter_map(|p| engine.value(TITLE, p).map(|v| (p, v)))
                .collect::<Vec<_>>();
            if !title.is_empty() {
                let next = render_style(&title);
                if title_style.with_untracked(|s| *s != next) {
                    title_style.set(next);
                }
            }
            field.with_value(|f| {
                if let Some(f) = f {
                    particles.with_untracked(|styles| {
                        for (frame, style) in f.frames(&engine).iter().zip(styles) {
                            style.set(frame.style());
                        }
                    });
                }
            });
        },
        UseRafFnOptions::default(),
    );

    on_cleanup(move || {
        // dropping the field cancels its tracks
        let released = field.try_update_value(Option::take).flatten();
        if let Some(released) = released {
            log::debug!("tearing down {} hero particles", released.len());
        }
    });

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            <div class="container mx-auto px-4 text-center z-10">
                <h1
                    class="text-5xl md:text-7xl lg:text-8xl font-orbitron font-black mb-6"
                    style=move || title_style.get()
                >
                    <span class="text-white">"MECHA"</span>
                    <span class="text-mecha-accent">"DEV"</span>
                </h1>
                <p
                    class="text-xl md:text-2xl font-exo text-mecha-glow mb-8 max-w-2xl mx-auto"
                    style=stage_style(&HERO_SUBTITLE, entered, 0)
                >
                    "Engineering the Future with Code and Creativity"
                </p>
                <div
                    class="flex flex-col sm:flex-row gap-4 justify-center"
                    style=stage_style(&HERO_ACTIONS, entered, 0)
                >
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-mecha-accent text-mecha-primary font-orbitron font-bold rounded-lg hover:bg-mecha-glow hover:scale-105 active:scale-95 hover:shadow-[0_0_20px_#00ff9d] transition-all"
                    >
                        "EXPLORE MY WORK"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 border-2 border-mecha-glow text-mecha-glow font-orbitron font-bold rounded-lg hover:bg-mecha-glow hover:text-mecha-primary hover:scale-105 active:scale-95 hover:shadow-[0_0_20px_#00d4ff] transition-all"
                    >
                        "CONTACT ME"
                    </a>
                </div>
            </div>
            <div class="absolute inset-0 pointer-events-none">
                {move || {
                    particles
                        .get()
                        .into_iter()
                        .map(|style| {
                            view! {
                                <div
                                    class="absolute rounded-full bg-mecha-glow"
                                    style=move || style.get()
                                ></div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <CircuitGrid />
        </section>
    }
}

/// One style cell per particle, disposed together with `owner`.
fn particle_styles(owner: &Owner, frames: &[ParticleFrame]) -> Vec<RwSignal<String>> {
    owner.with(|| frames.iter().map(|f| RwSignal::new(f.style())).collect())
}

#[component]
fn CircuitGrid() -> impl IntoView {
    view! {
        <div class="absolute inset-0 opacity-10 pointer-events-none">
            <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="grid" width="50" height="50" patternUnits="userSpaceOnUse">
                        <path d="M 50 0 L 0 0 0 50" fill="none" stroke="#00ff9d" stroke-width="1" />
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#grid)" />
            </svg>
        </div>
    }
}
