use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};

use super::reveal::{stage_style, use_reveal};
use super::SectionHeading;
use crate::content::{SkillCategory, EXPERTISE, SKILL_CATEGORIES};
use crate::motion::{
    lock_engine, presets::*, render_style, shared_engine, ObserverOptions, Property, TargetId,
};

#[component]
pub fn Skills() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());
    let engine = StoredValue::new(shared_engine());

    // one bar per skill, numbered across all categories so the stagger runs page-wide
    let levels = SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| f64::from(s.level)))
        .collect::<Vec<_>>();
    let widths = StoredValue::new(
        levels
            .iter()
            .map(|_| RwSignal::new(0.0_f64))
            .collect::<Vec<_>>(),
    );
    let levels = StoredValue::new(levels);
    let started = StoredValue::new(false);
    let settled = RwSignal::new(false);

    let bars = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let now = args.timestamp;
            let shared = engine.get_value();
            let mut engine = lock_engine(&shared);
            if !started.get_value() {
                levels.with_value(|levels| {
                    for (i, level) in levels.iter().enumerate() {
                        engine.play_to(TargetId(i as u32), Property::Width, *level, &SKILL_BAR, i, now);
                    }
                });
                started.set_value(true);
            }
            widths.with_value(|widths| {
                for sample in engine.sample(now) {
                    if let Some(width) = widths.get(sample.target.0 as usize) {
                        width.set(sample.value);
                    }
                }
            });
            if engine.is_idle(now) {
                settled.set(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    let resume = bars.resume;
    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible {
                resume();
            }
        },
        true,
    );
    let pause = bars.pause;
    Effect::watch(
        move || settled.get(),
        move |settled, _, _| {
            if *settled {
                log::debug!("skill bars settled");
                pause();
            }
        },
        false,
    );

    let mut offset = 0;
    let cards = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let first_bar = offset;
            offset += category.skills.len();
            view! {
                <div style=stage_style(&RISE, visible, i)>
                    <SkillCard category first_bar widths=widths.get_value() />
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-20 bg-mecha-primary relative overflow-hidden">
            <div class="container mx-auto px-4">
                <SectionHeading lead="TECH" accent=" SKILLS" visible />
                <div node_ref=target class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {cards}
                </div>
                <div class="mt-16 text-center" style=stage_style(&FADE_IN_LATE, visible, 0)>
                    <h3 class="text-2xl font-orbitron text-mecha-glow mb-6">"Additional Expertise"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {EXPERTISE
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-4 py-2 bg-mecha-secondary border border-mecha-glow/30 rounded-full font-exo text-sm hover:scale-110 hover:bg-mecha-accent hover:text-mecha-primary transition-all duration-200">
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    category: &'static SkillCategory,
    first_bar: usize,
    widths: Vec<RwSignal<f64>>,
) -> impl IntoView {
    view! {
        <div class="bg-mecha-secondary rounded-xl p-6 border border-mecha-glow/20 hover:border-mecha-accent hover:-translate-y-2.5 transition-all duration-300">
            <h3 class="text-2xl font-orbitron text-mecha-glow mb-6 text-center">
                {category.name}
            </h3>
            <div class="space-y-4">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let width = widths.get(first_bar + i).copied();
                        view! {
                            <div>
                                <div class="flex justify-between mb-2">
                                    <span class="font-exo text-white">{skill.name}</span>
                                    <span class="font-exo text-mecha-accent">
                                        {format!("{}%", skill.level)}
                                    </span>
                                </div>
                                <div class="h-2 bg-mecha-primary rounded-full overflow-hidden">
                                    <div
                                        class="h-full bg-gradient-to-r from-mecha-accent to-mecha-glow rounded-full"
                                        style=move || {
                                            let w = width.map(|w| w.get()).unwrap_or_default();
                                            render_style(&[(Property::Width, w)])
                                        }
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
