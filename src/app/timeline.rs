use leptos::{html, prelude::*};

use super::reveal::{stage_style, use_reveal};
use super::SectionHeading;
use crate::content::{EDUCATION, EXPERIENCE};
use crate::motion::{
    presets::{SLIDE_FROM_LEFT, SLIDE_FROM_RIGHT},
    ObserverOptions, StageDescriptor,
};

struct Entry {
    title: &'static str,
    org: &'static str,
    period: &'static str,
    description: &'static str,
}

#[component]
pub fn EducationExperience() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());

    let education = EDUCATION
        .iter()
        .map(|e| Entry {
            title: e.degree,
            org: e.institution,
            period: e.period,
            description: e.description,
        })
        .collect::<Vec<_>>();
    let experience = EXPERIENCE
        .iter()
        .map(|e| Entry {
            title: e.position,
            org: e.company,
            period: e.period,
            description: e.description,
        })
        .collect::<Vec<_>>();

    view! {
        <section id="education" class="py-20 bg-mecha-secondary relative overflow-hidden">
            <div class="container mx-auto px-4">
                <SectionHeading lead="EDUCATION &" accent=" EXPERIENCE" visible />
                <div node_ref=target class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    {timeline("🎓", "Education", education, &SLIDE_FROM_LEFT, true, visible)}
                    {timeline("⚙️", "Experience", experience, &SLIDE_FROM_RIGHT, false, visible)}
                </div>
            </div>
        </section>
    }
}

fn timeline(
    icon: &'static str,
    heading: &'static str,
    entries: Vec<Entry>,
    descriptor: &'static StageDescriptor,
    accent: bool,
    visible: Signal<bool>,
) -> impl IntoView {
    let (line, dot, org, badge) = if accent {
        (
            "bg-mecha-accent/30",
            "bg-mecha-accent",
            "text-mecha-glow",
            "bg-mecha-accent/20 text-mecha-accent",
        )
    } else {
        (
            "bg-mecha-glow/30",
            "bg-mecha-glow",
            "text-mecha-accent",
            "bg-mecha-glow/20 text-mecha-glow",
        )
    };
    view! {
        <div>
            <h3 class="text-3xl font-orbitron text-mecha-glow mb-8 flex items-center">
                <span class="mr-3">{icon}</span>
                {heading}
            </h3>
            <div class="space-y-8 relative">
                <div class=format!("absolute left-6 top-0 bottom-0 w-1 {line}")></div>
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <div class="flex relative" style=stage_style(descriptor, visible, i)>
                                <div class=format!(
                                    "flex-shrink-0 w-12 h-12 rounded-full {dot} flex items-center justify-center z-10",
                                )>
                                    <div class="w-3 h-3 rounded-full bg-mecha-primary"></div>
                                </div>
                                <div class="ml-6 flex-1">
                                    <div class="bg-mecha-primary/50 p-6 rounded-xl border border-mecha-glow/20 hover:border-mecha-accent transition-all duration-300">
                                        <h4 class="text-xl font-orbitron text-white mb-1">
                                            {entry.title}
                                        </h4>
                                        <p class=format!("font-exo {org} mb-2")>{entry.org}</p>
                                        <span class=format!(
                                            "inline-block px-3 py-1 {badge} rounded-full text-sm font-exo mb-3",
                                        )>{entry.period}</span>
                                        <p class="font-exo text-gray-300">{entry.description}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
