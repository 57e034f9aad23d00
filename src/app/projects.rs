use leptos::{html, prelude::*};

use super::reveal::{stage_style, use_remount_reveal, use_reveal};
use super::SectionHeading;
use crate::content::{filter_projects, Project, ProjectFilter, PROJECTS};
use crate::motion::{
    presets::{CARD_RISE, FADE_IN_SHORT},
    ObserverOptions,
};

const ACTIVE_FILTER: &str = "bg-mecha-accent text-mecha-primary";
const IDLE_FILTER: &str =
    "bg-mecha-secondary text-white border border-mecha-glow/30 hover:border-mecha-accent";

const ICON_LINK: &str = "text-gray-400 hover:text-mecha-accent transition-colors";
const GITHUB_ICON: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";

#[component]
pub fn Projects() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());
    let (active, set_active) = signal(ProjectFilter::default());

    view! {
        <section id="projects" class="py-20 bg-mecha-primary relative overflow-hidden">
            <div class="container mx-auto px-4">
                <SectionHeading lead="RECENT" accent=" PROJECTS" visible />
                <div node_ref=target>
                    <div
                        class="flex flex-wrap justify-center gap-4 mb-12"
                        style=stage_style(&FADE_IN_SHORT, visible, 0)
                    >
                        {ProjectFilter::ALL
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <button
                                        class=move || {
                                            let state = if active.get() == filter {
                                                ACTIVE_FILTER
                                            } else {
                                                IDLE_FILTER
                                            };
                                            format!("px-6 py-2 rounded-full font-orbitron transition-all {state}")
                                        }
                                        data-filter=filter.key()
                                        on:click=move |_| {
                                            log::debug!("project filter: {filter}");
                                            set_active.set(filter);
                                        }
                                    >
                                        {filter.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {move || {
                            // each filter change mounts a fresh grid that replays its entrance
                            let shown = use_remount_reveal(visible);
                            filter_projects(PROJECTS, active.get())
                                .into_iter()
                                .enumerate()
                                .map(|(i, project)| {
                                    view! {
                                        <div style=stage_style(&CARD_RISE, shown, i)>
                                            <ProjectCard project />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-mecha-secondary rounded-xl overflow-hidden border border-mecha-glow/20 hover:border-mecha-accent hover:-translate-y-2.5 transition-all duration-300 group">
            <div class="h-48 bg-gradient-to-br from-mecha-accent/20 to-mecha-glow/20 relative overflow-hidden">
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-6xl">"🤖"</span>
                </div>
                <div class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                    <a
                        href=project.link
                        class="px-6 py-2 bg-mecha-accent text-mecha-primary font-orbitron rounded-lg hover:scale-105 active:scale-95 transition-transform"
                    >
                        "View Project"
                    </a>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-orbitron text-white mb-2">{project.title}</h3>
                <p class="font-exo text-gray-300 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-mecha-primary text-mecha-glow rounded-full text-xs font-exo">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-between items-center">
                    <a
                        href=project.link
                        class="text-mecha-accent font-exo inline-flex items-center hover:text-mecha-glow hover:translate-x-1 transition-all"
                    >
                        "Learn More"
                        <svg class="w-4 h-4 ml-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M14 5l7 7m0 0l-7 7m7-7H3"
                            />
                        </svg>
                    </a>
                    <div class="flex space-x-2">
                        <a
                            href=project.link
                            aria-label=format!("{} source", project.title)
                            class=ICON_LINK
                        >
                            <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24">
                                <path d=GITHUB_ICON />
                            </svg>
                        </a>
                        <a
                            href=project.link
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=format!("Open {}", project.title)
                            class=ICON_LINK
                        >
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"
                                />
                            </svg>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_footer_links() {
        let owner = Owner::new();
        let project = &PROJECTS[0];
        let html = owner.with(|| view! { <ProjectCard project /> }.to_html());
        assert!(html.contains(&format!("aria-label=\"{} source\"", project.title)));
        assert!(html.contains(&format!("aria-label=\"Open {}\"", project.title)));
        assert!(html.contains(GITHUB_ICON));
        assert_eq!(html.matches(&format!("href=\"{}\"", project.link)).count(), 4);
        owner.cleanup();
    }
}
