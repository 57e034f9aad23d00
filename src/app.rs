mod about;
mod contact;
mod hero;
mod projects;
mod reveal;
mod skills;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use hero::Hero;
use projects::Projects;
use reveal::stage_style;
use skills::Skills;
use timeline::EducationExperience;

use crate::content::SECTIONS;
use crate::motion::presets::HEADING;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Exo+2:wght@300;400;600&family=Orbitron:wght@400;700;900&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/mecha-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-mecha-primary text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="MechaDev - Portfolio" />
        <Meta
            name="description"
            content="Portfolio of a developer engineering the future with code and creativity."
        />

        <Router>
            <Navigation />
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Navigation() -> impl IntoView {
    let (open, set_open) = signal(false);

    let links = move |class: &'static str| {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                view! {
                    <a
                        href=format!("#{id}")
                        class=class
                        on:click=move |_| set_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-mecha-primary/80 backdrop-blur-sm border-b border-mecha-glow/20">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a href="#home" class="text-2xl font-orbitron font-bold">
                    <span class="text-white">"MECHA"</span>
                    <span class="text-mecha-accent">"DEV"</span>
                </a>
                <div class="hidden md:flex gap-8">
                    {links("font-exo text-white hover:text-mecha-accent transition-colors")}
                </div>
                <button
                    class="md:hidden text-mecha-glow text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="md:hidden flex flex-col gap-4 px-4 pb-4">
                    {links("font-exo text-white hover:text-mecha-accent transition-colors")}
                </div>
            </Show>
        </nav>
    }
}

/// Heading shared by every section below the hero.
#[component]
fn SectionHeading(lead: &'static str, accent: &'static str, visible: Signal<bool>) -> impl IntoView {
    view! {
        <h2
            class="text-4xl md:text-5xl font-orbitron font-bold text-center mb-16"
            style=stage_style(&HEADING, visible, 0)
        >
            <span class="text-white">{lead}</span>
            <span class="text-mecha-accent">{accent}</span>
        </h2>
    }
}

/// Renders the single page, section by section.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Skills />
        <EducationExperience />
        <Projects />
        <Contact />
    }
}
