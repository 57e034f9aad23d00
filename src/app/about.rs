use leptos::{html, prelude::*};

use super::reveal::{stage_style, use_reveal};
use super::SectionHeading;
use crate::content::STATS;
use crate::motion::{presets::RISE, ObserverOptions};

#[component]
pub fn About() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());

    view! {
        <section id="about" class="py-20 bg-mecha-secondary relative overflow-hidden">
            <div class="container mx-auto px-4" node_ref=target>
                <SectionHeading lead="ABOUT" accent=" ME" visible />
                <div class="flex flex-col lg:flex-row items-center gap-12">
                    <div class="lg:w-1/2" style=stage_style(&RISE, visible, 0)>
                        <AvatarBadge />
                    </div>
                    <div class="lg:w-1/2" style=stage_style(&RISE, visible, 1)>
                        <h3 class="text-2xl font-orbitron text-mecha-glow mb-6">
                            "The Mind Behind the Machine"
                        </h3>
                        <p class="text-lg font-exo mb-6 leading-relaxed">
                            "I am a passionate developer with a futuristic vision, blending cutting-edge technology with elegant design. My approach combines the precision of engineering with the creativity of art to build digital experiences that feel both advanced and intuitive."
                        </p>
                        <p class="text-lg font-exo mb-6 leading-relaxed">
                            "With expertise in modern web technologies and a fascination for robotics and AI, I create solutions that push boundaries while maintaining flawless functionality and user experience."
                        </p>
                        <div class="grid grid-cols-2 gap-4 mt-8">
                            {STATS
                                .iter()
                                .enumerate()
                                .map(|(i, stat)| {
                                    view! {
                                        // the stats follow the two columns in the same stagger
                                        <div style=stage_style(&RISE, visible, i + 2)>
                                            <div class="text-center p-4 border border-mecha-glow/30 rounded-lg bg-mecha-primary/50 hover:scale-105 hover:border-mecha-accent transition-all duration-200">
                                                <div class="text-2xl font-orbitron text-mecha-accent">
                                                    {stat.value}
                                                </div>
                                                <div class="text-sm font-exo mt-1">{stat.label}</div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AvatarBadge() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="w-80 h-80 mx-auto bg-mecha-accent/20 rounded-full flex items-center justify-center animate-float">
                <div class="w-64 h-64 bg-mecha-glow/20 rounded-full flex items-center justify-center">
                    <div class="w-48 h-48 bg-mecha-primary border-4 border-mecha-accent rounded-full flex items-center justify-center overflow-hidden">
                        <div class="text-center p-4">
                            <div class="w-24 h-24 mx-auto mb-4 bg-gradient-to-br from-mecha-accent to-mecha-glow rounded-full flex items-center justify-center">
                                <span class="text-4xl font-orbitron">"🤖"</span>
                            </div>
                            <h3 class="font-orbitron text-mecha-accent">"MECHA DEV"</h3>
                            <p class="text-xs font-exo mt-2">"AI & Robotics Enthusiast"</p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="absolute -inset-4 border-2 border-mecha-glow/30 rounded-full animate-pulse"></div>
        </div>
    }
}
