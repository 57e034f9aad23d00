use leptos::{html, prelude::*};

use super::reveal::{stage_style, use_reveal};
use super::SectionHeading;
use crate::contact::{submit_contact, ContactMessage, Field, LogSubmitter, SubmitError};
use crate::content::{CONTACT_METHODS, SOCIAL_LINKS};
use crate::motion::{
    presets::{FADE_IN_LATE, RISE},
    ObserverOptions,
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");
const INPUT_CLASS: &str = "w-full px-4 py-3 bg-mecha-secondary border border-mecha-glow/30 rounded-lg focus:border-mecha-accent focus:outline-none transition-colors font-exo text-white";

#[component]
pub fn Contact() -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_reveal(target, ObserverOptions::default());

    view! {
        <section id="contact" class="py-20 bg-mecha-secondary relative overflow-hidden">
            <div class="container mx-auto px-4">
                <SectionHeading lead="GET IN" accent=" TOUCH" visible />
                <div node_ref=target class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div style=stage_style(&RISE, visible, 0)>
                        <ContactInfo visible />
                    </div>
                    <div style=stage_style(&RISE, visible, 1)>
                        <ContactForm />
                    </div>
                </div>
                <footer
                    class="mt-16 pt-8 border-t border-mecha-glow/20 text-center"
                    style=stage_style(&FADE_IN_LATE, visible, 0)
                >
                    <p class="font-exo text-gray-400">
                        {format!("© {BUILD_YEAR} MechaDev. All systems operational.")}
                    </p>
                    <p class="font-exo text-mecha-glow/70 mt-2">
                        "Engineered with precision in Neo Tokyo"
                    </p>
                </footer>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(visible: Signal<bool>) -> impl IntoView {
    view! {
        <h3 class="text-3xl font-orbitron text-mecha-glow mb-8">"Let's Build The Future Together"</h3>
        <p class="font-exo text-lg mb-8 text-gray-300">
            "Have a project in mind or want to discuss the possibilities of AI and robotics? I'm always excited to collaborate on innovative projects that push technological boundaries."
        </p>
        <div class="space-y-6 mb-8">
            {CONTACT_METHODS
                .iter()
                .enumerate()
                .map(|(i, method)| {
                    view! {
                        <a
                            href=method.link
                            class="flex items-center p-4 bg-mecha-primary/50 rounded-xl border border-mecha-glow/20 hover:border-mecha-accent hover:translate-x-2.5 transition-all duration-300 group"
                            style=stage_style(&RISE, visible, i + 1)
                        >
                            <span class="text-2xl mr-4">{method.icon}</span>
                            <div>
                                <h4 class="font-orbitron text-white group-hover:text-mecha-accent transition-colors">
                                    {method.title}
                                </h4>
                                <p class="font-exo text-mecha-glow">{method.value}</p>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </div>
        <div>
            <h4 class="font-orbitron text-mecha-glow mb-4">"Follow My Journey"</h4>
            <div class="flex space-x-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.url
                                aria-label=social.name
                                class=format!(
                                    "w-12 h-12 rounded-full bg-mecha-primary border border-mecha-glow/30 flex items-center justify-center text-xl hover:scale-125 hover:rotate-6 active:scale-90 transition-all {}",
                                    social.hover,
                                )
                            >
                                {social.icon}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactMessage::default());
    let (error, set_error) = signal(None::<SubmitError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(res) = form.try_update(|f| submit_contact(f, &LogSubmitter)) else {
            return;
        };
        match res {
            Ok(ack) => {
                set_error.set(None);
                log::debug!("acknowledged at {}", ack.received_at);
                if let Err(e) = window().alert_with_message(&ack.message) {
                    log::warn!("couldn't show acknowledgment: {e:?}");
                }
            }
            Err(e) => {
                log::warn!("contact form rejected: {e}");
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <form
            on:submit=on_submit
            class="bg-mecha-primary/50 p-8 rounded-xl border border-mecha-glow/20"
        >
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                <FormInput form field=Field::Name label="Your Name" placeholder="Enter your name" />
                <FormInput
                    form
                    field=Field::Email
                    label="Your Email"
                    placeholder="Enter your email"
                    input_type="email"
                />
            </div>
            <div class="mb-6">
                <FormInput
                    form
                    field=Field::Subject
                    label="Subject"
                    placeholder="What is this regarding?"
                />
            </div>
            <div class="mb-6">
                <label for="message" class="block font-exo text-mecha-glow mb-2">
                    "Your Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    required
                    rows="5"
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Describe your project or inquiry..."
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! { <p class="mb-4 font-exo text-red-400" role="alert">{e.to_string()}</p> }
                    })
            }}
            <button
                type="submit"
                class="w-full py-4 bg-gradient-to-r from-mecha-accent to-mecha-glow text-mecha-primary font-orbitron font-bold rounded-lg hover:scale-[1.02] active:scale-[0.98] hover:shadow-[0_0_30px_rgba(0,255,157,0.5)] transition-all"
            >
                "SEND MESSAGE"
            </button>
        </form>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactMessage>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.id() class="block font-exo text-mecha-glow mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=field.id()
                name=field.id()
                required
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
