use leptos::prelude::*;

use crate::portfolio::ImageRef;

#[component]
pub fn Hero(
    title: String,
    owner: String,
    role: String,
    about: String,
    skills: Vec<String>,
    profile: ImageRef,
) -> impl IntoView {
    view! {
        <section class="flex flex-col lg:flex-row justify-between items-center gap-12 mb-24 text-center lg:text-right">
            <div class="max-w-3xl">
                <h1 class="glow-text text-6xl md:text-8xl xl:text-9xl font-bold mb-5">{title}</h1>
                <div class="glow-text text-5xl md:text-6xl xl:text-7xl font-bold mb-6">
                    {owner}
                    <br />
                    <span class="text-accent">{role}</span>
                </div>
                <div class="glass-card ml-auto max-w-2xl p-6 mb-10 text-left">
                    <h3 class="glow-text text-2xl font-black mb-3">"About Me"</h3>
                    <p class="text-base md:text-lg leading-relaxed font-semibold">{about}</p>
                </div>
                <div class="flex flex-wrap justify-center lg:justify-start gap-4">
                    {skills
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <div class="glass-card px-6 py-3 text-xl md:text-2xl font-bold transition-transform hover:scale-105">
                                    {skill}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="w-full max-w-md">
                <img
                    class="w-full rounded-2xl shadow-[0_0_50px_rgba(255,255,255,0.6)]"
                    src=profile.src
                    alt=profile.alt
                />
            </div>
        </section>
    }
}
