use leptos::prelude::*;

use crate::portfolio::AiSkill;

/// Badges circle a shared track; each one is offset by an equal share of the
/// orbit so they pass through the centre glow in turn.
#[component]
pub fn AiSkills(skills: Vec<AiSkill>) -> impl IntoView {
    let count = skills.len().max(1);

    view! {
        <section class="flex flex-col lg:flex-row justify-between items-center gap-12 mb-24">
            <h2 class="glow-text text-5xl md:text-6xl xl:text-7xl font-bold leading-tight text-center lg:text-left">
                "AI Skills"
                <br />
                "I Have Mastered"
            </h2>
            <div class="flex flex-col items-center gap-4">
                <div class="orbit-stage">
                    <div class="orbit-track" aria-hidden="true"></div>
                    <div class="orbit-center" aria-hidden="true"></div>
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let delay = format!("animation-delay: -{:.2}s", orbit_offset(i, count));
                            view! {
                                <div class="orbit-body" style=delay.clone()>
                                    <div class="glass-card glass-circle" style=delay.clone()>
                                        {skill.label}
                                        {skill.accent.map(|a| view! { <span class="text-accent">{a}</span> })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm font-bold text-white/80 text-center">
                    "ML & DL cycle animation (they meet at the center)"
                </p>
            </div>
        </section>
    }
}

static ORBIT_SECONDS: f64 = 2.6;

fn orbit_offset(index: usize, count: usize) -> f64 {
    ORBIT_SECONDS * index as f64 / count as f64
}
