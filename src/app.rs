mod ai_skills;
mod certificates;
mod contact;
mod hero;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{Portfolio, PORTFOLIO};
use ai_skills::AiSkills;
use certificates::Certificates;
use contact::ContactSection;
use hero::Hero;

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
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-black text-white">
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
        <Title formatter=|title| format!("{title} - Portfolio") />
        <Router>
            <main class="relative min-h-screen w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match &*PORTFOLIO {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio=portfolio.clone() /> }),
        Err(err) => {
            log::error!("{err}");
            Either::Right(
                view! {
                    <Title text="Unavailable" />
                    <p class="p-8 text-center text-red-400">"Portfolio unavailable: " {err.to_string()}</p>
                },
            )
        }
    }
}

#[component]
fn PortfolioPage(portfolio: Portfolio) -> impl IntoView {
    let Portfolio {
        title,
        owner,
        role,
        about,
        skills,
        ai_skills,
        background,
        profile,
        certificates,
        contact,
        links,
    } = portfolio;

    view! {
        <Title text=owner.clone() />
        <div
            class="page-background"
            style=format!("background-image: url('{}')", background.src)
            aria-hidden="true"
        ></div>
        <div class="relative flex flex-col min-h-screen px-6 py-12 lg:px-16 backdrop-blur-md">
            <Hero title owner=owner.clone() role about skills profile />
            <AiSkills skills=ai_skills />
            <Certificates certificates />
            <ContactSection contact links />
            <Footer owner />
        </div>
    }
}

fn build_date() -> String {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[component]
fn Footer(owner: String) -> impl IntoView {
    view! {
        <footer class="mt-24 text-center text-sm text-white/60">
            {format!("© {owner}")}
            " · "
            <span title="Build date">{build_date()}</span>
        </footer>
    }
}
