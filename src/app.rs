mod contact;
mod cta;
mod experience;
mod hero;
mod highlights;
mod projects;
mod tooltip;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{self, SiteConfig, DEFAULT_TITLE, DESCRIPTION, KEYWORDS, OWNER_NAME};

use contact::Contact;
use experience::Experience;
use hero::Hero;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = SiteConfig::current();
    let person = site::person_json_ld(&config.base_url).to_string();
    let og_image = config.og_image();
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="theme-color" content="#000000" />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" href="/icon.svg" type="image/svg+xml" />
                <link rel="manifest" href="/manifest.json" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                // follow SITE_URL, server-rendered only
                <link rel="canonical" href=config.base_url.clone() />
                <meta property="og:url" content=config.base_url.clone() />
                <meta property="og:image" content=og_image.clone() />
                <meta name="twitter:image" content=og_image />
                <script type="application/ld+json" inner_html=person></script>
                <MetaTags />
            </head>
            <body class="dark font-sans antialiased">
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
        <Title formatter=|title: String| {
            if title.is_empty() { DEFAULT_TITLE.to_string() } else { format!("{title} | {OWNER_NAME}") }
        } />
        <SiteMeta />

        <Router>
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/experience") view=ExperiencePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SiteMeta() -> impl IntoView {
    view! {
        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content=KEYWORDS.join(", ") />
        <Meta name="author" content=OWNER_NAME />
        <Meta name="creator" content=OWNER_NAME />
        <Meta name="robots" content="index, follow" />
        <Meta
            name="googlebot"
            content="index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        />
        <Meta name="format-detection" content="telephone=no, address=no, email=no" />

        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="en_US" />
        <Meta property="og:title" content=DEFAULT_TITLE />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:site_name" content="Ivaylo Atanassov Portfolio" />
        <Meta property="og:image:width" content="1200" />
        <Meta property="og:image:height" content="630" />
        <Meta property="og:image:alt" content="Ivaylo Atanassov - Web Developer Portfolio" />

        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=DEFAULT_TITLE />
        <Meta name="twitter:description" content=DESCRIPTION />
        <Meta name="twitter:creator" content=site::TWITTER_HANDLE />
    }
}

/// Renders the home page of your application.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="" />
        <Hero />
        <Projects />
        <Experience />
        <Contact />
    }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <Projects />
    }
}

#[component]
fn ExperiencePage() -> impl IntoView {
    view! {
        <Title text="Experience" />
        <Experience />
    }
}

#[component]
fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <Contact />
    }
}
