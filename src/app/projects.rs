use leptos::prelude::*;

use super::{
    cta::{CtaLink, CtaVariant},
    highlights::{HighlightList, TechTags},
};
use crate::{
    content::{Project, PROJECTS},
    motion::Reveal,
};

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div
            class="bg-card/30 border-border/50 rounded-lg border p-6 reveal-up"
            style=Reveal::staggered(index).style()
        >
            <div class="mb-4">
                <h3 class="text-foreground mb-1 text-xl font-bold">{project.title}</h3>
                <span class="text-sm text-purple-400">{project.category}</span>
            </div>

            <p class="text-muted-foreground mb-6 leading-relaxed">{project.description}</p>

            <div class="mb-6">
                <h4 class="text-foreground mb-3 text-sm font-medium">"Key Features"</h4>
                <HighlightList items=project.features noun="features" />
            </div>

            <div class="mb-6">
                <h4 class="text-foreground mb-3 text-sm font-medium">"Technologies"</h4>
                <TechTags items=project.technologies />
            </div>

            <CtaLink
                text="View Live"
                variant=CtaVariant::Outlined
                href=project.live_url
                external=true
            />
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="bg-background py-20">
            <div class="container mx-auto px-4 md:px-6">
                <div class="mb-16 text-center reveal-up" style=Reveal::new(0.0, 0.5).style()>
                    <h2 class="text-foreground mb-4 text-4xl font-black md:text-5xl">
                        "Featured "
                        <span class="bg-gradient-to-r from-purple-400 to-purple-600 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>
                    <p class="text-muted-foreground mx-auto max-w-2xl text-lg">
                        "Find out more about my expertise from the projects I have worked on."
                    </p>
                </div>

                <div class="mb-12 grid grid-cols-1 gap-8 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=*project index /> })
                        .collect_view()}
                </div>

                <div class="mt-16 text-center reveal-up" style=Reveal::new(0.8, 0.5).style()>
                    <p class="text-muted-foreground mb-6">
                        "Interested in working together on your next project?"
                    </p>
                    <CtaLink text="Start a Project" variant=CtaVariant::Filled href="#contact" />
                </div>
            </div>
        </section>
    }
}
