use leptos::prelude::*;

use super::highlights::{HighlightList, TechTags};
use crate::{
    content::{ExperienceItem, EXPERIENCES},
    motion::Reveal,
};

#[component]
fn ExperienceCard(experience: ExperienceItem, index: usize) -> impl IntoView {
    view! {
        <div class="relative reveal-up" style=Reveal::staggered(index).style()>
            // timeline dot
            <div class="border-background absolute top-6 -left-0.5 size-5 rounded-full border-4 bg-purple-500"></div>

            <div class="ml-8 pb-12">
                <div class="bg-card/30 border-border/50 rounded-lg border p-6">
                    <div class="mb-4">
                        <div class="mb-2 flex items-start justify-between">
                            <h3 class="text-foreground text-xl font-bold">{experience.title}</h3>
                            <span class="ml-4 text-sm whitespace-nowrap text-purple-400">
                                {experience.period}
                            </span>
                        </div>
                        <p class="text-muted-foreground text-sm">{experience.organization}</p>
                    </div>

                    <p class="text-muted-foreground mb-6 leading-relaxed">
                        {experience.description}
                    </p>

                    <div class="mb-6">
                        <h4 class="text-foreground mb-3 text-sm font-medium">"Key Highlights"</h4>
                        <HighlightList items=experience.highlights noun="highlights" />
                    </div>

                    {experience
                        .technologies
                        .map(|items| {
                            view! {
                                <div>
                                    <h4 class="text-foreground mb-3 text-sm font-medium">
                                        "Technologies"
                                    </h4>
                                    <TechTags items />
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="bg-background py-20">
            <div class="container mx-auto px-4 md:px-6">
                <div class="mb-16 text-center reveal-up" style=Reveal::new(0.0, 0.5).style()>
                    <h2 class="text-foreground mb-4 text-4xl font-black md:text-5xl">"Experience"</h2>
                    <p class="text-muted-foreground mx-auto max-w-2xl text-lg">
                        "My journey from student to professional developer."
                    </p>
                </div>

                <div class="relative mx-auto max-w-3xl">
                    // vertical timeline
                    <div class="bg-border absolute top-0 bottom-12 left-2 w-px"></div>
                    <div class="space-y-0">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, experience)| {
                                view! { <ExperienceCard experience=*experience index /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
