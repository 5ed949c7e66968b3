use leptos::prelude::*;

use super::cta::{CtaLink, CtaVariant};
use crate::{
    motion::{headline_letters, Reveal},
    paths::floating_paths,
};

const GREETING: &str = "Hi, my name is Ivaylo";
const MAIN_TITLE: &str = "I'm a Web Developer";
const PITCH: &str = "I specialize in building custom websites, e-commerce platforms, content management systems, and admin dashboards that give you complete control over your business.";

#[component]
fn FloatingPaths(position: i32) -> impl IntoView {
    let paths = floating_paths(position);
    view! {
        <div class="pointer-events-none absolute inset-0">
            <svg class="h-full w-full" viewBox="0 0 696 316" fill="none">
                {paths
                    .into_iter()
                    .map(|curve| {
                        view! {
                            <path
                                d=curve.d
                                pathLength="1"
                                stroke=curve.color
                                stroke-width=format!("{}px", curve.width)
                                stroke-opacity=curve.opacity.to_string()
                                class="floating-path sm:stroke-[0.8] md:stroke-[0.6]"
                                style=format!("animation-duration: {:.1}s;", curve.duration)
                            />
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="relative flex min-h-screen w-full items-center justify-center overflow-hidden bg-black">
            <div class="absolute inset-0">
                <FloatingPaths position=1 />
                <FloatingPaths position={-1} />
            </div>

            <div class="relative z-10 container mx-auto px-4 text-center md:px-6">
                <div class="container mx-auto reveal-fade" style=Reveal::new(0.0, 2.0).style()>
                    <p
                        class="mb-4 text-lg font-medium text-white sm:text-xl md:text-2xl reveal-down"
                        style=Reveal::new(0.3, 0.8).style()
                    >
                        {GREETING}
                    </p>

                    <h1 class="mb-8 text-5xl leading-[0.85] font-black tracking-tight sm:text-7xl md:text-8xl lg:text-[7rem] xl:text-[9rem]">
                        {headline_letters(MAIN_TITLE)
                            .into_iter()
                            .map(|word| {
                                view! {
                                    <span class="mr-3 inline-block last:mr-0 sm:mr-4">
                                        {word
                                            .into_iter()
                                            .map(|letter| {
                                                view! {
                                                    <span
                                                        class="letter-rise inline-block bg-gradient-to-br from-white via-purple-200 to-purple-500 bg-clip-text font-black text-transparent drop-shadow-sm"
                                                        style=format!("animation-delay: {:.2}s;", letter.delay)
                                                    >
                                                        {letter.ch.to_string()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </h1>

                    <p
                        class="mx-auto mb-12 max-w-3xl text-lg text-gray-300 sm:text-xl md:text-2xl reveal-up"
                        style=Reveal::new(1.5, 0.8).style()
                    >
                        {PITCH}
                    </p>

                    <div
                        class="flex flex-col items-center justify-center gap-4 sm:flex-row reveal-up"
                        style=Reveal::new(2.8, 0.8).style()
                    >
                        <CtaLink text="Contact Me" variant=CtaVariant::Filled href="#contact" />
                        <CtaLink text="View My Work" variant=CtaVariant::Outlined href="#projects" />
                    </div>
                </div>
            </div>
        </div>
    }
}
