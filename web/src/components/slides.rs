//! Lesson content, laid out at 1280x800 and scaled by the frame around it.

use leptos::prelude::*;

#[component]
fn SlideShell(
    eyebrow: &'static str,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="w-[1280px] h-[800px] p-16 flex flex-col bg-gradient-to-br from-slate-900 to-slate-950 text-slate-200">
            <span class="text-sm uppercase tracking-[0.3em] text-blue-400">{eyebrow}</span>
            <h2 class="mt-3 text-5xl font-bold text-white">{title}</h2>
            <div class="mt-12 flex-1">{children()}</div>
        </div>
    }
}

#[component]
fn Placeholder(label: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("rounded-xl border-2 border-dashed border-slate-600 flex items-center justify-center text-slate-500 text-lg {class}")>
            {label}
        </div>
    }
}

#[component]
pub fn OverviewSlide() -> impl IntoView {
    view! {
        <SlideShell eyebrow="Lesson 1" title="What a wireframe is for">
            <div class="grid grid-cols-2 gap-12 h-full">
                <ul class="space-y-6 text-2xl text-slate-300">
                    <li>"A skeleton of the page: layout, hierarchy, content slots"</li>
                    <li>"Deliberately low fidelity, so feedback stays on structure"</li>
                    <li>"Cheap to change before any visual design exists"</li>
                    <li>"A shared reference for designers, developers and stakeholders"</li>
                </ul>
                <div class="flex flex-col gap-4">
                    <Placeholder label="Header / navigation" class="h-16" />
                    <Placeholder label="Hero" class="h-40" />
                    <div class="grid grid-cols-3 gap-4">
                        <Placeholder label="Card" class="h-32" />
                        <Placeholder label="Card" class="h-32" />
                        <Placeholder label="Card" class="h-32" />
                    </div>
                    <Placeholder label="Footer" class="h-14" />
                </div>
            </div>
        </SlideShell>
    }
}

#[component]
pub fn GoalsSlide() -> impl IntoView {
    let findings = [
        ("62%", "of visitors arrive on mobile"),
        ("3.4", "pages per session on average"),
        ("48s", "median time to find pricing"),
    ];

    view! {
        <SlideShell eyebrow="Lesson 2" title="Goals before boxes">
            <div class="grid grid-cols-3 gap-8">
                {findings
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="p-8 rounded-2xl bg-slate-800/60 border border-slate-700">
                                <div class="text-6xl font-bold text-white">{value}</div>
                                <div class="mt-3 text-xl text-slate-400">{label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-12 grid grid-cols-2 gap-8 text-xl">
                <div>
                    <h3 class="text-2xl font-semibold text-white mb-4">"Business goals"</h3>
                    <p class="text-slate-400">"Increase demo requests and shorten the path to pricing."</p>
                </div>
                <div>
                    <h3 class="text-2xl font-semibold text-white mb-4">"User needs"</h3>
                    <p class="text-slate-400">"Compare plans quickly and trust what they read."</p>
                </div>
            </div>
        </SlideShell>
    }
}

#[component]
pub fn ArchitectureSlide() -> impl IntoView {
    let sections = [
        ("Home", &["Overview", "Highlights"][..]),
        ("Product", &["Features", "Integrations", "Security"][..]),
        ("Pricing", &["Plans", "FAQ"][..]),
        ("Resources", &["Blog", "Guides", "Support"][..]),
    ];

    view! {
        <SlideShell eyebrow="Lesson 3" title="Mapping the site structure">
            <div class="flex flex-col items-center">
                <div class="px-10 py-4 rounded-xl bg-blue-500/20 border border-blue-400 text-2xl text-white">
                    "Site root"
                </div>
                <div class="w-px h-10 bg-slate-600"></div>
                <div class="grid grid-cols-4 gap-8 w-full">
                    {sections
                        .into_iter()
                        .map(|(section, pages)| {
                            view! {
                                <div class="flex flex-col items-center gap-3">
                                    <div class="w-full py-3 text-center rounded-lg bg-slate-800 border border-slate-600 text-xl text-white">
                                        {section}
                                    </div>
                                    {pages
                                        .iter()
                                        .map(|page| {
                                            view! {
                                                <div class="w-4/5 py-2 text-center rounded-md border border-dashed border-slate-600 text-slate-400">
                                                    {*page}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </SlideShell>
    }
}

#[component]
pub fn SketchingSlide() -> impl IntoView {
    view! {
        <SlideShell eyebrow="Lesson 4" title="From sketch to low fidelity">
            <div class="grid grid-cols-3 gap-10 h-full">
                {["Crazy eights", "Pick and refine", "Low-fi wireframe"]
                    .into_iter()
                    .enumerate()
                    .map(|(step, label)| {
                        view! {
                            <div class="flex flex-col gap-4">
                                <div class="text-xl text-slate-300">
                                    <span class="text-blue-400 font-mono mr-2">{format!("0{}", step + 1)}</span>
                                    {label}
                                </div>
                                <div class="flex-1 p-4 rounded-2xl bg-slate-800/40 border border-slate-700 flex flex-col gap-3">
                                    <Placeholder label="Nav" class="h-10" />
                                    <Placeholder label="Content" class="flex-1" />
                                    <Placeholder label="CTA" class="h-12" />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SlideShell>
    }
}
