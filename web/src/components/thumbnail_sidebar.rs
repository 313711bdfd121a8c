use coursedeck_app::dock::DockSide;
use coursedeck_app::Message;
use leptos::ev;
use leptos::prelude::*;

use super::icons::{ChevronLeft, ChevronRight};
use super::slide_frame::{FrameVariant, SlideFrame};
use crate::viewer::use_viewer;

/// Floating rail of lesson thumbnails, docked to either side and draggable
/// vertically.
#[component]
pub fn ThumbnailSidebar() -> impl IntoView {
    let viewer = use_viewer();
    let active = viewer.active_id();
    let side = move || viewer.with(|s| s.dock.side());

    let dock_class = move || match side() {
        DockSide::Right => "fixed z-50 top-1/2 right-6",
        DockSide::Left => "fixed z-50 top-1/2 left-6",
    };
    let dock_style = move || {
        format!(
            "transform: translateY(calc(-50% + {}px));",
            viewer.with(|s| s.dock.offset())
        )
    };

    let start_drag = move |ev: ev::PointerEvent| {
        ev.prevent_default();
        viewer.dispatch(Message::DockDragStart {
            y: f64::from(ev.client_y()),
        });
    };

    view! {
        <div class=dock_class style=dock_style role="navigation" aria-label="Thumbnail page navigator">
            <div class="card p-3 backdrop-blur-md bg-black/40 border-white/10 shadow-glow">
                <div class="flex items-center justify-between gap-2 pb-2">
                    <button
                        class="btn cursor-grab select-none"
                        aria-label="Drag sidebar vertically"
                        on:pointerdown=start_drag
                    >
                        "\u{25A4}"
                    </button>
                    <button
                        class="btn"
                        aria-label=move || match side() {
                            DockSide::Right => "Dock left",
                            DockSide::Left => "Dock right",
                        }
                        on:click=move |_| viewer.dispatch(Message::ToggleDockSide)
                    >
                        {move || match side() {
                            DockSide::Right => view! { <ChevronLeft class="w-4 h-4" /> }.into_any(),
                            DockSide::Left => view! { <ChevronRight class="w-4 h-4" /> }.into_any(),
                        }}
                    </button>
                </div>
                <div class="grid gap-2 max-h-[70vh] overflow-auto pr-1 scrollbar-thin">
                    {viewer.lessons().into_iter().map(|lesson| {
                        let id = lesson.id;
                        let selected = move || active.with(|active| active == id);
                        view! {
                            <button
                                class=move || {
                                    if selected() {
                                        "relative text-left rounded-2xl border overflow-hidden hover:brightness-110 transition ring-2 ring-white/30 border-white/40"
                                    } else {
                                        "relative text-left rounded-2xl border overflow-hidden hover:brightness-110 transition border-white/10"
                                    }
                                }
                                aria-current=move || selected().to_string()
                                aria-label=format!("Open {}", lesson.title)
                                title=lesson.tooltip()
                                on:click=move |_| viewer.dispatch(Message::SelectLesson { id: id.to_string() })
                            >
                                <SlideFrame variant=FrameVariant::Thumb>
                                    {(lesson.render)()}
                                </SlideFrame>
                                <div class="absolute bottom-0 left-0 right-0 bg-black/60 px-2 py-1 text-xs">
                                    <div class="truncate">{lesson.title}</div>
                                </div>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
