use coursedeck_app::Message;
use coursedeck_core::slide_scale;
use leptos::ev;
use leptos::prelude::*;

use super::icons::{Maximize2, Minimize2, Move};
use crate::host::client_point;
use crate::viewer::use_viewer;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameVariant {
    /// Movable, resizable frame; geometry is persisted
    #[default]
    Full,
    /// Fixed-size, non-interactive preview
    Thumb,
}

/// Frames 1280x800 lesson content, scaled uniformly to fit.
#[component]
pub fn SlideFrame(
    children: Children,
    #[prop(optional)] variant: FrameVariant,
) -> impl IntoView {
    match variant {
        FrameVariant::Full => view! { <FullFrame>{children()}</FullFrame> }.into_any(),
        FrameVariant::Thumb => view! { <ThumbFrame>{children()}</ThumbFrame> }.into_any(),
    }
}

#[component]
fn ThumbFrame(children: Children) -> impl IntoView {
    let viewer = use_viewer();
    let size = viewer.with(|s| s.settings.thumbnail.size());
    let style = format!("width: {}px; height: {}px;", size.width, size.height);
    let content_style = format!(
        "width: 1280px; height: 800px; transform: scale({});",
        slide_scale(size)
    );

    view! {
        <div
            class="relative overflow-hidden rounded-2xl border border-[color:var(--ring)] bg-black/20"
            style=style
            aria-hidden="true"
        >
            <div class="origin-top-left" style=content_style>
                <div class="w-[1280px] h-[800px]">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn FullFrame(children: Children) -> impl IntoView {
    let viewer = use_viewer();
    let geometry = move || viewer.with(|s| s.frame.geometry());
    let gesture_active = move || viewer.with(|s| s.frame.is_active());

    let frame_style = move || {
        let geometry = geometry();
        let transition = if gesture_active() { "none" } else { "transform 0.2s ease-out" };
        format!(
            "width: {}px; height: {}px; transform: translate({}px, {}px); transition: {};",
            geometry.size.width,
            geometry.size.height,
            geometry.position.x,
            geometry.position.y,
            transition
        )
    };
    let content_style = move || format!("transform: scale({});", slide_scale(geometry().size));

    let start_drag = move |ev: ev::PointerEvent| {
        ev.prevent_default();
        viewer.dispatch(Message::FrameDragStart(client_point(&ev)));
    };
    let start_resize = move |ev: ev::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        viewer.dispatch(Message::FrameResizeStart(client_point(&ev)));
    };

    view! {
        <div class="w-full h-full flex items-center justify-center relative">
            <div
                class="relative bg-black/20 rounded-3xl border border-[color:var(--ring)] shadow-glow overflow-hidden group"
                style=frame_style
            >
                // Drag handle
                <div
                    class="absolute top-2 left-2 right-2 h-8 bg-black/40 rounded-lg opacity-0 group-hover:opacity-100 transition-opacity cursor-grab active:cursor-grabbing flex items-center justify-between px-3 z-10"
                    on:pointerdown=start_drag
                >
                    <div class="flex items-center gap-2 text-xs text-white/60">
                        <Move class="w-3.5 h-3.5" />
                        <span>"Drag to move"</span>
                    </div>
                    <button
                        class="p-1 hover:bg-white/10 rounded transition-colors"
                        title="Reset position and size"
                        on:pointerdown=|ev| ev.stop_propagation()
                        on:click=move |_| viewer.dispatch(Message::FrameReset)
                    >
                        <Minimize2 class="w-3 h-3" />
                    </button>
                </div>

                <div class="absolute inset-0 overflow-hidden">
                    <div class="w-[1280px] h-[800px] origin-top-left" style=content_style>
                        <div class="w-[1280px] h-[800px]">{children()}</div>
                    </div>
                </div>

                // Resize handle
                <div
                    class="absolute bottom-2 right-2 w-6 h-6 bg-black/40 rounded opacity-0 group-hover:opacity-100 transition-opacity cursor-nw-resize flex items-center justify-center z-10"
                    title="Drag to resize"
                    on:pointerdown=start_resize
                >
                    <Maximize2 class="w-3 h-3 text-white/60" />
                </div>

                <div class="absolute top-2 left-2 w-2 h-2 bg-white/20 rounded-full opacity-0 group-hover:opacity-100 transition-opacity"></div>
                <div class="absolute top-2 right-2 w-2 h-2 bg-white/20 rounded-full opacity-0 group-hover:opacity-100 transition-opacity"></div>
                <div class="absolute bottom-2 left-2 w-2 h-2 bg-white/20 rounded-full opacity-0 group-hover:opacity-100 transition-opacity"></div>
            </div>
        </div>
    }
}
