use coursedeck_app::Layout;
use leptos::prelude::*;
use leptos_router::components::A;

use super::track_layout;
use crate::components::icons::Film;
use crate::components::page_canvas::PageCanvas;
use crate::components::thumbnail_sidebar::ThumbnailSidebar;

#[component]
pub fn CanvasPage() -> impl IntoView {
    track_layout(Layout::Canvas);

    view! {
        <div class="flex h-screen bg-gray-50">
            <ThumbnailSidebar />
            <PageCanvas />
            <A
                href="/course"
                attr:class="fixed top-4 right-4 z-40 btn bg-black/60 text-white"
            >
                <Film class="w-4 h-4" />
                <span>"Course view"</span>
            </A>
        </div>
    }
}
