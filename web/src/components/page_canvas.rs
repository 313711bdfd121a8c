use leptos::prelude::*;

use super::slide_frame::SlideFrame;
use crate::viewer::use_viewer;

/// Full-size frame showing the active lesson.
///
/// The URL fragment follows the active lesson through the engine's
/// `SyncFragment` action, so nothing here touches history.
#[component]
pub fn PageCanvas() -> impl IntoView {
    let viewer = use_viewer();
    let active = viewer.active_id();

    view! {
        <main class="flex-1 overflow-hidden">
            <SlideFrame>{move || viewer.render(&active.get())}</SlideFrame>
        </main>
    }
}
