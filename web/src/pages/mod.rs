pub mod canvas;
pub mod course;

use coursedeck_app::{Layout, Message};
use leptos::prelude::*;

use crate::viewer::use_viewer;

/// Report `layout` to the engine while the calling page is mounted.
fn track_layout(layout: Layout) {
    let viewer = use_viewer();
    Effect::new(move || viewer.dispatch(Message::LayoutMounted(layout)));
    on_cleanup(move || viewer.dispatch(Message::LayoutUnmounted(layout)));
}
