use coursedeck_app::Message;
use coursedeck_core::format_notes;
use leptos::ev;
use leptos::html::Textarea;
use leptos::prelude::*;

use crate::components::icons::X;
use crate::viewer::use_viewer;

/// Free-text notes for the active lesson, one note per line.
#[component]
pub fn NotesPanel() -> impl IntoView {
    let viewer = use_viewer();
    let text = move || viewer.with(|s| format_notes(&s.course.progress(s.active_id()).notes));
    let textarea = NodeRef::<Textarea>::new();

    // `change` only fires on blur; commit an in-progress edit when the page hides.
    let pagehide = window_event_listener(ev::pagehide, move |_| {
        let Some(field) = textarea.get_untracked() else {
            return;
        };
        let value = field.value();
        if value != viewer.with(|s| format_notes(&s.course.progress(s.active_id()).notes)) {
            viewer.dispatch(Message::SetNotes { text: value });
        }
    });
    on_cleanup(move || pagehide.remove());

    view! {
        <aside class="w-80 shrink-0 border-l border-[color:var(--ring)] bg-[color:var(--card)] p-4 overflow-y-auto">
            <div class="flex items-center justify-between mb-4">
                <h3 class="font-medium">"Lesson Notes"</h3>
                <button class="btn p-2" on:click=move |_| viewer.dispatch(Message::ToggleNotesPanel)>
                    <X class="w-4 h-4" />
                </button>
            </div>
            <textarea
                node_ref=textarea
                class="w-full h-64 p-3 bg-[color:var(--bg)] border border-[color:var(--ring)] rounded-lg resize-none focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Take notes for this lesson..."
                prop:value=text
                on:change=move |ev| viewer.dispatch(Message::SetNotes { text: event_target_value(&ev) })
            ></textarea>
        </aside>
    }
}
