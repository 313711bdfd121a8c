//! Course interface: lesson list, learning toolbar, zoomable content,
//! auto-advance banner and notes.

mod lesson_list;
mod notes;
mod toolbar;

use coursedeck_app::Message;
use coursedeck_core::viewport_content_scale;
use leptos::ev;
use leptos::prelude::*;

use crate::components::icons::{BookOpen, X};
use crate::host::viewport_size;
use crate::viewer::use_viewer;
use lesson_list::LessonList;
use notes::NotesPanel;
use toolbar::LearningToolbar;

#[component]
pub fn CourseInterface() -> impl IntoView {
    let viewer = use_viewer();
    let fullscreen = move || viewer.with(|s| s.course.fullscreen);
    let list_open = move || viewer.with(|s| s.course.list_pane.is_open());
    let notes_open = move || viewer.with(|s| s.course.notes_open);

    view! {
        <div class=move || {
            if fullscreen() {
                "flex h-screen bg-[color:var(--bg)] fixed inset-0 z-50"
            } else {
                "flex h-screen bg-[color:var(--bg)]"
            }
        }>
            <Show when=list_open>
                <LessonList />
            </Show>

            <div class="flex-1 flex flex-col min-w-0">
                <LearningToolbar />
                <div class="flex-1 flex min-h-0">
                    <LessonContent />
                    <Show when=notes_open>
                        <NotesPanel />
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Active lesson scaled to the viewport, plus the zoom transform.
#[component]
fn LessonContent() -> impl IntoView {
    let viewer = use_viewer();
    let active = viewer.active_id();

    let content_scale = RwSignal::new(viewport_content_scale(viewport_size()));
    let resize = window_event_listener(ev::resize, move |_| {
        content_scale.set(viewport_content_scale(viewport_size()));
    });
    on_cleanup(move || resize.remove());

    let playing = move || viewer.with(|s| s.course.auto_advance.is_playing());
    let remaining = move || viewer.with(|s| s.course.auto_advance.remaining_secs());
    let study_mode = move || viewer.with(|s| s.course.study_mode);

    let card_style = move || {
        format!(
            "transform: scale({}); width: 85%; max-width: 1200px; aspect-ratio: 16/10; transition: transform 0.2s ease-out;",
            viewer.with(|s| s.course.zoom.value())
        )
    };

    view! {
        <div class="flex-1 overflow-hidden bg-[radial-gradient(1000px_600px_at_70%_-10%,rgba(255,255,255,0.05),transparent)] relative">
            <div class="absolute inset-0 flex items-center justify-center">
                <div
                    class="relative bg-black/20 rounded-3xl border border-[color:var(--ring)] shadow-glow overflow-hidden"
                    style=card_style
                >
                    <div class="w-full h-full overflow-hidden">
                        <div
                            class="origin-top-left w-[1280px] h-[800px]"
                            style=move || format!("transform: scale({});", content_scale.get())
                        >
                            {move || viewer.render(&active.get())}
                        </div>
                    </div>
                </div>
            </div>

            <Show when=playing>
                <div class="absolute bottom-4 left-1/2 -translate-x-1/2 bg-blue-500 text-white px-4 py-2 rounded-lg shadow-lg">
                    <div class="flex items-center gap-3">
                        <div class="w-2 h-2 bg-white rounded-full animate-pulse"></div>
                        <span class="text-sm">{move || format!("Next lesson in {}s", remaining())}</span>
                        <button
                            class="text-white/80 hover:text-white"
                            title="Stop auto-advance"
                            on:click=move |_| viewer.dispatch(Message::PlayPause)
                        >
                            <X class="w-3.5 h-3.5" />
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=study_mode>
                <div class="absolute top-4 right-4 bg-black/80 text-white px-3 py-2 rounded-lg">
                    <div class="flex items-center gap-2">
                        <BookOpen class="w-4 h-4" />
                        <span class="text-sm">"Study Mode"</span>
                    </div>
                </div>
            </Show>
        </div>
    }
}
