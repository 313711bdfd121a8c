use coursedeck_app::Message;
use coursedeck_core::{BoundaryPolicy, Direction};
use leptos::prelude::*;

use crate::components::icons::{
    BookOpen, Bookmark, CheckCircle, GraduationCap, Maximize2, Pause, Play, RotateCcw, SkipBack,
    SkipForward, Square, StickyNote, ZoomIn, ZoomOut,
};
use crate::viewer::use_viewer;

fn toggled(on: bool, active: &'static str) -> &'static str {
    if on {
        active
    } else {
        "btn"
    }
}

#[component]
pub fn LearningToolbar() -> impl IntoView {
    let viewer = use_viewer();
    let total = viewer.lesson_count();
    let index = move || viewer.with(|s| s.nav.active_index());
    let active = viewer.active_id();
    let title = move || viewer.lesson(&active.get()).title;

    let list_open = move || viewer.with(|s| s.course.list_pane.is_open());
    let auto_enabled = move || viewer.with(|s| s.course.auto_advance.is_enabled());
    let playing = move || viewer.with(|s| s.course.auto_advance.is_playing());
    let remaining = move || viewer.with(|s| s.course.auto_advance.remaining_secs());
    let completed = move || viewer.with(|s| s.course.progress(s.active_id()).completed);
    let bookmarked = move || viewer.with(|s| s.course.progress(s.active_id()).bookmarked);
    let notes_open = move || viewer.with(|s| s.course.notes_open);
    let study_mode = move || viewer.with(|s| s.course.study_mode);
    let zoom_percent = move || viewer.with(|s| s.course.zoom.percent());

    let step = move |direction: Direction| {
        viewer.dispatch(Message::CourseStep {
            direction,
            policy: BoundaryPolicy::Clamp,
        })
    };

    view! {
        <div class="flex items-center justify-between p-4 border-b border-[color:var(--ring)] bg-[color:var(--card)]">
            // Navigation and lesson info
            <div class="flex items-center gap-4">
                <Show when=move || !list_open()>
                    <button class="btn" on:click=move |_| viewer.dispatch(Message::SetLessonListOpen(true))>
                        <BookOpen class="w-4 h-4" />
                        <span>"Lessons"</span>
                    </button>
                </Show>
                <div class="text-sm">
                    <span class="text-[color:var(--sub)]">
                        {move || format!("Lesson {} of {}:", index() + 1, total)}
                    </span>
                    <span class="ml-2 font-medium">{title}</span>
                </div>
            </div>

            // Learning controls
            <div class="flex items-center gap-2">
                <button
                    class="btn"
                    title="Previous lesson"
                    disabled=move || index() == 0
                    on:click=move |_| step(Direction::Previous)
                >
                    <SkipBack class="w-4 h-4" />
                </button>
                <button
                    class=move || toggled(auto_enabled(), "btn bg-blue-500 text-white")
                    title="Auto-advance"
                    on:click=move |_| viewer.dispatch(Message::PlayPause)
                >
                    {move || {
                        if playing() {
                            view! { <Pause class="w-4 h-4" /> }.into_any()
                        } else {
                            view! { <Play class="w-4 h-4" /> }.into_any()
                        }
                    }}
                    <Show when=playing>
                        <span class="ml-1 text-xs">{move || format!("{}s", remaining())}</span>
                    </Show>
                </button>
                <Show when=auto_enabled>
                    <button
                        class="btn"
                        title="Turn off auto-advance"
                        on:click=move |_| viewer.dispatch(Message::SetAutoAdvance(false))
                    >
                        <Square class="w-4 h-4" />
                    </button>
                </Show>
                <button
                    class="btn"
                    title="Next lesson"
                    disabled=move || index() + 1 >= total
                    on:click=move |_| step(Direction::Next)
                >
                    <SkipForward class="w-4 h-4" />
                </button>

                <div class="w-px h-6 bg-[color:var(--ring)] mx-2"></div>

                <button
                    class=move || toggled(completed(), "btn bg-green-500 text-white")
                    on:click=move |_| {
                        let id = active.get_untracked();
                        viewer.dispatch(Message::MarkCompleted { id })
                    }
                >
                    <CheckCircle class="w-4 h-4" />
                    <span>"Complete"</span>
                </button>
            </div>

            // View controls
            <div class="flex items-center gap-2">
                <button
                    class=move || toggled(notes_open(), "btn bg-[color:var(--accent)]")
                    title="Notes"
                    on:click=move |_| viewer.dispatch(Message::ToggleNotesPanel)
                >
                    <StickyNote class="w-4 h-4" />
                </button>
                <button
                    class=move || toggled(bookmarked(), "btn text-yellow-500")
                    title="Bookmark"
                    on:click=move |_| {
                        let id = active.get_untracked();
                        viewer.dispatch(Message::ToggleBookmark { id })
                    }
                >
                    <Bookmark class="w-4 h-4" />
                </button>

                <div class="w-px h-6 bg-[color:var(--ring)] mx-2"></div>

                <button class="btn" title="Zoom out" on:click=move |_| viewer.dispatch(Message::ZoomOut)>
                    <ZoomOut class="w-4 h-4" />
                </button>
                <span class="text-sm text-[color:var(--sub)] min-w-[4rem] text-center">
                    {move || format!("{}%", zoom_percent())}
                </span>
                <button class="btn" title="Zoom in" on:click=move |_| viewer.dispatch(Message::ZoomIn)>
                    <ZoomIn class="w-4 h-4" />
                </button>
                <button class="btn" title="Reset zoom" on:click=move |_| viewer.dispatch(Message::ZoomReset)>
                    <RotateCcw class="w-4 h-4" />
                </button>
                <button
                    class=move || toggled(study_mode(), "btn bg-[color:var(--accent)]")
                    title="Study mode"
                    on:click=move |_| viewer.dispatch(Message::ToggleStudyMode)
                >
                    <GraduationCap class="w-4 h-4" />
                </button>
                <button class="btn" title="Fullscreen" on:click=move |_| viewer.dispatch(Message::ToggleFullscreen)>
                    <Maximize2 class="w-4 h-4" />
                </button>
            </div>
        </div>
    }
}
