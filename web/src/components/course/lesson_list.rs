use coursedeck_app::course::ListViewMode;
use coursedeck_app::Message;
use coursedeck_core::LessonDescriptor;
use leptos::ev;
use leptos::prelude::*;

use crate::components::icons::{BookOpen, Bookmark, CheckCircle, Clock, List, StickyNote, X};
use crate::data::Slide;
use crate::viewer::use_viewer;

/// Resizable pane with course progress and one entry per lesson.
#[component]
pub fn LessonList() -> impl IntoView {
    let viewer = use_viewer();
    let ids: Vec<&'static str> = viewer.lessons().iter().map(|lesson| lesson.id).collect();

    let completion = Memo::new(move |_| viewer.with(|s| s.course.completion(ids.iter().copied())));
    let width = move || viewer.with(|s| s.course.list_pane.width());
    let view_mode = move || viewer.with(|s| s.course.view_mode);

    let mode_class = move |mode: ListViewMode| {
        move || {
            if view_mode() == mode {
                "btn flex-1 bg-[color:var(--accent)]"
            } else {
                "btn flex-1"
            }
        }
    };

    let start_resize = move |ev: ev::PointerEvent| {
        ev.prevent_default();
        viewer.dispatch(Message::ListResizeStart {
            x: f64::from(ev.client_x()),
        });
    };

    view! {
        <div
            class="relative border-r border-[color:var(--ring)] bg-[color:var(--card)] flex flex-col shrink-0"
            style=move || format!("width: {}px;", width())
        >
            // Course header
            <div class="p-4 border-b border-[color:var(--ring)]">
                <div class="flex items-center justify-between mb-3">
                    <h1 class="text-lg font-semibold">"Website Wireframes Course"</h1>
                    <button
                        class="btn p-2"
                        aria-label="Close lesson list"
                        on:click=move |_| viewer.dispatch(Message::SetLessonListOpen(false))
                    >
                        <X class="w-4 h-4" />
                    </button>
                </div>
                <div class="space-y-2">
                    <div class="flex items-center justify-between text-sm">
                        <span class="text-[color:var(--sub)]">"Progress"</span>
                        <span class="font-medium">
                            {move || {
                                let (completed, total, _) = completion.get();
                                format!("{completed}/{total} lessons")
                            }}
                        </span>
                    </div>
                    <div class="w-full bg-[color:var(--ring)] rounded-full h-2">
                        <div
                            class="bg-green-500 h-2 rounded-full transition-all duration-500"
                            style=move || format!("width: {}%;", completion.get().2)
                        ></div>
                    </div>
                    <div class="text-xs text-[color:var(--sub)]">
                        {move || format!("{}% complete", completion.get().2)}
                    </div>
                </div>
            </div>

            // View mode toggle
            <div class="flex items-center gap-2 p-4 border-b border-[color:var(--ring)]">
                <button
                    class=mode_class(ListViewMode::Lessons)
                    on:click=move |_| viewer.dispatch(Message::SetViewMode(ListViewMode::Lessons))
                >
                    <BookOpen class="w-4 h-4" />
                    <span>"Lessons"</span>
                </button>
                <button
                    class=mode_class(ListViewMode::Modules)
                    on:click=move |_| viewer.dispatch(Message::SetViewMode(ListViewMode::Modules))
                >
                    <List class="w-4 h-4" />
                    <span>"Modules"</span>
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-2">
                {viewer
                    .lessons()
                    .into_iter()
                    .enumerate()
                    .map(|(index, lesson)| view! { <LessonEntry index=index lesson=lesson /> })
                    .collect_view()}
            </div>

            <div
                class="absolute right-0 top-0 bottom-0 w-1 cursor-col-resize hover:bg-[color:var(--accent)] transition-colors"
                on:pointerdown=start_resize
            ></div>
        </div>
    }
}

#[component]
fn LessonEntry(index: usize, lesson: LessonDescriptor<Slide>) -> impl IntoView {
    let viewer = use_viewer();
    let id = lesson.id;
    let active = viewer.active_id();
    let is_active = move || active.with(|active| active == id);
    let progress = move || viewer.with(|s| s.course.progress(id));
    let completed = move || viewer.with(|s| s.course.progress(id).completed);
    let bookmarked = move || viewer.with(|s| s.course.progress(id).bookmarked);
    let preview_style = move || {
        format!(
            "transform: scale({});",
            viewer.with(|s| s.course.list_pane.preview_scale())
        )
    };

    view! {
        <div
            class=move || {
                if is_active() {
                    "relative mb-3 rounded-lg border overflow-hidden cursor-pointer group transition-all border-blue-400 ring-2 ring-blue-400/30 shadow-lg"
                } else {
                    "relative mb-3 rounded-lg border overflow-hidden cursor-pointer group transition-all border-[color:var(--ring)] hover:border-white/20 hover:shadow-md"
                }
            }
            on:click=move |_| viewer.dispatch(Message::SelectLesson { id: id.to_string() })
        >
            // Status badges
            <div class="absolute top-2 right-2 z-10 flex gap-1">
                <Show when=completed>
                    <div class="bg-green-500 text-white p-1 rounded-full">
                        <CheckCircle class="w-3 h-3" />
                    </div>
                </Show>
                <Show when=bookmarked>
                    <div class="bg-yellow-500 text-white p-1 rounded-full">
                        <Bookmark class="w-3 h-3" />
                    </div>
                </Show>
            </div>

            <div class="absolute top-2 left-2 z-10 bg-black/60 text-white text-xs px-2 py-1 rounded">
                {index + 1}
            </div>

            // Preview
            <div class="aspect-[16/10] bg-black/20 relative overflow-hidden">
                <div class="w-full h-full origin-top-left" style=preview_style>
                    <div class="w-[1280px] h-[800px]">{(lesson.render)()}</div>
                </div>
                <Show when=move || progress().watch_percent() > 0.0>
                    <div class="absolute bottom-0 left-0 right-0 h-1 bg-black/40">
                        <div
                            class="h-full bg-blue-500"
                            style=move || format!("width: {}%;", progress().watch_percent())
                        ></div>
                    </div>
                </Show>
            </div>

            <div class="p-3 border-t border-[color:var(--ring)]">
                <div class="flex items-start justify-between">
                    <div class="flex-1">
                        <h3 class="font-medium text-sm mb-1 line-clamp-2">{lesson.title}</h3>
                        {lesson.subtitle.map(|subtitle| view! {
                            <p class="text-xs text-[color:var(--sub)] line-clamp-1">{subtitle}</p>
                        })}
                    </div>
                    <div class="flex items-center gap-1 ml-2">
                        <Clock class="w-3 h-3 text-[color:var(--sub)]" />
                        <span class="text-xs text-[color:var(--sub)]">
                            {move || format!("{}m", progress().duration_minutes())}
                        </span>
                    </div>
                </div>

                // Quick actions
                <div class="flex items-center justify-between mt-2 opacity-0 group-hover:opacity-100 transition-opacity">
                    <div class="flex gap-1">
                        <button
                            class=move || {
                                if bookmarked() {
                                    "p-1 rounded hover:bg-white/10 transition-colors text-yellow-500"
                                } else {
                                    "p-1 rounded hover:bg-white/10 transition-colors text-[color:var(--sub)]"
                                }
                            }
                            title="Bookmark"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                viewer.dispatch(Message::ToggleBookmark { id: id.to_string() });
                            }
                        >
                            <Bookmark class="w-3.5 h-3.5" />
                        </button>
                        <button
                            class=move || {
                                if completed() {
                                    "p-1 rounded hover:bg-white/10 transition-colors text-green-500"
                                } else {
                                    "p-1 rounded hover:bg-white/10 transition-colors text-[color:var(--sub)]"
                                }
                            }
                            title="Mark complete"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                viewer.dispatch(Message::MarkCompleted { id: id.to_string() });
                            }
                        >
                            <CheckCircle class="w-3.5 h-3.5" />
                        </button>
                    </div>
                    <Show when=move || !progress().notes.is_empty()>
                        <div class="flex items-center gap-1">
                            <StickyNote class="w-3 h-3 text-[color:var(--sub)]" />
                            <span class="text-xs text-[color:var(--sub)]">
                                {move || progress().notes.len()}
                            </span>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
