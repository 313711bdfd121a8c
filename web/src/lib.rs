pub mod components;
pub mod data;
pub mod host;
pub mod pages;
pub mod storage;
pub mod viewer;

use coursedeck_app::{Engine, SystemClock};
use coursedeck_core::Registry;
use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::canvas::CanvasPage;
use pages::course::CoursePage;
use viewer::Viewer;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewer = match Registry::new(data::lessons()).and_then(|registry| {
        let engine = Engine::for_registry(&registry, storage::open_store(), Box::new(SystemClock))?;
        Ok(Viewer::new(engine, registry))
    }) {
        Ok(viewer) => viewer,
        Err(err) => {
            log::error!("Failed to start the viewer: {err}");
            return view! { <p class="p-8">"The course could not be loaded."</p> }.into_any();
        }
    };
    provide_context(viewer);

    // Hydration runs after the first render, so the initial markup never
    // depends on stored state.
    Effect::new(move || viewer.hydrate());
    install_window_listeners(viewer);

    view! {
        <Title text="Website Wireframes Course - Interactive Learning Platform" />
        <Meta
            name="description"
            content="Learn website wireframing through interactive lessons and hands-on practice"
        />
        <Router>
            <Show when=move || viewer.is_ready() fallback=|| view! { <div>"Loading..."</div> }>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=CanvasPage />
                    <Route path=path!("/course") view=CoursePage />
                </Routes>
            </Show>
        </Router>
    }
    .into_any()
}

fn install_window_listeners(viewer: Viewer) {
    let keydown = window_event_listener(ev::keydown, move |ev| {
        let input = host::key_input(&ev);
        if let Some(message) = viewer.key_message(&input) {
            ev.prevent_default();
            viewer.dispatch(message);
        }
    });
    let pagehide = window_event_listener(ev::pagehide, move |_| viewer.teardown());
    let pageshow = window_event_listener(ev::pageshow, move |ev| {
        if ev.persisted() {
            viewer.resume();
        }
    });

    on_cleanup(move || {
        keydown.remove();
        pagehide.remove();
        pageshow.remove();
    });
}
