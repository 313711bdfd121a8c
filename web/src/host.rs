//! Browser side effects requested by the engine.
//!
//! The engine never touches the DOM. It returns [`UpdateAction`]s and the
//! host carries them out: one countdown interval, one document-level pointer
//! capture, and the URL fragment.

use std::time::Duration;

use coursedeck_app::deep_link::with_fragment;
use coursedeck_app::{Cursor, InputKey, KeyInput, Message, UpdateAction};
use coursedeck_core::{Point, Size};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent};

use crate::viewer::Viewer;

#[derive(Default)]
pub struct Host {
    timer: Option<IntervalHandle>,
    capture: Option<PointerCapture>,
}

impl Host {
    pub fn perform(&mut self, viewer: Viewer, action: UpdateAction) {
        match action {
            UpdateAction::ArmTimer { period_ms } => self.arm_timer(viewer, period_ms),
            UpdateAction::CancelTimer => self.cancel_timer(),
            UpdateAction::CapturePointer { cursor } => {
                // Restore the old capture's body styles before applying ours
                self.capture = None;
                self.capture = Some(PointerCapture::install(viewer, cursor));
            }
            UpdateAction::ReleasePointer => self.capture = None,
            UpdateAction::SyncFragment { lesson_id } => sync_fragment(&lesson_id),
        }
    }

    fn arm_timer(&mut self, viewer: Viewer, period_ms: u32) {
        self.cancel_timer();
        let period = Duration::from_millis(u64::from(period_ms));
        match set_interval_with_handle(move || viewer.dispatch(Message::AutoAdvanceTick), period) {
            Ok(handle) => self.timer = Some(handle),
            Err(err) => log::error!("Failed to arm auto-advance timer: {err:?}"),
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.clear();
        }
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Window listeners that follow the pointer for the duration of a gesture.
///
/// Dropping the capture removes the listeners and restores the body styles.
struct PointerCapture {
    listeners: Vec<WindowListenerHandle>,
}

impl PointerCapture {
    fn install(viewer: Viewer, cursor: Cursor) -> Self {
        set_body_style(cursor.css(), "none");
        let listeners = vec![
            window_event_listener(ev::pointermove, move |ev| {
                viewer.dispatch(Message::PointerMoved(client_point(&ev)));
            }),
            window_event_listener(ev::pointerup, move |_| {
                viewer.dispatch(Message::PointerReleased);
            }),
            window_event_listener(ev::pointercancel, move |_| {
                viewer.dispatch(Message::PointerReleased);
            }),
        ];
        Self { listeners }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        set_body_style("", "");
    }
}

fn set_body_style(cursor: &str, user_select: &str) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    if let Err(err) = style
        .set_property("cursor", cursor)
        .and_then(|()| style.set_property("user-select", user_select))
    {
        log::debug!("Failed to set body style: {err:?}");
    }
}

/// Rewrite the URL fragment in place, without a history entry.
fn sync_fragment(lesson_id: &str) {
    let window = window();
    let Ok(href) = window.location().href() else {
        return;
    };
    let url = with_fragment(&href, lesson_id);
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(err) = result {
        log::warn!("Failed to sync URL fragment to {lesson_id}: {err:?}");
    }
}

/// Viewport coordinates of a mouse or pointer event.
pub fn client_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Inner size of the window, if the browser reports one.
pub fn viewport_size() -> Option<Size> {
    let window = window();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

pub fn key_input(ev: &KeyboardEvent) -> KeyInput {
    let in_text_field = ev.target().is_some_and(|target| {
        target.is_instance_of::<HtmlInputElement>() || target.is_instance_of::<HtmlTextAreaElement>()
    });
    KeyInput {
        key: InputKey::from_dom_key(&ev.key()),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        alt: ev.alt_key(),
        in_text_field,
    }
}
