use coursedeck_app::Layout;
use leptos::prelude::*;

use super::track_layout;
use crate::components::course::CourseInterface;

#[component]
pub fn CoursePage() -> impl IntoView {
    track_layout(Layout::Course);

    view! { <CourseInterface /> }
}
