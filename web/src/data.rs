use coursedeck_core::LessonDescriptor;
use leptos::prelude::*;

use crate::components::slides::{
    ArchitectureSlide, GoalsSlide, OverviewSlide, SketchingSlide,
};

/// Renders a lesson at its native 1280x800 size.
pub type Slide = fn() -> AnyView;

pub fn lessons() -> Vec<LessonDescriptor<Slide>> {
    vec![
        LessonDescriptor {
            id: "wireframe-overview",
            title: "Creating Wireframes for a Website Redesign",
            subtitle: Some("Introduction to wireframing fundamentals"),
            render: || view! { <OverviewSlide /> }.into_any(),
        },
        LessonDescriptor {
            id: "project-goals",
            title: "Understanding Project Goals and User Needs",
            subtitle: Some("Research and analysis techniques"),
            render: || view! { <GoalsSlide /> }.into_any(),
        },
        LessonDescriptor {
            id: "information-architecture",
            title: "Defining the Information Architecture",
            subtitle: Some("Structure and navigation planning"),
            render: || view! { <ArchitectureSlide /> }.into_any(),
        },
        LessonDescriptor {
            id: "sketching-concepts",
            title: "Sketching Initial Wireframe Concepts",
            subtitle: Some("From ideas to low-fidelity designs"),
            render: || view! { <SketchingSlide /> }.into_any(),
        },
    ]
}
