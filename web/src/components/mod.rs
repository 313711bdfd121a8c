pub mod course;
pub mod icons;
pub mod page_canvas;
pub mod slide_frame;
pub mod slides;
pub mod thumbnail_sidebar;
