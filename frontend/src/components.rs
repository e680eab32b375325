pub mod action_button;
pub mod nav_link;
pub mod section_heading;
