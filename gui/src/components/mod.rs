// GUI components module
pub mod chart;
pub mod command_palette;
pub mod range_picker;
pub mod screen_list;
pub mod toolbar;
