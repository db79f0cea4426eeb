pub mod achievement_panel;
pub mod input_field;
pub mod notification;
pub mod stats_bar;
pub mod word_display;
