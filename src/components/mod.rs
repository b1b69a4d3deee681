pub mod app;
pub mod background;
pub mod reaction_view;
pub mod round_summary;
pub mod stats_panel;
pub mod theme_toggle;
pub mod time_display;

pub use app::App;
