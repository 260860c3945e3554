pub mod app;
pub mod stat_cards;
pub mod toolbar;
pub mod parcel_table;
pub mod selection_bar;

pub use app::render_app;
pub use stat_cards::render_stat_cards;
pub use toolbar::render_toolbar;
pub use parcel_table::render_parcel_table;
pub use selection_bar::render_selection_bar;
