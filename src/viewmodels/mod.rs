pub mod parcels_viewmodel;

pub use parcels_viewmodel::{filter_parcels, visible_ids, ParcelStats};
