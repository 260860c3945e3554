pub mod parcel;
pub mod filter;
pub mod selection;
pub mod store;
pub mod seed;

pub use parcel::{Parcel, ParcelStatus, ParcelType, PaymentStatus};
pub use filter::FilterCriteria;
pub use selection::Selection;
pub use store::ParcelStore;
pub use seed::seed_parcels;
