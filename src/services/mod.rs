pub mod export_service;
pub mod clipboard_service;

pub use export_service::{build_csv, download_csv};
pub use clipboard_service::copy_text;
