//! 추출 워크플로우 모듈.

pub mod csv_extract;
pub mod download;
pub mod snapshot;
pub mod sql_extract;
pub mod transfer;

pub use csv_extract::extract_csv;
pub use download::fetch_text;
pub use sql_extract::extract_postgres;
pub use transfer::transfer_tables;
