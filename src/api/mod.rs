pub mod client;
pub mod error;
pub mod models;
pub mod pdd;

pub use client::DnsApiClient;
pub use error::ApiError;
pub use models::{filter_by_content, DnsRecord, RecordRequest};
pub use pdd::PddClient;
