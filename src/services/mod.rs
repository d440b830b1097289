pub mod formatters;
pub mod iptv_org;
pub mod iptv_service;
pub mod metrics;

pub use iptv_service::IptvService;
