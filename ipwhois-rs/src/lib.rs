pub mod client;
pub mod errors;
pub mod types;
pub mod utils;

pub use client::{get_ip_info, get_my_ip_info, ipwhois, IpWhois};
pub use errors::{ErrorKind, IpWhoisError};
pub use types::{
    Config, IpWhoisFailure, IpWhoisResponse, LookupOptions, BASE_URL, DEFAULT_TIMEOUT_MS,
    USER_AGENT,
};
