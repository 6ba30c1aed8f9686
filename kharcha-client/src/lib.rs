mod api_url;
mod client;
pub mod domain;

pub use api_url::ApiUrl;
pub use client::*;
pub use domain::*;
