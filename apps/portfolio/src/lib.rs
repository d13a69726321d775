//! Portfolio API client: fetches the profile and articles of a personal
//! portfolio site and normalizes every payload shape the API has served into
//! one stable model.

pub mod api_client;
pub mod articles;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod profile;

pub use api_client::ApiClient;
pub use config::Config;
pub use errors::ApiError;
