//! Shared frontend utilities for API access and configuration.
//!
//! Every request goes through `api` so the timeout policy and the mapping of
//! failures onto `FetchError` stay the same across views.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) mod config;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::get_json;
