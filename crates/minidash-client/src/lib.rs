//! # minidash-client
//!
//! Where the dashboard's metric records come from.
//!
//! - [`source::MetricsSource`] is the seam the panel fetches through.
//! - [`http::HttpMetricsSource`] talks to the analytics endpoint over HTTP.
//! - [`decode::decode_metrics`] turns a response body into a validated
//!   [`minidash_common::types::MetricsCollection`].

pub mod decode;
pub mod error;
pub mod http;
pub mod source;
