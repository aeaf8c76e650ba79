//! HTTP module
//!
//! Fetches the source document.
//!
//! # Overview
//!
//! - `HttpClient` - reqwest wrapper with timeout and status checking
//! - `DocumentSource` - where a run's document comes from (`HttpSource`,
//!   `FileSource`, `StaticSource`)

mod client;
mod source;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use source::{DocumentSource, FileSource, HttpSource, StaticSource};
