//! HTTP access to remote feeds and logo hosts

pub mod client;

pub use client::{HttpClient, RequestStats};
