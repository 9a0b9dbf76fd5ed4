//! HTTP plumbing shared by the platform API adapters

mod client;

pub use client::{HttpClient, HttpClientBuilder};
