pub mod client;

pub use client::OmdbClient;
