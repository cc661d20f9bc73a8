// src/integrations/omdb/client.rs
//
// OMDb API integration
//
// ARCHITECTURE:
// - Thin HTTP client over the OMDb query API
// - Maps external data → wire DTOs (NO domain mutation)
// - Used by IngestService through the MetadataSource trait

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::integrations::{MetadataSource, SeasonData, SeriesData};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb API Client
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl OmdbClient {
    /// Create a new OMDb client against the public endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    /// Create a client against a specific endpoint (mirrors, tests)
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            http_client,
        }
    }

    /// Execute one GET against the OMDb endpoint and decode the JSON body.
    ///
    /// OMDb signals lookup misses inside a 200 body ("Response": "False"),
    /// which decodes into DTOs with absent fields; only transport and decode
    /// failures surface as errors here.
    fn get<T>(&self, query: &[(&str, String)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(query)
            .send()
            .map_err(|e| AppError::Provider(format!("OMDb request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Provider(format!(
                "OMDb returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| AppError::Provider(format!("Failed to parse OMDb response: {}", e)))
    }
}

impl MetadataSource for OmdbClient {
    fn fetch_series(&self, titulo: &str) -> AppResult<SeriesData> {
        self.get(&[
            ("t", titulo.to_string()),
            ("apikey", self.api_key.clone()),
        ])
    }

    fn fetch_season(&self, titulo: &str, temporada: u32) -> AppResult<SeasonData> {
        self.get(&[
            ("t", titulo.to_string()),
            ("Season", temporada.to_string()),
            ("apikey", self.api_key.clone()),
        ])
    }
}
