use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::json;

use crate::ring::{BoundaryRing, serialize_ring};
use crate::types::FarmId;

use super::{BoundaryStore, FarmRecord};

/// Blocking HTTP implementation of `BoundaryStore`.
///
/// Expects the farm-record service to expose:
/// - `GET {base}/farms` returning a JSON array of farm records
/// - `PUT {base}/farms/{id}/boundary` accepting a full coordinate replacement
pub struct HttpStore {
    base_url: String,
    client: Client,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("farmbound/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .context("build HTTP client")?;

        let base_url: String = base_url.into();
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }
}

impl BoundaryStore for HttpStore {
    fn list_boundaries(&self) -> Result<Vec<FarmRecord>> {
        let url = format!("{}/farms", self.base_url);

        let records = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url} returned error status"))?
            .json::<Vec<FarmRecord>>()
            .with_context(|| format!("decode farm records from {url}"))?;

        Ok(records)
    }

    fn replace_boundary(&self, farm_id: &FarmId, ring: &BoundaryRing) -> Result<()> {
        let url = format!("{}/farms/{}/boundary", self.base_url, farm_id);
        let body = json!({
            "id": farm_id.as_str(),
            "boundaryCoordinates": serialize_ring(ring),
        });

        self.client
            .put(&url)
            .json(&body)
            .send()
            .with_context(|| format!("PUT {url}"))?
            .error_for_status()
            .with_context(|| format!("PUT {url} returned error status"))?;

        Ok(())
    }
}
