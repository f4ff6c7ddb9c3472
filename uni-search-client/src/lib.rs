// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use reqwest::blocking::Client;
use std::fmt;

mod conf;
mod error;

pub use conf::{uni_search_conf, UniSearchConf};
pub use error::{ApiError, Error};

const SEARCH_ENDPOINT: &str = "/search";

/// One element of the response array, kept as the service returned it.
pub type Record = serde_json::Value;

/// Filters for a `/search` request. `None` and empty strings are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl Query {
    pub fn new(name: Option<&str>, country: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    /// Query string parameters, in `name`, `country` order.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            params.push(("name", name));
        }
        if let Some(country) = self.country.as_deref().filter(|s| !s.is_empty()) {
            params.push(("country", country));
        }
        params
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn field(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("None")
        }
        write!(
            f,
            "name='{}' and country='{}'",
            field(&self.name),
            field(&self.country)
        )
    }
}

#[derive(Clone, Debug)]
pub struct SearchResponse {
    pub status: u16,
    pub records: Vec<Record>,
}

pub struct Api {
    client: Client,
    endpoint_url: String,
}

impl Api {
    /// Client for the endpoint in `/etc/uni-search.conf`, or the public service.
    pub fn new() -> Result<Self, Error> {
        Self::with_endpoint(uni_search_conf().endpoint_url())
    }

    pub fn with_endpoint(endpoint_url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(uni_search_conf().user_agent())
            .build()?;
        Ok(Self {
            client,
            endpoint_url: endpoint_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn search(&self, query: &Query) -> Result<SearchResponse, Error> {
        let url = format!("{}{}", self.endpoint_url, SEARCH_ENDPOINT);
        let params = query.params();
        log::debug!("GET {} {:?}", url, params);

        let res = self.client.get(&url).query(&params).send()?;
        let status = res.status();
        if !status.is_success() {
            let message = res.text().ok().filter(|s| !s.trim().is_empty());
            return Err(ApiError {
                endpoint: SEARCH_ENDPOINT.to_string(),
                code: status.as_u16(),
                canonical_reason: status.canonical_reason().map(str::to_string),
                message,
            }
            .into());
        }

        let body = res.bytes()?;
        let records: Vec<Record> = serde_json::from_slice(&body)?;
        log::debug!("{} records from {}", records.len(), url);
        Ok(SearchResponse {
            status: status.as_u16(),
            records,
        })
    }
}
