use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use geotracker_boundary::NominatimPlace;

use crate::{into_json, Result};

/// Client of a Nominatim compatible place search.
#[derive(Debug, Clone)]
pub struct SearchApi {
    url: String,
}

impl SearchApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}?format=json&q={encoded_query}", self.url)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<NominatimPlace>> {
        let url = self.search_url(query);
        log::debug!("Search places: {url}");
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
