use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{Error, ResolveError};
use crate::item::Item;
use crate::source::{RemoteSource, ResolveFuture};

/// Name of the query-string parameter carrying the search text
pub const QUERY_PARAM: &str = "query";

/// Resolves queries with `GET {endpoint}?query=...`, expecting a JSON array of items
pub struct HttpSource {
    client: Client,
    endpoint: Url,
    endpoint_text: String,
}

impl HttpSource {
    /// No timeout means a hung request keeps the field loading until it settles.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            endpoint_text: endpoint.to_string(),
            endpoint,
        })
    }

    /// Full request URL for a query. Parameters already on the endpoint are kept.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, query);
        url
    }
}

impl RemoteSource for HttpSource {
    fn endpoint(&self) -> &str {
        &self.endpoint_text
    }

    fn resolve(&self, query: &str) -> ResolveFuture {
        let client = self.client.clone();
        let url = self.request_url(query);

        Box::pin(async move {
            tracing::debug!("GET {}", url);

            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| ResolveError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ResolveError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| ResolveError::Transport(e.to_string()))?;

            serde_json::from_slice::<Vec<Item>>(&body)
                .map_err(|e| ResolveError::Decode(e.to_string()))
        })
    }
}
