use super::{CatalogEntry, Identifier, SearchHit, display_name};
use crate::constants::MAX_SEARCH_RESULTS;
use crate::error::CatalogError;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAppId {
    Number(u64),
    Text(String),
}

impl RawAppId {
    fn into_digits(self) -> Option<String> {
        match self {
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Identifier::parse(&s).ok().map(|id| id.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct RawSearchHit {
    appid: RawAppId,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct RawDetails {
    name: Option<String>,
    #[serde(default)]
    developers: Vec<String>,
    release_date: Option<RawReleaseDate>,
    price_overview: Option<RawPrice>,
}

#[derive(Deserialize)]
struct RawReleaseDate {
    date: Option<String>,
}

#[derive(Deserialize)]
struct RawPrice {
    final_formatted: Option<String>,
}

/// Thin client over the public store search and app-details endpoints.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    search_url: String,
    details_url: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, search_url: String, details_url: String) -> Self {
        Self {
            http,
            search_url,
            details_url,
        }
    }

    /// Free-text search. Only the endpoint's first 25 entries are considered, in order, and
    /// entries without a usable id are dropped from those; no match is an empty Vec.
    #[instrument(level = "debug", skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, CatalogError> {
        let mut url = Url::parse(&self.search_url)?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(query);

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }
        let raw: Vec<RawSearchHit> = resp.json().await?;
        let hits: Vec<SearchHit> = raw
            .into_iter()
            .take(MAX_SEARCH_RESULTS)
            .filter_map(|h| {
                h.appid.into_digits().map(|appid| SearchHit {
                    appid,
                    name: display_name(&h.name),
                })
            })
            .collect();
        debug!(target = "catalog.search", count = hits.len(), "search finished");
        Ok(hits)
    }

    /// Fetch details for one identifier. `MetadataUnavailable` when the entry has no data.
    #[instrument(level = "debug", skip(self), fields(appid = %id))]
    pub async fn try_lookup(&self, id: &Identifier) -> Result<CatalogEntry, CatalogError> {
        let resp = self
            .http
            .get(&self.details_url)
            .query(&[("appids", id.as_str())])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }
        let body: Value = resp.json().await?;
        let data = body
            .get(id.as_str())
            .and_then(|entry| entry.get("data"))
            .filter(|d| d.as_object().is_some_and(|o| !o.is_empty()))
            .cloned()
            .ok_or_else(|| CatalogError::MetadataUnavailable(id.to_string()))?;
        let details: RawDetails = serde_json::from_value(data)
            .map_err(|_| CatalogError::MetadataUnavailable(id.to_string()))?;

        Ok(CatalogEntry {
            appid: id.to_string(),
            display_name: details.name.unwrap_or_else(|| format!("Game {id}")),
            developers: details.developers,
            release_date: details.release_date.and_then(|r| r.date),
            price: details.price_overview.and_then(|p| p.final_formatted),
        })
    }

    /// Like `try_lookup` but never fails: any problem degrades to a placeholder entry.
    pub async fn lookup(&self, id: &Identifier) -> CatalogEntry {
        match self.try_lookup(id).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!(target = "catalog.lookup", appid = %id, error = %e, "metadata unavailable; using placeholder");
                CatalogEntry::placeholder(id)
            }
        }
    }
}
