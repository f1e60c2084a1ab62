use crate::adapters::outbound::network::{ApiCredentials, HmacSigner, Region};
use crate::ports::outbound::{CollectionRepository, CredentialsRepository, SbomRepository};
use crate::sbom_aggregation::domain::{
    Asset, Collection, CollectionId, CollectionSummary, SbomDocument,
};
use crate::shared::error::{SbomError, SbomFetchError};
use crate::shared::Result;
use chrono::{DateTime, FixedOffset};
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::error::Category;
use serde_json::{Map, Value};
use std::time::Duration;

/// HAL envelope used by the paginated endpoints
#[derive(Debug, Deserialize)]
struct HalPage {
    #[serde(rename = "_embedded", default)]
    embedded: Map<String, Value>,
    #[serde(default)]
    page: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(default)]
    total_pages: u32,
}

impl HalPage {
    fn take_embedded<T: DeserializeOwned>(&mut self, key: &str) -> Result<Vec<T>> {
        match self.embedded.remove(key) {
            Some(items) => Ok(serde_json::from_value(items)?),
            None => Ok(Vec::new()),
        }
    }

    /// The page following `current`, if the listing has one
    fn next_page(&self, current: u32) -> Option<u32> {
        let total_pages = self.page.as_ref().map_or(0, |info| info.total_pages);
        let next = current.checked_add(1)?;
        (next < total_pages).then_some(next)
    }
}

#[derive(Debug, Deserialize)]
struct CredentialsInfo {
    expiration_ts: String,
}

/// VeracodeClient adapter for the Veracode REST APIs
///
/// Implements the collection, SBOM and credentials ports over HTTPS with
/// HMAC-signed blocking requests. Every request is attempted once.
pub struct VeracodeClient {
    client: Client,
    host: String,
    signer: HmacSigner,
}

impl VeracodeClient {
    const TIMEOUT_SECONDS: u64 = 60;
    const COLLECTIONS_PATH: &'static str = "/appsec/v1/collections";
    const SBOM_PATH: &'static str = "/srcclr/sbom/v1/targets";
    const CREDENTIALS_PATH: &'static str = "/api/authn/v2/api_credentials";

    /// Creates a client for `region` signing with `credentials`
    pub fn new(credentials: &ApiCredentials, region: Region) -> Result<Self> {
        let user_agent = format!("collection-sbom/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            host: region.api_host().to_string(),
            signer: HmacSigner::new(credentials)?,
        })
    }

    /// Sends a signed GET request for `path_and_query`
    fn get(&self, path_and_query: &str) -> Result<Response> {
        let authorization = self
            .signer
            .authorization_header(&self.host, path_and_query, "GET")?;
        let url = format!("https://{}{}", self.host, path_and_query);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .send()?;

        tracing::info!(
            endpoint = %path_and_query,
            status = %response.status(),
            "Veracode API response"
        );
        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let api_error = |details: String| SbomError::ApiError {
            endpoint: path_and_query.to_string(),
            details,
        };

        let response = self
            .get(path_and_query)
            .map_err(|e| api_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(format!("API returned status code {}", status)).into());
        }

        response
            .json::<T>()
            .map_err(|e| api_error(format!("Unexpected response body: {}", e)).into())
    }

    /// Follows `page.total_pages` and collects `_embedded.<key>` from every page
    fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        key: &str,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page_number = 0u32;

        loop {
            let page_param = page_number.to_string();
            let mut query = params.to_vec();
            query.push(("page", &page_param));

            let mut page: HalPage = self.get_json(&build_path(path, &query))?;
            items.extend(page.take_embedded::<T>(key)?);

            match page.next_page(page_number) {
                Some(next) => page_number = next,
                None => break,
            }
        }

        Ok(items)
    }
}

impl CollectionRepository for VeracodeClient {
    fn list_collections_by_name(&self, text: &str) -> Result<Vec<CollectionSummary>> {
        self.get_all_pages(Self::COLLECTIONS_PATH, &[("name", text)], "collections")
    }

    fn get_collection(&self, id: &CollectionId) -> Result<Collection> {
        self.get_json(&format!("{}/{}", Self::COLLECTIONS_PATH, id))
    }

    fn get_collection_assets(&self, id: &CollectionId) -> Result<Vec<Asset>> {
        let path = format!("{}/{}/assets", Self::COLLECTIONS_PATH, id);
        self.get_all_pages(&path, &[], "assets")
    }
}

impl SbomRepository for VeracodeClient {
    fn get_sbom(&self, application_guid: &str) -> std::result::Result<SbomDocument, SbomFetchError> {
        let unavailable = |details: String| SbomFetchError::Unavailable {
            application: application_guid.to_string(),
            details,
        };

        let path = build_path(
            &format!(
                "{}/{}/cyclonedx",
                Self::SBOM_PATH,
                urlencoding::encode(application_guid)
            ),
            &[("type", "application"), ("vulnerability", "true")],
        );

        let response = self.get(&path).map_err(|e| unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("API returned status code {}", status)));
        }

        let body = response.text().map_err(|e| unavailable(e.to_string()))?;
        parse_sbom_body(application_guid, &body)
    }
}

impl CredentialsRepository for VeracodeClient {
    fn credentials_expiration(&self) -> Result<DateTime<FixedOffset>> {
        let info: CredentialsInfo = self.get_json(Self::CREDENTIALS_PATH)?;
        parse_expiration_timestamp(&info.expiration_ts)
    }
}

/// Parses an SBOM response body
///
/// A body that is not JSON at all is treated like a failed request. JSON
/// that does not have the SBOM shape is `Malformed`.
fn parse_sbom_body(
    application_guid: &str,
    body: &str,
) -> std::result::Result<SbomDocument, SbomFetchError> {
    SbomDocument::from_json(body).map_err(|e| match e.classify() {
        Category::Data => SbomFetchError::Malformed {
            application: application_guid.to_string(),
            details: e.to_string(),
        },
        Category::Syntax | Category::Eof | Category::Io => SbomFetchError::Unavailable {
            application: application_guid.to_string(),
            details: format!("Response body is not JSON: {}", e),
        },
    })
}

/// Appends URL-encoded query parameters to `path`
fn build_path(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}

/// Parses `expiration_ts`, e.g. `2024-06-30T12:00:00.000+0000`
fn parse_expiration_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map_err(|e| anyhow::anyhow!("Invalid credentials expiration timestamp '{}': {}", value, e))
}
