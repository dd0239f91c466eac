//! HTTP implementation of the backend client
//!
//! Thin wrapper around `gloo-net` fetch calls. Every method issues exactly
//! one request against the configured base URL and decodes the JSON body
//! into the matching `weaviate-admin-shared` model.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use weaviate_admin_shared::{
    Acknowledgement, CollectionDeleted, CollectionEnvelope, CollectionList, DatabasePort,
    DatabaseUrl, DockerNetwork, DockerNetworkList, HealthResponse, KeyList, MetaResponse,
    NearObjectRequest, NearVectorRequest, ObjectsPage, PingResponse, ProjectionRequest,
    ProjectionResponse, SearchResults, VectorResponse, WeaviateObject,
};

use super::{extract_error_message, ApiError};

/// Backend origin used when no override is stored.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Local-storage key for a user-provided backend origin.
const BASE_URL_STORAGE_KEY: &str = "weaviate-admin.base-url";

/// Typed client for the dashboard backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Backend origin, without trailing slash. REST paths live under
    /// `{base_url}/api`, except the unprefixed `{base_url}/health`.
    base_url: String,
}

impl ApiClient {
    pub fn new(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the stored origin override, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_storage() -> Self {
        use gloo_storage::Storage;
        let stored: Option<String> = gloo_storage::LocalStorage::get(BASE_URL_STORAGE_KEY).ok();
        match stored {
            Some(url) => Self::new(&url),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Request(extract_error_message(
                status,
                &status_text,
                &body,
            )));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    // ========================================================================
    // Health & meta
    // ========================================================================

    /// `GET /health` — the only unprefixed path.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json(&format!("{}/health", self.base_url)).await
    }

    pub async fn meta(&self) -> Result<MetaResponse, ApiError> {
        self.get_json(&self.api_url("/meta")).await
    }

    pub async fn ping(&self) -> Result<PingResponse, ApiError> {
        self.get_json(&self.api_url("/ping")).await
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub async fn list_collections(&self) -> Result<CollectionList, ApiError> {
        self.get_json(&self.api_url("/collections")).await
    }

    pub async fn get_collection(
        &self,
        name: &str,
    ) -> Result<weaviate_admin_shared::Collection, ApiError> {
        let envelope: CollectionEnvelope = self
            .get_json(&self.api_url(&format!("/collections/{}", name)))
            .await?;
        Ok(envelope.collection)
    }

    /// `confirm` must equal `name` byte-for-byte; the backend rejects any
    /// mismatch, the UI never issues the call in the first place.
    pub async fn delete_collection(
        &self,
        name: &str,
        confirm: &str,
    ) -> Result<CollectionDeleted, ApiError> {
        let response = Request::delete(&self.api_url(&format!("/collections/{}", name)))
            .query([("confirm", confirm)])
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    // ========================================================================
    // Objects
    // ========================================================================

    pub async fn list_objects(
        &self,
        collection: &str,
        query: &ObjectsQuery,
    ) -> Result<ObjectsPage, ApiError> {
        let params = query.to_params();
        let response = Request::get(&self.api_url(&format!("/collections/{}/objects", collection)))
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn get_object(
        &self,
        collection: &str,
        id: &str,
        include_vector: bool,
    ) -> Result<WeaviateObject, ApiError> {
        let url = self.api_url(&format!("/collections/{}/objects/{}", collection, id));
        let response = Request::get(&url)
            .query([("include_vector", if include_vector { "true" } else { "false" })])
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn get_vector(&self, collection: &str, id: &str) -> Result<VectorResponse, ApiError> {
        self.get_json(&self.api_url(&format!(
            "/collections/{}/objects/{}/vector",
            collection, id
        )))
        .await
    }

    /// Deletion is two-staged on the backend: `dry_run` previews, `hard`
    /// must be true for the delete to actually happen.
    pub async fn delete_object(
        &self,
        collection: &str,
        id: &str,
        hard: bool,
        dry_run: bool,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.api_url(&format!("/collections/{}/objects/{}", collection, id));
        let response = Request::delete(&url)
            .query([
                ("hard", if hard { "true" } else { "false" }),
                ("dry_run", if dry_run { "true" } else { "false" }),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn search_text(
        &self,
        q: &str,
        collection: Option<&str>,
        limit: u32,
        fields: Option<&str>,
    ) -> Result<SearchResults, ApiError> {
        let limit = limit.to_string();
        let mut params: Vec<(&str, &str)> = vec![("q", q), ("limit", &limit)];
        if let Some(collection) = collection {
            params.push(("collection", collection));
        }
        if let Some(fields) = fields {
            params.push(("fields", fields));
        }
        let response = Request::get(&self.api_url("/search/text"))
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    pub async fn search_near_vector(
        &self,
        request: &NearVectorRequest,
    ) -> Result<SearchResults, ApiError> {
        self.post_json(&self.api_url("/search/near-vector"), request)
            .await
    }

    pub async fn search_near_object(
        &self,
        request: &NearObjectRequest,
    ) -> Result<SearchResults, ApiError> {
        self.post_json(&self.api_url("/search/near-object"), request)
            .await
    }

    // ========================================================================
    // Projection
    // ========================================================================

    pub async fn projection(
        &self,
        request: &ProjectionRequest,
    ) -> Result<ProjectionResponse, ApiError> {
        self.post_json(&self.api_url("/projection"), request).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, "POST");
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    // ========================================================================
    // Database configuration
    // ========================================================================

    pub async fn database_url(&self) -> Result<DatabaseUrl, ApiError> {
        self.get_json(&self.api_url("/database/url")).await
    }

    pub async fn set_database_url(&self, url: &str) -> Result<Acknowledgement, ApiError> {
        self.post_with_params(&self.api_url("/database/url"), &[("url", url)])
            .await
    }

    pub async fn database_port(&self) -> Result<DatabasePort, ApiError> {
        self.get_json(&self.api_url("/database/port")).await
    }

    pub async fn set_database_port(&self, port: u16) -> Result<Acknowledgement, ApiError> {
        let port = port.to_string();
        self.post_with_params(&self.api_url("/database/port"), &[("port", &port)])
            .await
    }

    // ========================================================================
    // Docker network
    // ========================================================================

    pub async fn docker_networks(&self) -> Result<DockerNetworkList, ApiError> {
        self.get_json(&self.api_url("/docker/networks")).await
    }

    pub async fn docker_network(&self) -> Result<DockerNetwork, ApiError> {
        self.get_json(&self.api_url("/docker/network")).await
    }

    pub async fn set_docker_network(&self, network: &str) -> Result<Acknowledgement, ApiError> {
        self.post_with_params(&self.api_url("/docker/network"), &[("network", network)])
            .await
    }

    pub async fn clear_docker_network(&self) -> Result<Acknowledgement, ApiError> {
        let response = Request::delete(&self.api_url("/docker/network"))
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    // ========================================================================
    // API keys
    // ========================================================================

    pub async fn list_keys(&self) -> Result<KeyList, ApiError> {
        self.get_json(&self.api_url("/keys")).await
    }

    /// The value is sent once and never echoed back by the backend.
    pub async fn add_key(&self, name: &str, value: &str) -> Result<Acknowledgement, ApiError> {
        self.post_with_params(&self.api_url("/key"), &[("name", name), ("value", value)])
            .await
    }

    pub async fn delete_key(&self, name: &str) -> Result<Acknowledgement, ApiError> {
        let response = Request::delete(&self.api_url("/key"))
            .query([("name", name)])
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }

    /// The configuration write endpoints take their input as query
    /// parameters with an empty body.
    async fn post_with_params<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = Request::post(url)
            .query(params.iter().copied())
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Self::decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_storage()
    }
}

/// Query parameters for the paged object listing.
#[derive(Debug, Clone)]
pub struct ObjectsQuery {
    pub limit: u32,
    pub cursor: Option<String>,
    pub where_filter: Option<String>,
    pub fields: Option<String>,
    pub include_vector: bool,
}

impl Default for ObjectsQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            cursor: None,
            where_filter: None,
            fields: None,
            include_vector: false,
        }
    }
}

impl ObjectsQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Flatten into wire query parameters. Optional parameters are omitted
    /// entirely rather than sent empty.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];
        if let Some(cursor) = &self.cursor {
            params.push(("cursor", cursor.clone()));
        }
        if let Some(where_filter) = &self.where_filter {
            params.push(("where", where_filter.clone()));
        }
        if let Some(fields) = &self.fields {
            params.push(("fields", fields.clone()));
        }
        if self.include_vector {
            params.push(("include_vector", "true".to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.api_url("/meta"), "http://localhost:8000/api/meta");
    }

    #[test]
    fn objects_query_passes_limit_through() {
        let query = ObjectsQuery::with_limit(50);
        let params = query.to_params();
        assert_eq!(params, vec![("limit", "50".to_string())]);
    }

    #[test]
    fn objects_query_omits_unset_optionals() {
        let query = ObjectsQuery {
            limit: 25,
            cursor: Some("abc".into()),
            where_filter: None,
            fields: Some("title".into()),
            include_vector: true,
        };
        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("limit", "25".to_string()),
                ("cursor", "abc".to_string()),
                ("fields", "title".to_string()),
                ("include_vector", "true".to_string()),
            ]
        );
    }
}
