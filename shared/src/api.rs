//! Wire models for the backend REST API
//!
//! These types mirror the JSON payloads served under `/api` (plus the
//! unprefixed `/health`). Schema-related fields are camelCase on the wire
//! (`dataType`, `indexFilterable`, ...); the models pin that explicitly so
//! the Rust side can stay snake_case.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Health & meta
// ============================================================================

/// `GET /health` response (unprefixed path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    /// The backend reports `"ok"` when it can serve requests.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// `GET /api/ping` response. `weaviate` is true when the backend can reach
/// the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub weaviate: bool,
}

/// `GET /api/meta` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaResponse {
    #[serde(default)]
    pub hostname: String,

    #[serde(default)]
    pub version: String,

    /// Enabled Weaviate modules, keyed by module name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<HashMap<String, Value>>,
}

// ============================================================================
// Collections & schema
// ============================================================================

/// `GET /api/collections` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionList {
    pub collections: Vec<String>,
}

/// Envelope returned by `GET /api/collections/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEnvelope {
    pub collection: Collection,
}

/// A named grouping of objects sharing a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectorizer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_index_type: Option<String>,

    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A schema-declared field of a collection's objects. Read-only on the
/// client; the dashboard never edits schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,

    #[serde(default)]
    pub data_type: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_filterable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_searchable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range_filters: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenization: Option<String>,
}

/// Response of `DELETE /api/collections/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionDeleted {
    pub deleted: String,
}

// ============================================================================
// Objects
// ============================================================================

/// A single stored object. Some backend revisions emit the identifier under
/// `uuid` instead of `id`; the alias accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaviateObject {
    #[serde(default, alias = "uuid")]
    pub id: String,

    #[serde(default)]
    pub properties: HashMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}

/// One page of `GET /api/collections/{name}/objects`. Pages are independent;
/// the client never merges them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectsPage {
    #[serde(default)]
    pub objects: Vec<WeaviateObject>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[serde(default, rename = "hasMore", skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

/// `GET /api/collections/{name}/objects/{id}/vector` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorResponse {
    pub id: String,
    pub vector: Vec<f32>,
}

// ============================================================================
// Search
// ============================================================================

/// One search hit. `score` is set by text search, `distance` by the
/// similarity searches; the two never appear together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, alias = "uuid")]
    pub id: String,

    #[serde(default)]
    pub properties: HashMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

impl SearchResult {
    /// Relevance column value: score for text search, distance otherwise.
    pub fn relevance(&self) -> Option<f64> {
        self.score.or(self.distance)
    }
}

impl From<SearchResult> for WeaviateObject {
    fn from(result: SearchResult) -> Self {
        WeaviateObject {
            id: result.id,
            properties: result.properties,
            vector: None,
            collection: result.collection,
            metadata: None,
        }
    }
}

/// Envelope for all three search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Body of `POST /api/search/near-vector`.
#[derive(Debug, Clone, Serialize)]
pub struct NearVectorRequest {
    pub vector: Vec<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    pub limit: u32,
}

/// Body of `POST /api/search/near-object`.
#[derive(Debug, Clone, Serialize)]
pub struct NearObjectRequest {
    pub collection: String,
    pub id: String,
    pub limit: u32,
}

// ============================================================================
// Projection
// ============================================================================

/// Body of `POST /api/projection`. `includeProps` is camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionRequest {
    pub collection: String,
    pub limit: u32,
    pub dims: u32,

    #[serde(rename = "includeProps", skip_serializing_if = "Option::is_none")]
    pub include_props: Option<Vec<String>>,
}

/// One projected point: a 2- or 3-dimensional coordinate plus the echoed
/// property subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    #[serde(default, alias = "uuid")]
    pub id: String,

    #[serde(default)]
    pub coords: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Value>>,
}

/// `POST /api/projection` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionResponse {
    #[serde(default)]
    pub collection: String,

    #[serde(default)]
    pub points: Vec<ProjectionPoint>,

    #[serde(default)]
    pub dims: u32,

    #[serde(default)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_and_ping_decode() {
        let health: HealthResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(health.is_ok());
        let sick: HealthResponse = serde_json::from_str(r#"{"status":"down"}"#).unwrap();
        assert!(!sick.is_ok());

        let ping: PingResponse = serde_json::from_str(r#"{"weaviate":true}"#).unwrap();
        assert!(ping.weaviate);
    }

    #[test]
    fn meta_decodes_with_and_without_modules() {
        let meta: MetaResponse =
            serde_json::from_str(r#"{"version":"1.2.3","hostname":"h1"}"#).unwrap();
        assert_eq!(meta.version, "1.2.3");
        assert_eq!(meta.hostname, "h1");
        assert!(meta.modules.is_none());

        let meta: MetaResponse = serde_json::from_str(
            r#"{"version":"1.2.3","hostname":"h1","modules":{"text2vec-openai":{}}}"#,
        )
        .unwrap();
        assert!(meta.modules.unwrap().contains_key("text2vec-openai"));
    }

    #[test]
    fn collection_list_decodes() {
        let list: CollectionList =
            serde_json::from_str(r#"{"collections":["Article","Author"]}"#).unwrap();
        assert_eq!(list.collections, vec!["Article", "Author"]);
    }

    #[test]
    fn collection_schema_is_camel_case_on_the_wire() {
        let body = r#"{
            "collection": {
                "name": "Article",
                "vectorizer": "text2vec-openai",
                "vectorIndexType": "hnsw",
                "properties": [
                    {
                        "name": "title",
                        "dataType": ["text"],
                        "indexFilterable": true,
                        "indexSearchable": true,
                        "tokenization": "word"
                    }
                ]
            }
        }"#;
        let envelope: CollectionEnvelope = serde_json::from_str(body).unwrap();
        let collection = envelope.collection;
        assert_eq!(collection.vector_index_type.as_deref(), Some("hnsw"));
        let prop = &collection.properties[0];
        assert_eq!(prop.data_type, vec!["text"]);
        assert_eq!(prop.index_filterable, Some(true));
        assert_eq!(prop.index_searchable, Some(true));
        assert!(prop.index_range_filters.is_none());
    }

    #[test]
    fn object_accepts_uuid_alias() {
        let obj: WeaviateObject = serde_json::from_str(
            r#"{"uuid":"11111111-2222-3333-4444-555555555555","properties":{"title":"hello"}}"#,
        )
        .unwrap();
        assert_eq!(obj.id, "11111111-2222-3333-4444-555555555555");
        assert_eq!(obj.properties["title"], "hello");
    }

    #[test]
    fn search_results_preserve_received_order() {
        let body = r#"{"results":[
            {"id":"a","properties":{},"score":0.9},
            {"id":"b","properties":{},"score":0.8},
            {"id":"c","properties":{},"score":0.1}
        ]}"#;
        let results: SearchResults = serde_json::from_str(body).unwrap();
        let scores: Vec<f64> = results
            .results
            .iter()
            .map(|r| r.relevance().unwrap())
            .collect();
        assert_eq!(scores, vec![0.9, 0.8, 0.1]);
    }

    #[test]
    fn search_result_relevance_prefers_score() {
        let with_distance: SearchResult =
            serde_json::from_str(r#"{"id":"a","distance":0.25}"#).unwrap();
        assert_eq!(with_distance.relevance(), Some(0.25));
        assert!(with_distance.score.is_none());
    }

    #[test]
    fn projection_request_body_uses_include_props_key() {
        let request = ProjectionRequest {
            collection: "Article".into(),
            limit: 500,
            dims: 3,
            include_props: Some(vec!["title".into()]),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"includeProps\":[\"title\"]"));

        let request = ProjectionRequest {
            include_props: None,
            ..request
        };
        assert!(!serde_json::to_string(&request).unwrap().contains("includeProps"));
    }

    #[test]
    fn projection_response_decodes() {
        let body = r#"{
            "collection": "Article",
            "dims": 3,
            "count": 2,
            "points": [
                {"id": "p0", "coords": [0.1, 0.2, 0.3], "properties": {"title": "a"}},
                {"id": "p1", "coords": [-1.0, 2.0, 0.5]}
            ]
        }"#;
        let response: ProjectionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.points[1].coords, vec![-1.0, 2.0, 0.5]);
        assert!(response.points[1].properties.is_none());
    }
}
