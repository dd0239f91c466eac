//! Runtime configuration snapshots
//!
//! The backend owns the live values (database URL/port, Docker network,
//! stored API keys); the dashboard only ever holds the last-fetched snapshot,
//! valid until the next fetch or the next successful save.

use serde::{Deserialize, Serialize};

/// `GET /api/database/url` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseUrl {
    pub url: String,
}

/// `GET /api/database/port` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabasePort {
    pub port: u16,
}

/// `GET /api/docker/network` response. An empty string means the backend is
/// not attached to any network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerNetwork {
    pub network: String,
}

/// `GET /api/docker/networks` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerNetworkList {
    pub networks: Vec<String>,
}

/// `GET /api/keys` response. Only key names are listed; values are
/// write-only and never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyList {
    pub keys: Vec<String>,
}

/// Generic acknowledgement returned by the configuration write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_snapshots_decode() {
        let url: DatabaseUrl = serde_json::from_str(r#"{"url":"localhost"}"#).unwrap();
        assert_eq!(url.url, "localhost");

        let port: DatabasePort = serde_json::from_str(r#"{"port":3131}"#).unwrap();
        assert_eq!(port.port, 3131);

        let network: DockerNetwork = serde_json::from_str(r#"{"network":""}"#).unwrap();
        assert!(network.network.is_empty());

        let networks: DockerNetworkList =
            serde_json::from_str(r#"{"networks":["bridge","weaviate-net"]}"#).unwrap();
        assert_eq!(networks.networks.len(), 2);
    }

    #[test]
    fn key_list_contains_names_only() {
        let keys: KeyList = serde_json::from_str(r#"{"keys":["OPENAI_API_KEY"]}"#).unwrap();
        assert_eq!(keys.keys, vec!["OPENAI_API_KEY"]);
    }
}
