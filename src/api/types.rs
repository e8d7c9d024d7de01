//! Request and response bodies exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Body of `POST /api/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Query parameters of `GET /api/search`.
///
/// Only `domain` is set by the interactive search screen. The remaining filters are
/// understood by the backend and sent only when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
}

impl SearchQuery {
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }
}

/// Successful search answer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub name: String,
    pub results: Vec<CompanyRecord>,
}

/// One company returned by the search endpoint.
///
/// The backend forwards full registry records; only these fields are used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyRecord {
    pub siren: String,
    pub nom_raison_sociale: String,
    pub score: f64,
}

impl CompanyRecord {
    /// `"{name} - SIREN {siren} - Score {score:.2}"`
    pub fn display_line(&self) -> String {
        format!(
            "{} - SIREN {} - Score {:.2}",
            self.nom_raison_sociale, self.siren, self.score
        )
    }
}

/// `{"error": "..."}` body returned on failures
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_line_rounds_score() {
        let record = CompanyRecord {
            siren: "123".to_string(),
            nom_raison_sociale: "Acme".to_string(),
            score: 0.8,
        };
        assert_eq!(record.display_line(), "Acme - SIREN 123 - Score 0.80");
    }

    #[test]
    fn test_search_response_ignores_extra_fields() {
        let body = r#"{
            "name": "ACME Corp",
            "results": [
                {"siren": "123", "nom_raison_sociale": "Acme", "score": 0.8, "siege": {"commune": "Paris"}}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.name, "ACME Corp");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].siren, "123");
    }

    #[test]
    fn test_search_query_skips_unset_filters() {
        let query = SearchQuery {
            region: Some("11".to_string()),
            ..SearchQuery::domain("acme.fr")
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["domain"], "acme.fr");
        assert_eq!(value["region"], "11");
        assert!(value.get("ape").is_none());
        assert!(value.get("ville").is_none());
    }

    proptest! {
        #[test]
        fn score_always_has_two_decimals(score in 0.0f64..1000.0) {
            let record = CompanyRecord {
                siren: "1".to_string(),
                nom_raison_sociale: "X".to_string(),
                score,
            };
            let line = record.display_line();
            let formatted = line.rsplit("Score ").next().unwrap();
            let decimals = formatted.split('.').nth(1).unwrap();
            prop_assert_eq!(decimals.len(), 2);
        }
    }
}
