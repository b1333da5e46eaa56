//! Blocking client for the hosted food-recognition model.

use crate::config::ApiConfig;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detected label with its confidence in [0,1], as the provider returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Concept {
    pub name: String,
    pub value: f32,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("falha na requisição: {0}")]
    Http(#[from] reqwest::Error),
    #[error("o serviço respondeu com status {0}")]
    Status(StatusCode),
    #[error("resposta em formato inesperado: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("resposta sem outputs")]
    EmptyOutputs,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    user_app_id: UserAppId<'a>,
    inputs: [ImageInput<'a>; 1],
}

#[derive(Serialize)]
struct UserAppId<'a> {
    user_id: &'a str,
    app_id: &'a str,
}

#[derive(Serialize)]
struct ImageInput<'a> {
    data: InputData<'a>,
}

#[derive(Serialize)]
struct InputData<'a> {
    image: ImagePayload<'a>,
}

#[derive(Serialize)]
struct ImagePayload<'a> {
    base64: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    outputs: Vec<Output>,
}

#[derive(Deserialize)]
struct Output {
    data: OutputData,
}

#[derive(Deserialize)]
struct OutputData {
    concepts: Vec<Concept>,
}

pub struct ClassifyClient {
    http: Client,
    config: ApiConfig,
}

impl ClassifyClient {
    /// Build a client over the default blocking reqwest settings; no
    /// extra timeout or retry policy on top.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Send one image and return the detected concepts in provider order.
    pub fn classify(&self, image_base64: &str) -> Result<Vec<Concept>, ClassifyError> {
        let url = format!(
            "{}/v2/models/{}/versions/{}/outputs",
            self.config.base_url, self.config.model_id, self.config.model_version_id
        );
        let body = ClassifyRequest {
            user_app_id: UserAppId {
                user_id: &self.config.user_id,
                app_id: &self.config.app_id,
            },
            inputs: [ImageInput {
                data: InputData {
                    image: ImagePayload {
                        base64: image_base64,
                    },
                },
            }],
        };

        tracing::debug!(model = %self.config.model_id, "enviando imagem para classificação");
        let response = self.http.post(&url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status));
        }
        parse_concepts(&response.text()?)
    }
}

/// Strict parse of the provider body down to `outputs[0].data.concepts`.
fn parse_concepts(body: &str) -> Result<Vec<Concept>, ClassifyError> {
    let parsed: ClassifyResponse = serde_json::from_str(body).map_err(ClassifyError::Parse)?;
    let first = parsed
        .outputs
        .into_iter()
        .next()
        .ok_or(ClassifyError::EmptyOutputs)?;
    Ok(first.data.concepts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_the_provider_shape() {
        let body = ClassifyRequest {
            user_app_id: UserAppId {
                user_id: "clarifai",
                app_id: "main",
            },
            inputs: [ImageInput {
                data: InputData {
                    image: ImagePayload { base64: "aGk=" },
                },
            }],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "user_app_id": { "user_id": "clarifai", "app_id": "main" },
                "inputs": [ { "data": { "image": { "base64": "aGk=" } } } ]
            })
        );
    }

    #[test]
    fn parse_extracts_concepts_and_ignores_extra_fields() {
        let body = json!({
            "status": { "code": 10000, "description": "Ok" },
            "outputs": [ {
                "id": "abc",
                "data": {
                    "concepts": [
                        { "id": "c1", "name": "pizza", "value": 0.92 },
                        { "id": "c2", "name": "vegetable", "value": 0.3 }
                    ]
                }
            } ]
        })
        .to_string();

        let concepts = parse_concepts(&body).unwrap();
        assert_eq!(concepts.len(), 2);
        assert_eq!(concepts[0].name, "pizza");
        assert_eq!(concepts[1].name, "vegetable");
        assert!((concepts[1].value - 0.3).abs() < 1e-6);
    }

    #[test]
    fn parse_keeps_duplicate_names() {
        let body = json!({
            "outputs": [ { "data": { "concepts": [
                { "name": "rice", "value": 0.8 },
                { "name": "rice", "value": 0.6 }
            ] } } ]
        })
        .to_string();

        let concepts = parse_concepts(&body).unwrap();
        assert_eq!(concepts.len(), 2);
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = parse_concepts(r#"{"outputs": [{"data": {}}]}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::Parse(_)));

        let err = parse_concepts("not json at all").unwrap_err();
        assert!(matches!(err, ClassifyError::Parse(_)));
    }

    #[test]
    fn empty_outputs_is_its_own_error() {
        let err = parse_concepts(r#"{"outputs": []}"#).unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyOutputs));
    }
}
