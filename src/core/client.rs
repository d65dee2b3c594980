use crate::core::{AnalysisApi, ConfigProvider};
use crate::domain::model::{AnalyzeRequest, HealthStatus, Horoscope};
use crate::domain::zodiac::ZodiacSign;
use crate::utils::error::{Result, ZodiacError};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

pub const ANALYZE_PATH: &str = "api/analyze";
pub const HOROSCOPE_PATH: &str = "api/horoscope/";
pub const HEALTH_PATH: &str = "health";

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: Url,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("client.base_url", base_url)?;

        let mut base_url = Url::parse(base_url)?;
        // Endpoint paths are joined relative to the base path.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            Ok(response)
        } else {
            Err(ZodiacError::HttpStatus {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<Value> {
        let url = self.endpoint(ANALYZE_PATH)?;
        tracing::debug!(
            "Making API request to: {} ({} + {})",
            url,
            request.person1.zodiac_sign,
            request.person2.zodiac_sign
        );

        let response = self.client.post(url).json(request).send().await?;
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn horoscope(&self, sign: ZodiacSign) -> Result<Horoscope> {
        let url = self.endpoint(&format!("{}{}", HOROSCOPE_PATH, sign.id()))?;
        tracing::debug!("Making API request to: {}", url);

        let response = Self::check_status(self.client.get(url).send().await?)?;
        let body: Value = response.json().await?;

        if !body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Horoscope lookup failed")
                .to_string();
            return Err(ZodiacError::ServerRejected { message });
        }

        match body.get("data") {
            Some(data) => Ok(serde_json::from_value(data.clone())?),
            None => Ok(Horoscope::default()),
        }
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_PATH)?;
        tracing::debug!("Making API request to: {}", url);

        let response = Self::check_status(self.client.get(url).send().await?)?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PersonInput;
    use httpmock::prelude::*;
    use serde_json::json;

    fn person(name: &str, birthdate: &str, sign: ZodiacSign) -> PersonInput {
        PersonInput {
            name: name.to_string(),
            birthdate: birthdate.to_string(),
            gender: "nữ".to_string(),
            phone: "0900000000".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "Đà Nẵng".to_string(),
            zodiac_sign: sign,
        }
    }

    fn request() -> AnalyzeRequest {
        AnalyzeRequest {
            person1: person("Lan", "1996-08-01", ZodiacSign::Leo),
            person2: person("Hoa", "1997-03-30", ZodiacSign::Aries),
        }
    }

    #[tokio::test]
    async fn test_analyze_posts_both_people() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/analyze")
                .json_body_partial(
                    r#"{"person1": {"name": "Lan", "zodiacSign": "leo"}, "person2": {"zodiacSign": "aries"}}"#,
                );
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"success": true, "compatibility_analysis": {"compatibility_score": 92}}));
        });

        let client = HttpAnalysisClient::new(&server.base_url()).unwrap();
        let body = client.analyze(&request()).await.unwrap();

        api_mock.assert();
        assert_eq!(body["compatibility_analysis"]["compatibility_score"], 92);
    }

    #[tokio::test]
    async fn test_analyze_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/analyze");
            then.status(500)
                .json_body(json!({"error": "Internal server error", "message": "boom"}));
        });

        let client = HttpAnalysisClient::new(&server.base_url()).unwrap();
        let result = client.analyze(&request()).await;

        api_mock.assert();
        assert!(matches!(result, Err(ZodiacError::HttpStatus { status: 500 })));
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/zodiac/health");
            then.status(200)
                .json_body(json!({"status": "healthy", "timestamp": "2025-01-01T00:00:00"}));
        });

        let client = HttpAnalysisClient::new(&server.url("/zodiac")).unwrap();
        let health = client.health().await.unwrap();

        api_mock.assert();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.timestamp.as_deref(), Some("2025-01-01T00:00:00"));
    }

    #[tokio::test]
    async fn test_horoscope_lookup() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/horoscope/capricorn");
            then.status(200).json_body(json!({
                "success": true,
                "sign": "capricorn",
                "data": {"description": "Ma Kết kiên định", "mood": "Kỷ luật", "lucky_number": "7"}
            }));
        });

        let client = HttpAnalysisClient::new(&server.base_url()).unwrap();
        let horoscope = client.horoscope(ZodiacSign::Capricorn).await.unwrap();

        api_mock.assert();
        assert_eq!(horoscope.description.as_deref(), Some("Ma Kết kiên định"));
        assert_eq!(horoscope.lucky_number.as_deref(), Some("7"));
        assert_eq!(horoscope.color, None);
    }

    #[tokio::test]
    async fn test_horoscope_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/horoscope/leo");
            then.status(200)
                .json_body(json!({"success": false, "error": "Invalid zodiac sign"}));
        });

        let client = HttpAnalysisClient::new(&server.base_url()).unwrap();
        let result = client.horoscope(ZodiacSign::Leo).await;

        assert!(matches!(
            result,
            Err(ZodiacError::ServerRejected { message }) if message == "Invalid zodiac sign"
        ));
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpAnalysisClient::new("ftp://example.com").is_err());
        assert!(HttpAnalysisClient::new("").is_err());
    }
}
