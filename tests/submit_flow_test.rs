use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use zodiac_match::domain::model::FormData;
use zodiac_match::domain::ui_state::UiState;
use zodiac_match::{ConsoleSurface, HttpAnalysisClient, SubmitController, ZodiacError};

const FORM: &str = r#"
[person1]
name = "Minh"
birthdate = "1994-12-28"
gender = "nam"
phone = "0901234567"
email = "minh@example.com"
address = "Hà Nội"

[person2]
name = "Lan"
birthdate = "1996-01-20"
gender = "nữ"
phone = "0907654321"
email = "lan@example.com"
address = "Huế"
"#;

fn controller(
    server: &MockServer,
    temp_dir: &TempDir,
) -> Result<SubmitController<HttpAnalysisClient, ConsoleSurface>> {
    let client = HttpAnalysisClient::new(&server.base_url())?;
    let surface = ConsoleSurface::new(
        temp_dir.path().to_str().unwrap().to_string(),
        "report.html".to_string(),
    );
    Ok(SubmitController::new(client, surface, server.url("/")))
}

#[tokio::test]
async fn test_end_to_end_analysis_writes_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/analyze").json_body_partial(
            r#"{
                "person1": {"name": "Minh", "birthdate": "1994-12-28", "zodiacSign": "capricorn"},
                "person2": {"name": "Lan", "address": "Huế", "zodiacSign": "aquarius"}
            }"#,
        );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "success": true,
                "timestamp": "2025-06-01T10:00:00",
                "compatibility_analysis": {
                    "compatibility_score": 76,
                    "compatibility_level": "Hai bạn có tiềm năng gắn kết lâu dài",
                    "zodiac_summary": "Ma Kết và Bảo Bình",
                    "strengths": "Bổ trợ lẫn nhau",
                    "love_benefits": "Tình cảm bền vững",
                    "product_recommendations": [
                        {
                            "name": "Nhẫn đôi cung hoàng đạo bạc cao cấp",
                            "description": "Chế tác từ bạc 925",
                            "price": "1,500,000 - 3,200,000 VNĐ",
                            "image_url": "https://img.example/ring.jpg",
                            "shop_url": "#"
                        },
                        {"name": "Đồng hồ đôi thông minh", "description": "Theo dõi sức khỏe"}
                    ]
                }
            }));
    });

    let mut controller = controller(&server, &temp_dir)?;
    let form = FormData::from_toml_str(FORM)?;
    controller.submit(&form).await?;

    api_mock.assert();
    assert_eq!(controller.state(), &UiState::Success);
    assert!(!controller.surface().is_busy());

    let report = std::fs::read_to_string(controller.surface().report_path())?;
    assert!(report.contains("result-container level-high"));
    assert!(report.contains("76%"));
    assert!(report.contains("Hai bạn có tiềm năng gắn kết lâu dài"));
    assert!(report.contains("💕 Tình cảm"));
    assert!(!report.contains("🏠 Đời sống"));
    assert_eq!(report.matches("product-item").count(), 2);
    assert_eq!(report.matches("<img").count(), 1);
    assert!(report.contains("Theo dõi sức khỏe"));

    Ok(())
}

#[tokio::test]
async fn test_http_failure_leaves_results_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/analyze");
        then.status(500)
            .json_body(json!({"error": "Internal server error", "message": "quota exceeded"}));
    });

    let mut controller = controller(&server, &temp_dir)?;
    let form = FormData::from_toml_str(FORM)?;
    let result = controller.submit(&form).await;

    api_mock.assert_hits(1);
    assert!(matches!(result, Err(ZodiacError::HttpStatus { status: 500 })));
    assert!(!controller.surface().is_busy());
    assert!(controller.state().submit_enabled());
    assert!(matches!(controller.state(), UiState::Error { .. }));
    assert!(!controller.surface().report_path().exists());

    Ok(())
}

#[tokio::test]
async fn test_rejected_analysis_then_retry_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let mut rejection = server.mock(|when, then| {
        when.method(POST).path("/api/analyze");
        then.status(200)
            .json_body(json!({"success": false, "error": "Missing person data"}));
    });

    let mut controller = controller(&server, &temp_dir)?;
    let form = FormData::from_toml_str(FORM)?;

    let result = controller.submit(&form).await;
    assert!(matches!(
        result,
        Err(ZodiacError::ServerRejected { ref message }) if message == "Missing person data"
    ));
    assert!(!controller.surface().report_path().exists());
    rejection.delete();

    server.mock(|when, then| {
        when.method(POST).path("/api/analyze");
        then.status(200)
            .json_body(json!({"success": true, "analysis": {"compatibility_score": 35}}));
    });

    controller.submit(&form).await?;
    let report = std::fs::read_to_string(controller.surface().report_path())?;
    assert!(report.contains("level-low"));
    assert!(report.contains("Đang phân tích..."));
    // no recommendations: canned products
    assert_eq!(report.matches("product-item").count(), 4);

    controller.analyze_again()?;
    assert_eq!(controller.state(), &UiState::Idle);
    assert!(!controller.surface().report_path().exists());

    Ok(())
}

#[tokio::test]
async fn test_success_without_analysis_renders_pending_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/analyze");
        then.status(200)
            .json_body(json!({"success": true, "timestamp": "2025-06-01T10:00:00"}));
    });

    let mut controller = controller(&server, &temp_dir)?;
    controller.submit(&FormData::from_toml_str(FORM)?).await?;

    assert_eq!(controller.state(), &UiState::Success);
    let report = std::fs::read_to_string(controller.surface().report_path())?;
    assert!(report.contains("level-medium"));
    assert!(report.contains("50%"));
    assert!(report.contains("Đang phân tích..."));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let client = HttpAnalysisClient::new("http://127.0.0.1:9")?;
    let surface = ConsoleSurface::new(
        temp_dir.path().to_str().unwrap().to_string(),
        "report.html".to_string(),
    );
    let mut controller = SubmitController::new(client, surface, "http://127.0.0.1:9/");

    let result = controller.submit(&FormData::from_toml_str(FORM)?).await;

    assert!(matches!(result, Err(ZodiacError::ApiError(_))));
    assert!(!controller.surface().is_busy());
    assert!(!controller.surface().report_path().exists());

    Ok(())
}
