use crate::domain::model::{AnalyzeRequest, HealthStatus, Horoscope, SharePayload};
use crate::domain::zodiac::ZodiacSign;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_url(&self) -> &str;
    fn report_filename(&self) -> &str;
}

/// Remote analysis service.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Posts both people and returns the decoded body of a 2xx response.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<serde_json::Value>;
    async fn horoscope(&self, sign: ZodiacSign) -> Result<Horoscope>;
    async fn health(&self) -> Result<HealthStatus>;
}

/// The page the handler drives: busy indicator, alerts, results area and share sheet.
pub trait Surface: Send + Sync {
    fn set_busy(&self, busy: bool);
    fn alert(&self, message: &str);
    fn show_results(&self, html: &str) -> Result<()>;
    fn clear_results(&self) -> Result<()>;
    fn reset_forms(&self);
    fn supports_share(&self) -> bool;
    fn share(&self, payload: &SharePayload) -> Result<()>;
    /// Returns `false` when the text could only be shown, not copied.
    fn copy_to_clipboard(&self, text: &str) -> Result<bool>;
}
