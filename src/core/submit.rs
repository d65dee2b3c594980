use crate::core::render::{render_report, resolve_payload, PAGE_TITLE};
use crate::core::{AnalysisApi, Surface};
use crate::domain::model::{FormData, SharePayload};
use crate::domain::ui_state::{UiEvent, UiState};
use crate::utils::error::{Result, ZodiacError};
use serde_json::Value;

pub const ANALYSIS_FAILED_ALERT: &str = "Có lỗi xảy ra trong quá trình phân tích. Vui lòng thử lại!";
pub const MISSING_PAYLOAD_ALERT: &str = "Không nhận được dữ liệu phân tích. Vui lòng thử lại!";
pub const LINK_COPIED_ALERT: &str = "Đã copy link để chia sẻ!";
pub const SHARE_TEXT: &str =
    "Tôi vừa phân tích mức độ tương thích cung hoàng đạo. Cùng thử xem kết quả của bạn nhé!";
pub const DEFAULT_REJECTION: &str = "Analysis failed";

/// Holds the surface busy for as long as it lives.
pub struct BusyGuard<'a, S: Surface> {
    surface: &'a S,
}

impl<'a, S: Surface> BusyGuard<'a, S> {
    pub fn acquire(surface: &'a S) -> Self {
        surface.set_busy(true);
        Self { surface }
    }
}

impl<S: Surface> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_busy(false);
    }
}

pub struct SubmitController<A: AnalysisApi, S: Surface> {
    api: A,
    surface: S,
    page_url: String,
    state: UiState,
}

impl<A: AnalysisApi, S: Surface> SubmitController<A, S> {
    pub fn new(api: A, surface: S, page_url: impl Into<String>) -> Self {
        Self {
            api,
            surface,
            page_url: page_url.into(),
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn apply(&mut self, event: UiEvent) {
        let previous = std::mem::take(&mut self.state);
        self.state = previous.transition(event);
        tracing::debug!("UI state: {:?}", self.state);
    }

    /// Handles one form submission end to end.
    ///
    /// Failures are logged and alerted here; the returned error is for the caller's exit status.
    pub async fn submit(&mut self, form: &FormData) -> Result<()> {
        if self.state.is_busy() {
            tracing::warn!("Ignoring submit while an analysis is in flight");
            return Err(ZodiacError::Busy);
        }
        self.apply(UiEvent::Submit);

        let outcome = {
            let _busy = BusyGuard::acquire(&self.surface);
            let outcome = Self::run(&self.api, &self.surface, form).await;
            if let Err(e) = &outcome {
                tracing::error!(
                    "Error during analysis: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                self.surface.alert(alert_message(e));
            }
            outcome
        };

        match &outcome {
            Ok(()) => self.apply(UiEvent::Succeeded),
            Err(e) => self.apply(UiEvent::Failed(e.to_string())),
        }
        outcome
    }

    async fn run(api: &A, surface: &S, form: &FormData) -> Result<()> {
        let request = form.to_request()?;
        tracing::info!(
            "Analyzing {} ({}) and {} ({})",
            request.person1.name,
            request.person1.zodiac_sign,
            request.person2.name,
            request.person2.zodiac_sign
        );

        let body = api.analyze(&request).await?;
        ensure_success(&body)?;

        if let Some(timestamp) = body.get("timestamp").and_then(Value::as_str) {
            tracing::debug!("Analysis generated at {}", timestamp);
        }

        let result = resolve_payload(&body)?;
        let html = render_report(&result)?;
        surface.show_results(&html)?;

        tracing::info!(
            "Compatibility score {} ({})",
            result.score(),
            result.tier().as_str()
        );
        Ok(())
    }

    pub fn share_payload(&self) -> SharePayload {
        share_payload(&self.page_url)
    }

    pub fn share(&self) -> Result<()> {
        share(&self.surface, &self.page_url)
    }

    pub fn analyze_again(&mut self) -> Result<()> {
        clear_page(&self.surface)?;
        self.apply(UiEvent::Reset);
        Ok(())
    }
}

pub fn share_payload(page_url: &str) -> SharePayload {
    SharePayload {
        title: PAGE_TITLE.to_string(),
        text: SHARE_TEXT.to_string(),
        url: page_url.to_string(),
    }
}

/// Opens the share sheet, or copies the page link when none is available.
pub fn share<S: Surface>(surface: &S, page_url: &str) -> Result<()> {
    let payload = share_payload(page_url);
    if surface.supports_share() {
        return surface.share(&payload);
    }

    if surface.copy_to_clipboard(&payload.url)? {
        surface.alert(LINK_COPIED_ALERT);
    }
    Ok(())
}

/// Hides the results and empties the forms.
pub fn clear_page<S: Surface>(surface: &S) -> Result<()> {
    surface.clear_results()?;
    surface.reset_forms();
    Ok(())
}

/// Treats anything but `success: true` as a rejection.
pub fn ensure_success(body: &Value) -> Result<()> {
    if body.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(());
    }

    let message = ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .unwrap_or(DEFAULT_REJECTION)
        .to_string();
    Err(ZodiacError::ServerRejected { message })
}

fn alert_message(error: &ZodiacError) -> &'static str {
    match error {
        ZodiacError::MissingPayload => MISSING_PAYLOAD_ALERT,
        _ => ANALYSIS_FAILED_ALERT,
    }
}
