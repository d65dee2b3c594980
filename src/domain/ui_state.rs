pub const ANALYZE_LABEL: &str = "Phân tích ngay";
pub const LOADING_LABEL: &str = "Đang phân tích...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Error {
        message: String,
    },
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit,
    Succeeded,
    Failed(String),
    Reset,
}

impl UiState {
    pub fn transition(self, event: UiEvent) -> UiState {
        match (self, event) {
            (_, UiEvent::Reset) => UiState::Idle,
            // Also a no-op while already submitting.
            (_, UiEvent::Submit) => UiState::Submitting,
            (UiState::Submitting, UiEvent::Succeeded) => UiState::Success,
            (UiState::Submitting, UiEvent::Failed(message)) => UiState::Error { message },
            // Completion events outside a submission are stale.
            (state, UiEvent::Succeeded) | (state, UiEvent::Failed(_)) => state,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, UiState::Submitting)
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            LOADING_LABEL
        } else {
            ANALYZE_LABEL
        }
    }

    pub fn results_visible(&self) -> bool {
        matches!(self, UiState::Success)
    }
}
