pub mod client;
pub mod form;
pub mod render;
pub mod submit;

pub use crate::domain::model::{AnalyzeRequest, CompatibilityResult, FormData, PersonInput};
pub use crate::domain::ports::{AnalysisApi, ConfigProvider, Surface};
pub use crate::utils::error::Result;
