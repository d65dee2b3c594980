use crate::core::render::render_page;
use crate::core::{ConfigProvider, Surface};
use crate::domain::model::SharePayload;
use crate::domain::ui_state::{ANALYZE_LABEL, LOADING_LABEL};
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Terminal-backed surface: alerts go to stderr and results to an HTML file.
#[derive(Debug)]
pub struct ConsoleSurface {
    base_path: String,
    report_filename: String,
    busy: AtomicBool,
}

impl ConsoleSurface {
    pub fn new(base_path: String, report_filename: String) -> Self {
        Self {
            base_path,
            report_filename,
            busy: AtomicBool::new(false),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.output_path().to_string(),
            config.report_filename().to_string(),
        )
    }

    pub fn report_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(&self.report_filename)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

impl Surface for ConsoleSurface {
    fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
        if busy {
            tracing::info!("⏳ {}", LOADING_LABEL);
        } else {
            tracing::debug!("Submit enabled: {}", ANALYZE_LABEL);
        }
    }

    fn alert(&self, message: &str) {
        tracing::warn!("Alert shown: {}", message);
        eprintln!("❌ {}", message);
    }

    fn show_results(&self, html: &str) -> Result<()> {
        let full_path = self.report_path();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, render_page(html)?)?;
        tracing::debug!("Report written to {}", full_path.display());
        println!("📁 Report saved to: {}", full_path.display());
        Ok(())
    }

    fn clear_results(&self) -> Result<()> {
        let full_path = self.report_path();
        if full_path.exists() {
            fs::remove_file(&full_path)?;
            tracing::info!("Removed {}", full_path.display());
        }
        Ok(())
    }

    fn reset_forms(&self) {
        // Form files belong to the user and are left alone.
        tracing::debug!("Form state reset");
    }

    fn supports_share(&self) -> bool {
        false
    }

    fn share(&self, payload: &SharePayload) -> Result<()> {
        println!("{}\n{}\n{}", payload.title, payload.text, payload.url);
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<bool> {
        // No clipboard in a terminal; print the link for the user to copy.
        println!("🔗 {}", text);
        Ok(false)
    }
}
