use crate::file_processor::FileMetadata;
use crate::lexical::LexicalMetrics;
use crate::transform::TransformMetrics;
use std::path::PathBuf;
use std::time::Duration;

/// Translation of one source text, independent of where it came from
#[derive(Debug, Clone)]
pub struct Translation {
    pub javascript: String,
    pub token_count: usize,
    pub lexical_metrics: LexicalMetrics,
    pub transform_metrics: TransformMetrics,
}

/// Outcome of translating one `.java` file
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub file_metadata: FileMetadata,
    pub translation: Translation,
    /// Set once the JavaScript has been written
    pub output_path: Option<PathBuf>,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        file_metadata: FileMetadata,
        translation: Translation,
        output_path: Option<PathBuf>,
        processing_duration: Duration,
    ) -> Self {
        Self {
            file_metadata,
            translation,
            output_path,
            processing_duration,
        }
    }

    pub fn javascript(&self) -> &str {
        &self.translation.javascript
    }

    pub fn token_count(&self) -> usize {
        self.translation.token_count
    }

    pub fn log_success(&self, file_path: &str) {
        let seconds = self.processing_duration.as_secs_f64();
        let output = self
            .output_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "-".to_string());

        crate::log_success!(
            crate::logging::codes::success::TRANSLATION_COMPLETE,
            "Translation succeeded",
            "file" => file_path,
            "output" => output,
            "tokens" => self.token_count(),
            "duration_ms" => format!("{:.2}", seconds * 1000.0),
            "processing_rate_tokens_per_sec" => format!("{:.0}",
                if seconds > 0.0 { self.token_count() as f64 / seconds } else { 0.0 })
        );
    }
}
