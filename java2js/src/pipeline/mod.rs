//! End-to-end translation: read, tokenize, transform, write

mod error;
mod info;
mod result;
mod validation;

pub use error::PipelineError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::{PipelineResult, Translation};
pub use validation::validate_pipeline;

use crate::config::runtime::{self, RuntimeConfig};
use crate::file_processor::FileProcessor;
use crate::lexical::LexicalAnalyzer;
use crate::logging;
use crate::transform::Transformer;
use std::path::Path;
use std::time::Instant;

/// Translate Java source text to JavaScript
pub fn translate_source(source: &str) -> Result<String, PipelineError> {
    translate_source_with_config(source, &runtime::current())
}

pub fn translate_source_with_config(
    source: &str,
    config: &RuntimeConfig,
) -> Result<String, PipelineError> {
    Ok(translate(source, config)?.javascript)
}

/// Translate source text and keep the metrics of both stages
pub fn translate(source: &str, config: &RuntimeConfig) -> Result<Translation, PipelineError> {
    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let tokens = analyzer.tokenize(source)?;
    let token_count = tokens.len();

    let mut transformer = Transformer::with_preferences(config.transform.clone());
    let javascript = transformer.transform(tokens)?;

    Ok(Translation {
        javascript,
        token_count,
        lexical_metrics: analyzer.metrics().clone(),
        transform_metrics: transformer.metrics().clone(),
    })
}

/// Read, translate and write one `.java` file with the installed configuration
pub fn process_file(path: &Path) -> Result<PipelineResult, PipelineError> {
    process_file_with_config(path, &runtime::current())
}

/// Read, translate and write one `.java` file.
///
/// Nothing is written unless translation succeeds.
pub fn process_file_with_config(
    path: &Path,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    let file_path = path.display().to_string();

    logging::with_file_context(path, || {
        let start_time = Instant::now();
        crate::log_info!("Starting translation", "file" => file_path.as_str());

        let processor = FileProcessor::from_preferences(&config.file_processor);
        let file_result = processor.read_source(path)?;
        let translation = translate(&file_result.source, config)?;
        let output_path = processor.write_output(path, &translation.javascript)?;

        let result = PipelineResult::new(
            file_result.metadata,
            translation,
            Some(output_path),
            start_time.elapsed(),
        );
        result.log_success(&file_path);

        Ok(result)
    })
}

/// Read and translate one `.java` file without writing anything
pub fn translate_file(path: &Path) -> Result<PipelineResult, PipelineError> {
    let config = runtime::current();
    let file_path = path.display().to_string();

    logging::with_file_context(path, || {
        let start_time = Instant::now();
        let file_result = FileProcessor::from_preferences(&config.file_processor).read_source(path)?;
        let translation = translate(&file_result.source, &config)?;

        let result = PipelineResult::new(file_result.metadata, translation, None, start_time.elapsed());
        result.log_success(&file_path);
        Ok(result)
    })
}
