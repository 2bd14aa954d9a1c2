use crate::config::constants::compile_time::file_processing::{
    MAX_FILE_SIZE, OUTPUT_EXTENSION, SOURCE_EXTENSION,
};

/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub pipeline_stages: usize,
    pub source_extension: &'static str,
    pub output_extension: &'static str,
    pub max_file_size: u64,
    pub indent_width: usize,
    pub global_logging_enabled: bool,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        format!(
            "java2js translation pipeline:\n\
             - Pipeline Stages: {}\n\
             - Input: .{}\n\
             - Output: .{}\n\
             - Max File Size: {} MB\n\
             - Indent Width: {}\n\
             - Global Logging: {}",
            self.pipeline_stages,
            self.source_extension,
            self.output_extension,
            self.max_file_size / (1024 * 1024),
            self.indent_width,
            self.global_logging_enabled
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{}-stage .{} to .{} translator",
            self.pipeline_stages, self.source_extension, self.output_extension
        )
    }
}

pub fn get_pipeline_info() -> PipelineInfo {
    let config = crate::config::runtime::current();
    PipelineInfo {
        pipeline_stages: 3,
        source_extension: SOURCE_EXTENSION,
        output_extension: OUTPUT_EXTENSION,
        max_file_size: MAX_FILE_SIZE,
        indent_width: config.transform.indent_width,
        global_logging_enabled: crate::logging::is_initialized(),
    }
}
