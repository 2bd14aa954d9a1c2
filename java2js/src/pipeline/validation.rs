/// Validate that every stage is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    crate::file_processor::validate_file_processor()?;
    crate::lexical::validate_tokenization()?;
    crate::transform::validate_transform()?;

    if crate::grammar::keywords::reserved_keywords().count() == 0 {
        return Err("Keyword table is empty".to_string());
    }

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => 3,
        "file_processing" => true,
        "lexical_analysis" => true,
        "transform" => true
    );

    Ok(())
}
