use java2js::config::RuntimeConfig;
use java2js::pipeline;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.transform.indent_width = 4;
    config.file_processor.overwrite_existing_output = true;
    config
}

/// Trailing whitespace on each line is not significant
fn normalize(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn fixture(name: &str) -> String {
    fs::read_to_string(Path::new(FIXTURES).join(name)).unwrap()
}

#[test]
fn translates_parser_sample() {
    let javascript = pipeline::translate_source_with_config(&fixture("Main.java"), &config()).unwrap();
    assert_eq!(normalize(&javascript), normalize(&fixture("Main.js")));
}

#[test]
fn writes_js_next_to_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("Main.java");
    fs::write(&source, fixture("Main.java")).unwrap();

    let result = pipeline::process_file_with_config(&source, &config()).unwrap();
    let output = dir.path().join("Main.js");
    assert_eq!(result.output_path.as_deref(), Some(output.as_path()));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, result.javascript());
    assert_eq!(normalize(&written), normalize(&fixture("Main.js")));
}

#[test]
fn header_lines_are_dropped() {
    let javascript = pipeline::translate_source_with_config(&fixture("Main.java"), &config()).unwrap();
    assert!(!javascript.contains("package"));
    assert!(!javascript.contains("//"));
    assert!(javascript.starts_with("import \"java.io.File\";\n"));
}
