use java2js::config::runtime::{self, RuntimeConfig};
use java2js::{logging, pipeline};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
struct CliOptions {
    path: Option<PathBuf>,
    watch: bool,
    help: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match RuntimeConfig::discover() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };
    runtime::install(config)?;

    // Initialize global logging system
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("java2js");
    let options = parse_args(args.get(1..).unwrap_or_default());

    if options.help {
        print_help(program_name);
        return Ok(());
    }

    if options.watch {
        java2js::log_warning!("Watch mode is not implemented; translating once");
    }

    let Some(input_path) = options.path else {
        eprintln!("Usage: {} <input.java> [options]", program_name);
        eprintln!("       {} --help", program_name);
        std::process::exit(1);
    };

    process_single_file(&input_path);

    Ok(())
}

fn print_help(program_name: &str) {
    println!("java2js v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", pipeline::get_pipeline_info().summary());
    println!();
    println!("USAGE:");
    println!(
        "    {} <input.java>                   # Translate one file",
        program_name
    );
    println!(
        "    {} --path <input.java>            # Same, named form",
        program_name
    );
    println!();
    println!("OPTIONS:");
    println!("    -h, --help          Show this help message");
    println!("    -path, --path P     Input path (wins over the positional path)");
    println!("    -watch, --watch     Accepted for compatibility; not implemented");
    println!();
    println!("OUTPUT:");
    println!("    Foo.java is written to Foo.js next to it.");
    println!("    Files not ending in .java are ignored.");
    println!();

    println!("PIPELINE:");
    for line in pipeline::get_pipeline_info().report().lines() {
        println!("    {}", line);
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut positional: Option<PathBuf> = None;
    let mut named: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                options.help = true;
            }
            "-path" | "--path" => {
                if let Some(value) = args.get(i + 1) {
                    named = Some(PathBuf::from(value));
                    i += 1;
                } else {
                    eprintln!("Warning: {} requires a path", args[i]);
                }
            }
            "-watch" | "--watch" => {
                options.watch = true;
            }
            other if other.starts_with('-') => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            other => {
                if positional.is_none() {
                    positional = Some(PathBuf::from(other));
                } else {
                    eprintln!("Warning: Ignoring extra argument '{}'", other);
                }
            }
        }
        i += 1;
    }

    options.path = named.or(positional);
    options
}

fn process_single_file(file_path: &Path) {
    match pipeline::process_file(file_path) {
        Ok(_) => {}
        Err(error) if error.is_skipped_input() => {}
        Err(error) if error.is_translation_error() => {
            println!("{}", error);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}
