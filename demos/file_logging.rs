//! File logging example
//!
//! Demonstrates a JSON-configured logger with a console sink and a rotating
//! file sink, then reads the file back into a section tree.
//!
//! Run with: cargo run --example file_logging

use section_logger::parse;
use section_logger::prelude::*;
use std::env;

fn main() -> Result<()> {
    println!("=== Section Logger - File Logging Example ===\n");

    let log_dir = env::temp_dir().join("section_logger_demo");
    let log_path = log_dir.join("demo.log");

    let json = format!(
        r#"{{
            "name": "file_demo",
            "level": "debug",
            "sinks": [
                {{ "type": "stdout", "color": true }},
                {{ "type": "rotating_file", "path": {}, "max_size": 65536, "max_files": 2 }}
            ]
        }}"#,
        serde_json::to_string(&log_path)?
    );

    let config = LoggerConfig::from_json(&json)?;
    let mut logger = Logger::from_config(&config)?;

    {
        let mut import = ScopedSection::new(&mut logger, "import")?;
        for batch in 0..3 {
            let mut step = ScopedSection::new(&mut import, format_args!("batch {}", batch))?;
            step.debug(format_args!("{} records", (batch + 1) * 100))?;
        }
        import.warn("1 record skipped")?;
    }
    logger.flush()?;

    println!("\nLog written to {}", log_path.display());

    let root = parse::parse_file(&log_path)?;
    for section in root.sections() {
        let millis = section.duration().map(|d| d.num_microseconds().unwrap_or(0) as f64 / 1000.0);
        println!(
            "section '{}' with {} children took {:.3} ms",
            section.name,
            section.children.len(),
            millis.unwrap_or(0.0)
        );
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
