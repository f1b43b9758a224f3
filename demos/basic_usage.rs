//! Basic logger usage example
//!
//! Demonstrates console logging at every severity, threshold changes and
//! runtime templates.
//!
//! Run with: cargo run --example basic_usage

use section_logger::prelude::*;
use section_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Section Logger - Basic Usage Example ===\n");

    let mut logger = Logger::console("basic");
    logger.set_level(Severity::Trace);

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message")?;
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn("This is a warning message")?;
    logger.error("This is an error message")?;
    logger.critical("This is a critical message")?;

    println!("\n2. Raising the threshold to info:");
    logger.set_level(Severity::Info);
    logger.debug("Debug message (hidden)")?;
    info!(logger, "Info message (visible), {} of {}", 1, 2)?;
    warn!(logger, "Warning message (visible), {} of {}", 2, 2)?;

    println!("\n3. Multi-line messages keep their alignment:");
    logger.error("first line\nsecond line\nthird line")?;

    println!("\n4. Runtime templates:");
    logger.log_template(Severity::Info, "{1} follows {0}", &[&"load", &"parse"])?;
    if let Err(e) = logger.log_template(Severity::Info, "{} and {}", &[&"only one"]) {
        println!("   template rejected: {}", e);
    }

    println!("\n5. A custom pattern:");
    logger.set_pattern("%Y-%m-%d %T [%n] %L: %v");
    logger.info("with date, logger name and short label")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
