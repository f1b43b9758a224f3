//! Section example
//!
//! Demonstrates explicit and scoped sections, muting, and the bitmask
//! console logger driven by a rate gate.
//!
//! Run with: cargo run --example sections

use section_logger::prelude::*;
use section_logger::{debug, info, section};
use std::thread;
use std::time::Duration;

fn load_config(logger: &mut Logger) -> Result<()> {
    let mut section = ScopedSection::new(logger, "load config")?;
    info!(section, "reading {}", "settings.json")?;
    {
        let mut validate = section!(section, "validate")?;
        debug!(validate, "{} keys checked", 12)?;
    }
    info!(section, "done")?;
    Ok(())
}

fn main() -> Result<()> {
    println!("=== Section Logger - Sections Example ===\n");

    let mut logger = Logger::console("sections");

    println!("1. Explicit start/end:");
    logger.start_section("startup")?;
    logger.info("opening resources")?;
    logger.end_section("startup")?;

    println!("\n2. Scoped sections close themselves:");
    load_config(&mut logger)?;

    println!("\n3. Muting a noisy stretch:");
    {
        let mut quiet = ScopedSection::muted(&mut logger);
        quiet.critical("never printed")?;
    }
    logger.info("logging is back")?;

    println!("\n4. A section guard that can be switched off:");
    let verbose = false;
    {
        let mut maybe = ScopedSection::with_logging(&mut logger, "optional", verbose)?;
        maybe.info("only shown when verbose")?;
    }

    println!("\n5. Rate-limited console logging at 20 Hz, frames every 10 ms:");
    let console = ConsoleLogger::stdout().with_name("frames");
    let mut frames = RateLimitedLogger::new(console, 20.0)?;
    for frame in 0..30 {
        frames.tick();
        frames.info(format_args!("frame {}", frame))?;
        thread::sleep(Duration::from_millis(10));
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
