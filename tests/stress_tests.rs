//! Stress tests for concurrent and high-volume use
//!
//! These tests verify:
//! - A logger shared behind an external mutex loses no lines
//! - Several loggers can write through one shared sink
//! - Concurrent registration hands out unique names
//! - Rotation under volume keeps the backup count bounded

use parking_lot::Mutex;
use section_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn test_shared_logger_under_contention() {
    let capture = shared(MemorySink::new());
    let mut logger = Logger::with_registry("contended", Arc::new(LoggerRegistry::new()));
    logger.add_sink(capture.clone());
    let logger = Arc::new(Mutex::new(logger));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let mut logger = logger.lock();
                    logger.start_section(format_args!("t{}", t)).unwrap();
                    logger.info(format_args!("thread {} message {}", t, i)).unwrap();
                    logger.end_section(format_args!("t{}", t)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    assert_eq!(capture.lock().len(), THREADS * PER_THREAD * 3);
    assert_eq!(logger.lock().section_depth(), 0);

    // Holding the lock across a section keeps each triple together.
    let lines = capture.lock().lines();
    for triple in lines.chunks(3) {
        assert!(triple[0].contains("=== start"));
        assert!(triple[1].starts_with("    | thread"));
        assert!(triple[2].contains("===   end"));
    }
}

#[test]
fn test_many_loggers_one_sink() {
    let capture = shared(MemorySink::new());
    let registry = Arc::new(LoggerRegistry::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let capture = capture.clone();
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut logger = Logger::with_registry("worker", registry);
                logger.add_sink(capture);
                for i in 0..PER_THREAD {
                    logger.warn(format_args!("{}", i)).unwrap();
                }
                logger.name().to_string()
            })
        })
        .collect();

    let names: HashSet<String> = handles
        .into_iter()
        .map(|h| h.join().expect("logging thread panicked"))
        .collect();

    assert_eq!(names.len(), THREADS);
    assert_eq!(capture.lock().len(), THREADS * PER_THREAD);
    assert!(registry.is_empty(), "dropped loggers release their names");
}

#[test]
fn test_concurrent_registration_is_unique() {
    let registry = Arc::new(LoggerRegistry::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || (0..50).map(|_| registry.register("app")).collect::<Vec<_>>())
        })
        .collect();

    let mut all = HashSet::new();
    for handle in handles {
        for name in handle.join().expect("registration thread panicked") {
            assert!(all.insert(name), "duplicate name handed out");
        }
    }
    assert_eq!(all.len(), THREADS * 50);
    assert!(all.contains("app"));
}

#[test]
fn test_rotation_under_volume() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("volume.log");

    let mut logger = Logger::with_registry("volume", Arc::new(LoggerRegistry::new()));
    logger.add_rotating_file_sink(&log_file, 4 * 1024, 3).unwrap();

    for i in 0..5_000 {
        logger.error(format_args!("line {} with some padding to fill the file", i)).unwrap();
    }
    logger.flush().unwrap();

    let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 4, "base file plus three backups");
    for n in 1..=3 {
        let backup = temp_dir.path().join(format!("volume.log.{}", n));
        assert!(std::fs::metadata(backup).unwrap().len() <= 4 * 1024);
    }
    assert_eq!(logger.metrics().sink_failures(), 0);
}
