//! Rejected lookups emit debug records when the `log` feature is enabled

use std::sync::Mutex;

use ecdp_params::{require_curve_params, CurveId};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// Single test per binary: the logger is process-global.
#[test]
fn test_unsupported_lookups_are_logged() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    assert!(require_curve_params(CurveId::P256).is_ok());
    assert!(LOGGER.records.lock().unwrap().is_empty());

    assert!(require_curve_params(CurveId::None).is_err());
    assert!(CurveId::try_from(42u32).is_err());
    assert!(CurveId::from_name("ed25519").is_none());

    let records = LOGGER.records.lock().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|(level, _)| *level == Level::Debug));
    assert!(records[0].1.contains("none"));
    assert!(records[1].1.contains("42"));
    assert!(records[2].1.contains("ed25519"));
}
