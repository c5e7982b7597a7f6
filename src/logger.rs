// src/logger.rs
use std::io;

use fern::Dispatch;
use log::LevelFilter;

fn logging_level() -> LevelFilter {
    match std::env::var("LETTER_TALLY_LOG").as_deref() {
        Ok("trace") => LevelFilter::Trace,
        Ok("debug") => LevelFilter::Debug,
        Ok("info") => LevelFilter::Info,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        Ok("off") => LevelFilter::Off,
        // stdout carries the results, so stay quiet by default
        _ => LevelFilter::Warn,
    }
}

pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().map_or(0, |l| l);

            out.finish(format_args!(
                "[{}]: {} <{}:{}>",
                record.level(),
                message,
                file,
                line,
            ));
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
