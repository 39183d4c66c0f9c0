//! Logger setup.

use log::LevelFilter;

/// Initializes the global logger. Messages go to stderr with a timestamp,
/// level and target. Intended to be called once, early in `main`.
pub fn init() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()
        .expect("logger already initialized");
}
