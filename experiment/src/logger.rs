use std::io::Write;

use log::{log_enabled, Level};

/// Sets up `env_logger` for the given number of `--verbose` flags. `RUST_LOG` takes precedence.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();

    builder
        .filter_level(verbosity_level(verbosity).to_level_filter())
        .parse_default_env()
        .format(|f, record| {
            let style = f.default_level_style(record.level()).bold();

            write!(f, "{style}{:>5}{style:#} ", prettyprint_level(record.level()))?;

            if log_enabled!(Level::Debug) {
                write!(f, "[{}] ", record.target())?;
            }

            writeln!(f, "{}", record.args())
        })
        .init();
}

/// This maps the occurrence of `--verbose` flags to the correct log level
fn verbosity_level(num: u8) -> Level {
    match num {
        0 => Level::Info,
        1 => Level::Debug,
        2..=u8::MAX => Level::Trace,
    }
}

/// The default string representation for `Level` is all uppercase which is hard to scan next to
/// the table output.
fn prettyprint_level(lvl: Level) -> &'static str {
    match lvl {
        Level::Error => "Error",
        Level::Warn => "Warn",
        Level::Info => "Info",
        Level::Debug => "Debug",
        Level::Trace => "Trace",
    }
}
