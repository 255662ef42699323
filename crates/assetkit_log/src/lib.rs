//! Console logging for the asset tools.
//!
//! Progress lines are plain messages on stdout. `RUST_LOG` overrides the
//! default `info` level, e.g. `RUST_LOG=debug` to see skipped entries.

use std::io::Write;
use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the global logger. Later calls are no-ops.
pub fn init_logger() {
    INIT.call_once(|| {
        let res_init = env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .parse_default_env()
            .target(env_logger::Target::Stdout)
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .try_init();
        if let Err(e) = res_init {
            eprintln!("Logger already installed: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::init_logger;

    #[test]
    fn init_logger_twice_is_harmless() {
        init_logger();
        init_logger();
        log::info!("logger ready");
    }
}
