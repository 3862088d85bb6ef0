use log::LevelFilter;


const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;
const VERBOSE_LEVEL: LevelFilter = LevelFilter::Debug;


// `RUST_LOG` still takes precedence over the verbosity flag.
pub fn init_logger(verbose: bool) {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
