//! log4rs initialisation.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Load the YAML logging config, or fall back to warnings on stderr.
pub fn init(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!(
                "Error loading log config {}: {e}, logging warnings to stderr",
                config_file.display()
            ),
        }
    }
    log4rs::init_config(fallback_config()?)?;
    log::debug!("No log config at {}, using stderr", config_file.display());
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
