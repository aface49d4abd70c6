/// Default locations stored in `~/.footsy`
///
/// .
/// └── log
///    └── monitor.log
///
use std::path::PathBuf;

pub fn footsy() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".footsy"))
}

pub fn log() -> Option<PathBuf> {
    Some(footsy()?.join("log"))
}

pub fn log_file(name: &str) -> Option<PathBuf> {
    Some(log()?.join(format!("{name}.log")))
}
