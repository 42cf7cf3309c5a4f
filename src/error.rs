use std::io;
use std::path::PathBuf;

/// Problems found before any line is filtered. These exit with the usage code.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The logfile '{}' does not exist or is not readable.", .path.display())]
    Logfile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The logfile '{}' is not a regular file.", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to create output file '{}'.", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
