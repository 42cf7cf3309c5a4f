use std::fs;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use crate::error::ConfigError;

pub fn open_logfile(path: &Path) -> Result<io::BufReader<fs::File>, ConfigError> {
    let file = fs::File::open(path).map_err(|source| ConfigError::Logfile {
        path: path.to_path_buf(),
        source,
    })?;
    let metadata = file.metadata().map_err(|source| ConfigError::Logfile {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ConfigError::NotAFile(path.to_path_buf()));
    }
    Ok(io::BufReader::new(file))
}

/// Where kept lines go: standard output or a file given with `--output`.
#[derive(Debug)]
pub enum Output {
    Stdout(io::Stdout),
    File(io::BufWriter<fs::File>),
}

impl Output {
    pub fn create(path: Option<&Path>) -> Result<Output, ConfigError> {
        match path {
            None => Ok(Output::Stdout(io::stdout())),
            Some(path) => {
                let file = fs::File::create(path).map_err(|source| ConfigError::Output {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Output::File(io::BufWriter::new(file)))
            }
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(out) => out.write(buf),
            Output::File(out) => out.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.write_all(buf),
            Output::File(out) => out.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(out) => out.flush(),
            Output::File(out) => out.flush(),
        }
    }
}
