//! Flat-file score log: one integer per line, appended at exit.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_SCORES_FILE: &str = "scores.txt";

#[derive(Clone, Debug)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check the log can be read.  A missing file is not an error: it just
    /// means nobody has scored yet.
    pub fn open(&self) -> io::Result<()> {
        match File::open(&self.path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Append `score` as a new line.  Zero scores are not recorded.
    pub fn append(&self, score: u32) -> io::Result<()> {
        if score == 0 {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", score)
    }

    /// Highest recorded score, skipping lines that are not integers.
    pub fn best(&self) -> io::Result<Option<u32>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(text
            .lines()
            .filter_map(|line| line.trim().parse::<u32>().ok())
            .max())
    }
}

impl Default for ScoreFile {
    fn default() -> Self {
        ScoreFile::new(DEFAULT_SCORES_FILE)
    }
}
