use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug)]
pub enum AliasError {
    LimitReached { capacity: usize },
    NotFound(String),
    Save { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    Load { path: PathBuf, source: io::Error },
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::LimitReached { capacity } => write!(
                f,
                "Alias limit reached ({}). Cannot add more aliases.",
                capacity
            ),
            AliasError::NotFound(alias) => write!(f, "Alias not found: {}", alias),
            AliasError::Save { path, source } => write!(
                f,
                "Error: Unable to open file '{}' for saving aliases: {}",
                path.display(),
                source
            ),
            AliasError::Write { path, source } => write!(
                f,
                "Error: Failed writing aliases to '{}': {}",
                path.display(),
                source
            ),
            AliasError::Load { path, source } => write!(
                f,
                "Error: Unable to open file '{}' for reading aliases: {}",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for AliasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AliasError::Save { source, .. }
            | AliasError::Write { source, .. }
            | AliasError::Load { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Bounded mapping from alias name to the program it stands for.
///
/// Entries are kept sorted by name so listings and saved files are stable.
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
    capacity: usize,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            aliases: BTreeMap::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts or overwrites `alias`.
    ///
    /// A full table rejects every `set`, including overwrites of a name it
    /// already holds.
    pub fn set(&mut self, alias: &str, command: &str) -> Result<(), AliasError> {
        if self.aliases.len() >= self.capacity {
            return Err(AliasError::LimitReached {
                capacity: self.capacity,
            });
        }
        debug!("alias {} -> {}", alias, command);
        self.aliases.insert(alias.to_owned(), command.to_owned());
        Ok(())
    }

    pub fn remove(&mut self, alias: &str) -> Result<(), AliasError> {
        match self.aliases.remove(alias) {
            Some(_) => {
                debug!("removed alias {}", alias);
                Ok(())
            }
            None => Err(AliasError::NotFound(alias.to_owned())),
        }
    }

    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the command `name` maps to, or `name` itself.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AliasError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| AliasError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(BufWriter::new(file))
            .map_err(|source| AliasError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        info!("saved {} aliases to {}", self.len(), path.display());
        Ok(())
    }

    /// Replaces the whole table with the pairs found in `path`.
    ///
    /// Only a file that cannot be opened is an error, and it leaves the table
    /// untouched. Once opened, unreadable or malformed content just ends
    /// parsing early.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), AliasError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AliasError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        self.aliases.clear();
        self.read_from(BufReader::new(file));
        info!("loaded {} aliases from {}", self.len(), path.display());
        Ok(())
    }

    fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (alias, command) in &self.aliases {
            writeln!(writer, "{} {}", alias, command)?;
        }
        writer.flush()
    }

    fn read_from<R: BufRead>(&mut self, reader: R) {
        for line in reader.split(b'\n') {
            let line = match line {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("stopped reading alias file: {}", e);
                    break;
                }
            };
            let line = String::from_utf8_lossy(&line);
            let mut words = line.split_whitespace();
            let (Some(alias), Some(command)) = (words.next(), words.next()) else {
                break;
            };

            if self.aliases.len() >= self.capacity && !self.aliases.contains_key(alias) {
                warn!(
                    "alias file holds more than {} entries, ignoring the rest",
                    self.capacity
                );
                break;
            }
            self.aliases.insert(alias.to_owned(), command.to_owned());
        }
    }
}
