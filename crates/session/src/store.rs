#![forbid(unsafe_code)]

use crate::{Error, SessionFile};
use glob::Pattern;
use std::{
    fs,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

/// Handle to a directory of stored race sessions.
///
/// Sessions live at `<root>/<season>/<race slug>.json`.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Open an existing store.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::StoreNotFound(root));
        }
        debug!(root = %root.display(), "session store opened");
        Ok(Self { root })
    }

    /// Open a store, creating the directory if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Self::open(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, season: i32, race: &str) -> PathBuf {
        self.root
            .join(season.to_string())
            .join(format!("{}.json", slug(race)))
    }

    pub fn load(&self, season: i32, race: &str) -> Result<SessionFile, Error> {
        let path = self.path_for(season, race);
        trace!(path = %path.display(), "loading session");
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::SessionNotFound {
                    season,
                    race: race.to_owned(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn save(&self, session: &SessionFile) -> Result<PathBuf, Error> {
        let path = self.path_for(session.season, &session.event);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, session)?;
        writer.flush()?;
        Ok(path)
    }

    /// Slugs of all races stored for `season`, sorted.
    pub fn races(&self, season: i32) -> Result<Vec<String>, Error> {
        let dir = self.root.join(season.to_string());
        let pattern = format!("{}/*.json", Pattern::escape(&dir.to_string_lossy()));

        let mut races: Vec<String> = glob::glob(&pattern)?
            .filter_map(Result::ok)
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        races.sort();
        Ok(races)
    }
}

/// File name form of a race name: lowercase ASCII alphanumerics joined by
/// single dashes.
///
/// ```
/// assert_eq!(session::slug("British Grand Prix"), "british-grand-prix");
/// assert_eq!(session::slug("  São Paulo  GP "), "s-o-paulo-gp");
/// ```
pub fn slug(race: &str) -> String {
    let mut out = String::with_capacity(race.len());
    for ch in race.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slug("Emilia-Romagna  Grand Prix"), "emilia-romagna-grand-prix");
        assert_eq!(slug("british-grand-prix"), "british-grand-prix");
        assert_eq!(slug("--"), "");
    }

    #[test]
    fn open_requires_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            SessionStore::open(&missing),
            Err(Error::StoreNotFound(path)) if path == missing
        ));
        assert!(SessionStore::create(&missing).is_ok());
    }
}
