//! JSON persistence of plannings and the roster.
//!
//! # Layout
//!
//! | File | Content |
//! |------|---------|
//! | `<data>/Plannings_json/planning_semaine{week}_{year}.json` | one [`ScheduleSnapshot`] |
//! | `<data>/Employes_json/employees.json` | the [`Roster`] as a list |
//!
//! Files are written with four-space indentation and non-ASCII text kept
//! as is. Writes go to a temporary file in the target directory that is
//! then renamed over the destination, so a failed save never leaves a
//! truncated file behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::ScheduleSnapshot;
use crate::roster::Roster;

/// Source of saved weekly plannings.
pub trait ScheduleStore {
    /// Loads the planning of an ISO week, `None` when none was saved.
    fn load_schedule(&self, week: u32, year: i32) -> Result<Option<ScheduleSnapshot>, StoreError>;

    /// Saves the planning of an ISO week, replacing any previous one.
    fn save_schedule(
        &self,
        week: u32,
        year: i32,
        snapshot: &ScheduleSnapshot,
    ) -> Result<(), StoreError>;
}

/// Source of the employee roster.
pub trait RosterSource {
    /// Loads the roster; an absent roster is empty.
    fn load_employees(&self) -> Result<Roster, StoreError>;

    /// Saves the roster.
    fn save_employees(&self, roster: &Roster) -> Result<(), StoreError>;
}

/// Directory layout of a [`JsonStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root data directory.
    pub data_dir: PathBuf,
    /// Planning directory, relative to `data_dir`.
    pub plannings_dir: PathBuf,
    /// Roster file, relative to `data_dir`.
    pub employees_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("Data"),
            plannings_dir: PathBuf::from("Plannings_json"),
            employees_file: PathBuf::from("Employes_json").join("employees.json"),
        }
    }
}

impl StoreConfig {
    /// Default layout under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the planning directory.
    pub fn with_plannings_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plannings_dir = dir.into();
        self
    }

    /// Sets the roster file.
    pub fn with_employees_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.employees_file = file.into();
        self
    }

    /// Path of a week's planning file.
    pub fn schedule_path(&self, week: u32, year: i32) -> PathBuf {
        self.data_dir
            .join(&self.plannings_dir)
            .join(format!("planning_semaine{week}_{year}.json"))
    }

    /// Path of the roster file.
    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.employees_file)
    }
}

/// File-backed store for plannings and the roster.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    /// Creates a store with the given layout.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Creates a store with the default layout under `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new(data_dir))
    }

    /// The directory layout.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl ScheduleStore for JsonStore {
    fn load_schedule(&self, week: u32, year: i32) -> Result<Option<ScheduleSnapshot>, StoreError> {
        let path = self.config.schedule_path(week, year);
        let snapshot = read_json::<ScheduleSnapshot>(&path)?;
        match &snapshot {
            Some(s) => info!(week, year, rows = s.employees.len(), "planning loaded"),
            None => debug!(week, year, path = %path.display(), "no saved planning"),
        }
        Ok(snapshot)
    }

    fn save_schedule(
        &self,
        week: u32,
        year: i32,
        snapshot: &ScheduleSnapshot,
    ) -> Result<(), StoreError> {
        let path = self.config.schedule_path(week, year);
        write_json(&path, snapshot)?;
        info!(week, year, path = %path.display(), "planning saved");
        Ok(())
    }
}

impl RosterSource for JsonStore {
    fn load_employees(&self) -> Result<Roster, StoreError> {
        let path = self.config.roster_path();
        let roster = read_json::<Roster>(&path)?.unwrap_or_default();
        info!(employees = roster.len(), "roster loaded");
        Ok(roster)
    }

    fn save_employees(&self, roster: &Roster) -> Result<(), StoreError> {
        let path = self.config.roster_path();
        write_json(&path, roster)?;
        info!(employees = roster.len(), "roster saved");
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(path)(e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(io_error(path))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error(path))?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(tmp.as_file_mut(), formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.as_file_mut().flush().map_err(io_error(path))?;
    tmp.persist(path).map_err(|e| io_error(path)(e.error))?;
    Ok(())
}
