//! Console session state and entry glue.
//!
//! Holds the settings a session starts from, the catalog and user it owns,
//! and re-exports the session loop as `run`.
//!
pub mod menu;
pub mod update;

use std::path::PathBuf;

use crate::catalog::{self, Catalog};
use crate::error::Result;
use crate::ui::Palette;
use crate::user::LibraryUser;

/// Settings resolved from the command line before the session starts.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Display name; when set the name prompt is skipped.
    pub user_name: Option<String>,
    /// Catalog file to load instead of the built-in seed list.
    pub catalog_path: Option<PathBuf>,
    /// Style availability labels with terminal colors.
    pub color: bool,
}

impl SessionConfig {
    /// Build the starting catalog: the file at `catalog_path` if given,
    /// otherwise the seed list.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => catalog::parse_catalog(path),
            None => Ok(Catalog::seeded()),
        }
    }

    pub fn palette(&self) -> Palette {
        if self.color { Palette::colored() } else { Palette::plain() }
    }
}

/// Everything one interactive session owns.
pub struct Session {
    pub catalog: Catalog,
    pub user: LibraryUser,
    pub palette: Palette,
}

impl Session {
    pub fn new(catalog: Catalog, user: LibraryUser, palette: Palette) -> Self {
        Self { catalog, user, palette }
    }
}

/// Re-export the session loop entry function.
pub use update::run_session as run;
