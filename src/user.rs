use indexmap::IndexSet;

use crate::catalog::{BookId, Catalog};
use crate::error::LibraryError;

/// The person at the desk and the books they currently hold.
#[derive(Clone, Debug, Default)]
pub struct LibraryUser {
    name: String,
    borrowed: IndexSet<BookId>,
}

impl LibraryUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            borrowed: IndexSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check out `id` for this user.
    ///
    /// Holding the book already is reported as [`LibraryError::AlreadyBorrowed`]
    /// before availability is looked at, so a user re-borrowing their own
    /// book gets the more specific error.
    pub fn borrow(&mut self, catalog: &mut Catalog, id: BookId) -> Result<(), LibraryError> {
        if self.borrowed.contains(&id) {
            return Err(LibraryError::AlreadyBorrowed);
        }
        catalog[id].checkout()?;
        self.borrowed.insert(id);
        Ok(())
    }

    /// Give `id` back. Books this user does not hold are ignored.
    /// Returns whether anything changed.
    pub fn return_book(&mut self, catalog: &mut Catalog, id: BookId) -> bool {
        if !self.borrowed.shift_remove(&id) {
            return false;
        }
        catalog[id].return_book();
        true
    }

    pub fn has_borrowed(&self, id: BookId) -> bool {
        self.borrowed.contains(&id)
    }

    /// Held books in the order they were borrowed.
    pub fn borrowed(&self) -> impl Iterator<Item = BookId> + '_ {
        self.borrowed.iter().copied()
    }

    pub fn borrowed_count(&self) -> usize {
        self.borrowed.len()
    }
}
