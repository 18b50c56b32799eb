//! Book catalog: the book model, the genre-indexed arena that owns every
//! book, and loaders for the built-in seed list or a catalog file.
//!
use indexmap::IndexMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;

use crate::error::{Context, LibraryError, Result};

/// The fixed (title, author, genre) triples loaded at startup.
pub const SEED_BOOKS: [(&str, &str, &str); 8] = [
    ("Dune", "Frank Herbert", "Sci-Fi"),
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
    ("1984", "George Orwell", "Dystopian"),
    ("Pride and Prejudice", "Jane Austen", "Romance"),
    ("The Great Gatsby", "F. Scott Fitzgerald", "Classic"),
    ("The Martian", "Andy Weir", "Sci-Fi"),
    ("The Name of the Wind", "Patrick Rothfuss", "Fantasy"),
    ("To Kill a Mockingbird", "Harper Lee", "Classic"),
];

/// Opaque handle identifying one book inside a [`Catalog`].
///
/// Two books with identical fields still get distinct handles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(usize);

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Book {
    title: String,
    author: String,
    genre: String,
    available: bool,
}

impl Book {
    /// Create a book; new books start available.
    pub fn new(title: impl Into<String>, author: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Mark the book checked out. Fails if it already is.
    pub fn checkout(&mut self) -> std::result::Result<(), LibraryError> {
        if !self.available {
            return Err(LibraryError::BookNotAvailable);
        }
        self.available = false;
        Ok(())
    }

    /// Mark the book available again. Returning an available book is a no-op.
    pub fn return_book(&mut self) {
        self.available = true;
    }

    pub fn status_label(&self) -> &'static str {
        if self.available { "Available" } else { "Checked Out" }
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" by {} [{}] - {}",
            self.title,
            self.author,
            self.genre,
            self.status_label()
        )
    }
}

/// All books, partitioned by genre.
///
/// Books live in an arena addressed by [`BookId`]. Genre buckets keep
/// insertion order, both for the genre keys and for the books inside each
/// bucket, so lookups and listings are deterministic. Genre keys compare
/// case-sensitively; title lookup does not.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    by_genre: IndexMap<String, Vec<BookId>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in seed list.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (title, author, genre) in SEED_BOOKS {
            catalog.add_book(Book::new(title, author, genre));
        }
        tracing::debug!(books = catalog.len(), "seeded catalog");
        catalog
    }

    /// Append a book to its genre bucket, creating the bucket if needed.
    pub fn add_book(&mut self, book: Book) -> BookId {
        let id = BookId(self.books.len());
        self.by_genre
            .entry(book.genre.clone())
            .or_default()
            .push(id);
        self.books.push(book);
        id
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    pub fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.get_mut(id.0)
    }

    /// Case-insensitive exact title match. With duplicate titles the first
    /// book in genre order, then insertion order, wins.
    pub fn find_by_title(&self, title: &str) -> std::result::Result<BookId, LibraryError> {
        let wanted = title.to_lowercase();
        self.by_genre
            .values()
            .flatten()
            .copied()
            .find(|id| self[*id].title.to_lowercase() == wanted)
            .ok_or_else(|| LibraryError::BookNotFound { title: title.to_string() })
    }

    /// Every genre ever added, in insertion order, whether or not any of its
    /// books are currently available.
    pub fn genres(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_genre.keys().map(String::as_str)
    }

    /// Available books in `genre`, in insertion order. Unknown genres yield
    /// nothing. Each call reads the current availability flags.
    pub fn genre_iter<'a>(&'a self, genre: &str) -> impl Iterator<Item = BookId> + 'a {
        self.by_genre
            .get(genre)
            .into_iter()
            .flatten()
            .copied()
            .filter(move |id| self[*id].available)
    }

    /// Available books across every genre.
    pub fn available(&self) -> impl Iterator<Item = BookId> + '_ {
        self.by_genre
            .values()
            .flatten()
            .copied()
            .filter(move |id| self[*id].available)
    }
}

impl Index<BookId> for Catalog {
    type Output = Book;

    /// Panics if the handle came from a different catalog.
    fn index(&self, id: BookId) -> &Book {
        &self.books[id.0]
    }
}

impl IndexMut<BookId> for Catalog {
    fn index_mut(&mut self, id: BookId) -> &mut Book {
        &mut self.books[id.0]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = Box<dyn Iterator<Item = &'a Book> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.available().map(move |id| &self[id]))
    }
}

/// Load a catalog from a text file with one `title | author | genre` per
/// line. Blank lines and `#` comments are skipped; so are malformed lines,
/// with a warning.
pub fn parse_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).with_ctx(|| format!("read catalog {}", path.display()))?;
    let mut catalog = Catalog::new();
    for (lineno, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            tracing::warn!(line = lineno + 1, content = line, "skipping malformed catalog line");
            continue;
        }
        catalog.add_book(Book::new(parts[0], parts[1], parts[2]));
    }
    if catalog.is_empty() {
        return Err(crate::error::simple_error(format!("catalog {} contains no books", path.display())));
    }
    tracing::debug!(books = catalog.len(), path = %path.display(), "loaded catalog file");
    Ok(catalog)
}
