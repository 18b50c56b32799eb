//! Main menu entries and the mapping from an input line to an entry.

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// List genres, then the available books of one genre.
    BrowseGenres,
    /// Look up a title and borrow it.
    Checkout,
    /// Look up a title and give it back.
    Return,
    /// Show what the user currently holds.
    ListBorrowed,
    /// Leave the session.
    Exit,
    /// Anything not on the menu.
    Invalid,
}

impl MenuChoice {
    /// Entries in display order, paired with the key that selects them.
    pub const ENTRIES: [(&'static str, MenuChoice); 5] = [
        ("1", MenuChoice::BrowseGenres),
        ("2", MenuChoice::Checkout),
        ("3", MenuChoice::Return),
        ("4", MenuChoice::ListBorrowed),
        ("5", MenuChoice::Exit),
    ];

    /// Resolve an input line. Matching is exact: `" 1"` or `"1."` is invalid.
    pub fn parse(line: &str) -> Self {
        Self::ENTRIES
            .iter()
            .find(|(key, _)| *key == line)
            .map(|(_, choice)| *choice)
            .unwrap_or(MenuChoice::Invalid)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::BrowseGenres => "Browse genres",
            MenuChoice::Checkout => "Checkout a book",
            MenuChoice::Return => "Return a book",
            MenuChoice::ListBorrowed => "See my borrowed books",
            MenuChoice::Exit => "Exit",
            MenuChoice::Invalid => "",
        }
    }
}
