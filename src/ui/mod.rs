//! Text rendering for the console session.
//!
//! Every function writes complete lines (or a prompt without newline) to the
//! given writer. With [`Palette::plain`] the output is byte-identical to the
//! `Display` format of the underlying types.
//!
use crossterm::style::{Color, Stylize};
use std::io::Write;

use crate::app::menu::MenuChoice;
use crate::catalog::{Book, Catalog};
use crate::user::LibraryUser;

/// Colors for availability labels. `None` leaves a label unstyled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub available: Option<Color>,
    pub checked_out: Option<Color>,
}

impl Palette {
    pub fn plain() -> Self {
        Self { available: None, checked_out: None }
    }

    pub fn colored() -> Self {
        Self {
            available: Some(Color::Green),
            checked_out: Some(Color::Red),
        }
    }

    /// Render a book the way `Display` does, with the status label styled.
    pub fn book_line(&self, book: &Book) -> String {
        let color = if book.is_available() { self.available } else { self.checked_out };
        match color {
            Some(c) => format!(
                "\"{}\" by {} [{}] - {}",
                book.title(),
                book.author(),
                book.genre(),
                book.status_label().with(c)
            ),
            None => book.to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

/// Write `text` without a newline and flush so it shows before input is read.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

pub fn render_welcome<W: Write>(out: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(out, "Welcome, {name}!")
}

pub fn render_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n========== LIBRARY MENU ==========")?;
    for (key, choice) in MenuChoice::ENTRIES {
        writeln!(out, "{key}. {}", choice.label())?;
    }
    Ok(())
}

pub fn render_genres<W: Write>(out: &mut W, catalog: &Catalog) -> std::io::Result<()> {
    writeln!(out, "Genres we have:")?;
    for genre in catalog.genres() {
        writeln!(out, " > {genre}")?;
    }
    Ok(())
}

pub fn render_genre_books<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    genre: &str,
    palette: &Palette,
) -> std::io::Result<()> {
    writeln!(out, "Books in {genre}:")?;
    let mut any = false;
    for id in catalog.genre_iter(genre) {
        writeln!(out, " - {}", palette.book_line(&catalog[id]))?;
        any = true;
    }
    if !any {
        writeln!(out, "Nothing here.")?;
    }
    Ok(())
}

pub fn render_borrowed<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    user: &LibraryUser,
    palette: &Palette,
) -> std::io::Result<()> {
    if user.borrowed_count() == 0 {
        return writeln!(out, "You didn\u{2019}t borrow anything yet.");
    }
    writeln!(out, "Your books:")?;
    for id in user.borrowed() {
        writeln!(out, " * {}", palette.book_line(&catalog[id]))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn menu_lists_entries_in_order() {
        let out = rendered(|w| render_menu(w));
        assert_eq!(
            out,
            "\n========== LIBRARY MENU ==========\n\
             1. Browse genres\n\
             2. Checkout a book\n\
             3. Return a book\n\
             4. See my borrowed books\n\
             5. Exit\n"
        );
    }

    #[test]
    fn empty_genre_says_nothing_here() {
        let c = Catalog::seeded();
        let out = rendered(|w| render_genre_books(w, &c, "Horror", &Palette::plain()));
        assert_eq!(out, "Books in Horror:\nNothing here.\n");
    }

    #[test]
    fn colored_line_keeps_text_and_adds_escape_codes() {
        crossterm::style::force_color_output(true);
        let book = Book::new("Dune", "Frank Herbert", "Sci-Fi");
        let plain = Palette::plain().book_line(&book);
        let colored = Palette::colored().book_line(&book);
        assert_eq!(plain, book.to_string());
        assert!(colored.starts_with("\"Dune\" by Frank Herbert [Sci-Fi] - "));
        assert!(colored.contains("Available"));
        assert!(colored.contains('\u{1b}'));
    }

    #[test]
    fn borrowed_list_for_new_user() {
        let c = Catalog::seeded();
        let u = LibraryUser::new("ana");
        let out = rendered(|w| render_borrowed(w, &c, &u, &Palette::plain()));
        assert_eq!(out, "You didn\u{2019}t borrow anything yet.\n");
    }
}
