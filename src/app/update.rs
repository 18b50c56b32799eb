use anyhow::Result;
use std::io::{BufRead, Write};

use crate::app::menu::MenuChoice;
use crate::app::{Session, SessionConfig};
use crate::catalog::Catalog;
use crate::ui;
use crate::user::LibraryUser;

/// Whether the loop keeps going after a menu action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Run one interactive session over `input`/`output` and hand back its
/// final state.
///
/// Domain failures are printed and the loop continues; only I/O errors on
/// the streams end it early. End of input at any prompt ends the session.
pub fn run_session<R: BufRead, W: Write>(
    catalog: Catalog,
    config: &SessionConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Session> {
    let name = match &config.user_name {
        Some(name) => name.clone(),
        None => {
            ui::prompt(output, "Hey. What's your name? ")?;
            read_line(input)?.unwrap_or_default()
        }
    };
    ui::render_welcome(output, &name)?;
    let mut session = Session::new(catalog, LibraryUser::new(name), config.palette());

    loop {
        ui::render_menu(output)?;
        ui::prompt(output, "Enter your choice: ")?;
        let Some(line) = read_line(input)? else {
            tracing::debug!("input closed, ending session");
            break;
        };
        let choice = MenuChoice::parse(&line);
        tracing::debug!(?choice, "menu choice");

        let step = match choice {
            MenuChoice::BrowseGenres => browse(&session, input, output)?,
            MenuChoice::Checkout => checkout(&mut session, input, output)?,
            MenuChoice::Return => give_back(&mut session, input, output)?,
            MenuChoice::ListBorrowed => {
                ui::render_borrowed(output, &session.catalog, &session.user, &session.palette)?;
                Step::Continue
            }
            MenuChoice::Exit => {
                writeln!(output, "Bye!")?;
                Step::Quit
            }
            MenuChoice::Invalid => {
                writeln!(output, "Invalid... I think?")?;
                Step::Continue
            }
        };
        if step == Step::Quit {
            break;
        }
    }

    output.flush()?;
    Ok(session)
}

fn browse<R: BufRead, W: Write>(session: &Session, input: &mut R, output: &mut W) -> Result<Step> {
    ui::render_genres(output, &session.catalog)?;
    ui::prompt(output, "Genre to browse: ")?;
    let Some(genre) = read_line(input)? else {
        return Ok(Step::Quit);
    };
    ui::render_genre_books(output, &session.catalog, &genre, &session.palette)?;
    Ok(Step::Continue)
}

fn checkout<R: BufRead, W: Write>(session: &mut Session, input: &mut R, output: &mut W) -> Result<Step> {
    ui::prompt(output, "Title to checkout: ")?;
    let Some(title) = read_line(input)? else {
        return Ok(Step::Quit);
    };
    let outcome = session
        .catalog
        .find_by_title(&title)
        .and_then(|id| session.user.borrow(&mut session.catalog, id).map(|()| id));
    match outcome {
        Ok(id) => {
            let book = &session.catalog[id];
            tracing::info!(title = book.title(), user = session.user.name(), "checked out");
            writeln!(output, "Checked out: {}", book.title())?;
        }
        Err(err) => {
            tracing::warn!(%title, error = %err, "checkout refused");
            writeln!(output, "Oops: {err}")?;
        }
    }
    Ok(Step::Continue)
}

fn give_back<R: BufRead, W: Write>(session: &mut Session, input: &mut R, output: &mut W) -> Result<Step> {
    ui::prompt(output, "Book title to return: ")?;
    let Some(title) = read_line(input)? else {
        return Ok(Step::Quit);
    };
    match session.catalog.find_by_title(&title) {
        Ok(id) => {
            let changed = session.user.return_book(&mut session.catalog, id);
            let book = &session.catalog[id];
            if changed {
                tracing::info!(title = book.title(), user = session.user.name(), "returned");
            } else {
                tracing::debug!(title = book.title(), "return ignored, not held by user");
            }
            writeln!(output, "Returned: {}", book.title())?;
        }
        Err(err) => {
            tracing::warn!(%title, error = %err, "return lookup failed");
            writeln!(output, "Something went wrong returning.")?;
        }
    }
    Ok(Step::Continue)
}

/// Read one line without its trailing `\n` or `\r\n`. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}
