// Unit tests for library-checkout
// These tests work with the public API only

#[cfg(test)]
mod book_tests {
    use library_checkout::LibraryError;
    use library_checkout::catalog::Book;

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new("Emma", "Jane Austen", "Romance");
        assert!(book.is_available());
        assert_eq!(book.title(), "Emma");
        assert_eq!(book.author(), "Jane Austen");
        assert_eq!(book.genre(), "Romance");
    }

    #[test]
    fn test_checkout_then_checkout_fails() {
        let mut book = Book::new("Emma", "Jane Austen", "Romance");
        book.checkout().expect("first checkout");
        assert_eq!(book.checkout(), Err(LibraryError::BookNotAvailable));
        assert!(!book.is_available());
    }

    #[test]
    fn test_return_book_never_fails() {
        let mut book = Book::new("Emma", "Jane Austen", "Romance");
        book.return_book();
        book.return_book();
        assert!(book.is_available());
    }

    #[test]
    fn test_display_format() {
        let mut book = Book::new("1984", "George Orwell", "Dystopian");
        assert_eq!(format!("{book}"), "\"1984\" by George Orwell [Dystopian] - Available");
        book.checkout().unwrap();
        assert_eq!(format!("{book}"), "\"1984\" by George Orwell [Dystopian] - Checked Out");
    }
}

#[cfg(test)]
mod catalog_tests {
    use library_checkout::LibraryError;
    use library_checkout::catalog::{Book, Catalog, SEED_BOOKS};

    #[test]
    fn test_seeded_catalog_has_all_books() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), SEED_BOOKS.len());
        for (title, author, genre) in SEED_BOOKS {
            let id = catalog.find_by_title(title).expect("seeded title");
            assert_eq!(catalog[id].author(), author);
            assert_eq!(catalog[id].genre(), genre);
        }
    }

    #[test]
    fn test_find_by_title_case_insensitive() {
        let catalog = Catalog::seeded();
        let ids: Vec<_> = ["dune", "DUNE", "Dune", "dUnE"]
            .iter()
            .map(|t| catalog.find_by_title(t).unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_find_missing_title() {
        let catalog = Catalog::seeded();
        match catalog.find_by_title("Nope") {
            Err(LibraryError::BookNotFound { title }) => assert_eq!(title, "Nope"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_checked_out_book_keeps_its_genre() {
        let mut catalog = Catalog::new();
        let id = catalog.add_book(Book::new("Solaris", "Stanislaw Lem", "Sci-Fi"));
        assert_eq!(catalog.genre_iter("Sci-Fi").collect::<Vec<_>>(), vec![id]);

        catalog[id].checkout().unwrap();
        assert_eq!(catalog.genre_iter("Sci-Fi").count(), 0);
        assert_eq!(catalog.genres().collect::<Vec<_>>(), vec!["Sci-Fi"]);
        assert_eq!(catalog.available().count(), 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_book_accessors_by_handle() {
        let mut catalog = Catalog::seeded();
        let id = catalog.find_by_title("The Hobbit").unwrap();
        assert_eq!(catalog.book(id).map(|b| b.author()), Some("J.R.R. Tolkien"));
        catalog.book_mut(id).unwrap().checkout().unwrap();
        assert!(!catalog[id].is_available());
    }
}

#[cfg(test)]
mod user_tests {
    use library_checkout::LibraryError;
    use library_checkout::catalog::Catalog;
    use library_checkout::user::LibraryUser;

    #[test]
    fn test_borrow_same_book_twice() {
        let mut catalog = Catalog::seeded();
        let mut user = LibraryUser::new("tester");
        let id = catalog.find_by_title("1984").unwrap();
        assert!(user.borrow(&mut catalog, id).is_ok());
        assert!(!catalog[id].is_available());
        assert_eq!(user.borrow(&mut catalog, id), Err(LibraryError::AlreadyBorrowed));
    }

    #[test]
    fn test_return_unheld_book_is_noop() {
        let mut catalog = Catalog::seeded();
        let mut user = LibraryUser::new("tester");
        let id = catalog.find_by_title("1984").unwrap();
        assert!(!user.return_book(&mut catalog, id));
        assert!(catalog[id].is_available());
        assert_eq!(user.borrowed_count(), 0);
    }

    #[test]
    fn test_borrowed_listing() {
        let mut catalog = Catalog::seeded();
        let mut user = LibraryUser::new("tester");
        let a = catalog.find_by_title("The Martian").unwrap();
        let b = catalog.find_by_title("Pride and Prejudice").unwrap();
        user.borrow(&mut catalog, a).unwrap();
        user.borrow(&mut catalog, b).unwrap();
        user.return_book(&mut catalog, a);
        assert_eq!(user.borrowed().collect::<Vec<_>>(), vec![b]);
        assert!(user.has_borrowed(b));
        assert!(!user.has_borrowed(a));
    }
}
