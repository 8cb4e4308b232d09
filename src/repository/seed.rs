//! Demo catalog loaded at startup when `catalog.seed_demo_data` is enabled

use crate::models::book::Book;

const DEMO_BOOKS: &[(&str, i32, i32, &str)] = &[
    ("The Fellowship of the Ring", 1, 1954, "978-0547928210"),
    ("The Two Towers", 1, 1954, "978-0547928203"),
    ("The Return of the King", 1, 1955, "978-0547928197"),
    ("Harry Potter and the Sorcerer's Stone", 2, 1997, "978-0590353427"),
    ("Harry Potter and the Chamber of Secrets", 2, 1998, "978-0439064873"),
    ("Harry Potter and the Prisoner of Azkaban", 2, 1999, "978-0439136365"),
    ("Harry Potter and the Goblet of Fire", 2, 2000, "978-0439139601"),
    ("1984", 3, 1949, "978-0451524935"),
    ("To Kill a Mockingbird", 4, 1960, "978-0061120084"),
    ("Pride and Prejudice", 5, 1813, "978-1503290563"),
    ("Moby-Dick", 6, 1851, "978-1503280786"),
    ("The Martian", 7, 2011, "978-0553418026"),
    ("The Da Vinci Code", 8, 2003, "978-0307474278"),
    ("The Hunger Games", 9, 2008, "978-0439023481"),
    ("Catching Fire", 9, 2009, "978-0439023498"),
    ("Dune", 10, 1965, "978-0441172719"),
    ("Foundation", 11, 1951, "978-0553293357"),
    ("Neuromancer", 12, 1984, "978-0441569595"),
    ("Gone Girl", 13, 2012, "978-0307588371"),
    ("The Girl with the Dragon Tattoo", 14, 2005, "978-0307454546"),
];

/// Number of books in the demo catalog
pub const DEMO_BOOK_COUNT: usize = DEMO_BOOKS.len();

/// Demo books numbered consecutively from `starting_id`.
/// Stops early rather than overflow when the ids would pass `i32::MAX`.
pub fn demo_books(starting_id: i32) -> Vec<Book> {
    DEMO_BOOKS
        .iter()
        .zip(starting_id..=i32::MAX)
        .map(|(&(title, author_id, published_year, isbn), id)| Book {
            id,
            title: title.to_string(),
            author_id,
            published_year,
            isbn: isbn.to_string(),
        })
        .collect()
}
