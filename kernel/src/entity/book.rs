mod id;
mod title;

pub use self::{id::*, title::*};
use crate::entity::{Author, Genre};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vodca::References;

/// Book aggregate. `author` and `genres` are copies of the canonical records
/// taken when the book was last saved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: Author,
    genres: Vec<Genre>,
}

impl Book {
    /// Genres sharing an id are kept once, first occurrence wins.
    pub fn new(id: BookId, title: BookTitle, author: Author, genres: Vec<Genre>) -> Self {
        let mut seen = HashSet::new();
        let genres = genres
            .into_iter()
            .filter(|genre| seen.insert(genre.id().clone()))
            .collect();
        Self {
            id,
            title,
            author,
            genres,
        }
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use crate::entity::{
        Author, AuthorId, AuthorName, Book, BookId, BookTitle, Genre, GenreId, GenreName,
    };

    #[test]
    fn duplicate_genres_are_collapsed() {
        let genre_id = GenreId::new(Uuid::new_v4());
        let genre = Genre::new(genre_id.clone(), GenreName::new("Fantasy"));
        let book = Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new("Dune"),
            Author::new(
                AuthorId::new(Uuid::new_v4()),
                AuthorName::new("Frank Herbert"),
            ),
            vec![genre.clone(), genre.clone()],
        );
        assert_eq!(book.genres(), &vec![genre]);
        assert_eq!(book.genres()[0].id(), &genre_id);
    }
}
