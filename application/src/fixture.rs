use driver::database::InMemoryDatabase;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::update::{
    AuthorModifier, BookModifier, CommentModifier, DependOnAuthorModifier, DependOnBookModifier,
    DependOnCommentModifier, DependOnGenreModifier, GenreModifier,
};
use kernel::prelude::entity::{
    Author, AuthorName, Book, BookTitle, Comment, CommentText, Genre, GenreName,
};
use kernel::KernelError;

/// Three authors, six genres and three books; book `n` is written by author `n`
/// and tagged with genres `2n` and `2n + 1`. The first book has two comments,
/// the second one.
pub(crate) struct Catalog {
    pub db: InMemoryDatabase,
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
    pub books: Vec<Book>,
    pub comments: Vec<Comment>,
}

pub(crate) async fn catalog() -> error_stack::Result<Catalog, KernelError> {
    let db = InMemoryDatabase::new();
    let mut con = db.acquire().await?;

    let mut authors = Vec::new();
    for n in 1..=3 {
        let name = AuthorName::new(format!("Author_{n}"));
        let id = db.author_modifier().create(&mut con, &name).await?;
        authors.push(Author::new(id, name));
    }

    let mut genres = Vec::new();
    for n in 1..=6 {
        let name = GenreName::new(format!("Genre_{n}"));
        let id = db.genre_modifier().create(&mut con, &name).await?;
        genres.push(Genre::new(id, name));
    }

    let mut books = Vec::new();
    for (n, author) in authors.iter().enumerate() {
        let title = BookTitle::new(format!("BookTitle_{}", n + 1));
        let embedded = genres[2 * n..2 * n + 2].to_vec();
        let id = db
            .book_modifier()
            .create(&mut con, &title, author, &embedded)
            .await?;
        books.push(Book::new(id, title, author.clone(), embedded));
    }

    let mut comments = Vec::new();
    for (book, text) in [
        (&books[0], "Comment_1"),
        (&books[0], "Comment_2"),
        (&books[1], "Comment_3"),
    ] {
        let text = CommentText::new(text);
        let id = db
            .comment_modifier()
            .create(&mut con, &text, book.id())
            .await?;
        comments.push(Comment::new(id, text, book.id().clone()));
    }

    Ok(Catalog {
        db,
        authors,
        genres,
        books,
        comments,
    })
}
