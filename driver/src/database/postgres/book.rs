use sqlx::types::Json;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Author, Book, BookId, BookTitle, Genre};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Connection = PostgresConnection;
    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await
    }

    async fn exists(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        PgBookInternal::exists(con, id).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Connection = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        title: &BookTitle,
        author: &Author,
        genres: &[Genre],
    ) -> error_stack::Result<BookId, KernelError> {
        PgBookInternal::create(con, title, author, genres).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<bool, KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: Json<Author>,
    genres: Json<Vec<Genre>>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            value.author.0,
            value.genres.0,
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, genres
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        tracing::debug!(book = %id.as_ref(), found = row.is_some(), "fetched book");
        Ok(row.map(Book::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, genres
            FROM books
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(rows = rows.len(), "fetched all books");
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn exists(con: &mut PgConnection, id: &BookId) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        title: &BookTitle,
        author: &Author,
        genres: &[Genre],
    ) -> error_stack::Result<BookId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO books (title, author, genres)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(title.as_ref())
        .bind(Json(author))
        .bind(Json(genres))
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(BookId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        book: &Book,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, genres = $4
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(Json(book.author()))
        .bind(Json(book.genres()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::{AuthorModifier, BookModifier, GenreModifier};
    use kernel::prelude::entity::{Author, AuthorName, Book, BookTitle, Genre, GenreName};
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresAuthorRepository, PostgresBookRepository, PostgresDatabase,
        PostgresGenreRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.acquire().await?;

        let author_name = AuthorName::new("Ursula K. Le Guin");
        let author_id = PostgresAuthorRepository
            .create(&mut con, &author_name)
            .await?;
        let author = Author::new(author_id, author_name);
        let genre_name = GenreName::new("Fantasy");
        let genre_id = PostgresGenreRepository
            .create(&mut con, &genre_name)
            .await?;
        let genre = Genre::new(genre_id, genre_name);

        let title = BookTitle::new("A Wizard of Earthsea");
        let id = PostgresBookRepository
            .create(&mut con, &title, &author, &[genre.clone()])
            .await?;
        let book = Book::new(id.clone(), title, author.clone(), vec![genre]);

        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));
        assert!(PostgresBookRepository.exists(&mut con, &id).await?);

        let book = book.reconstruct(|b| {
            b.title = BookTitle::new("The Tombs of Atuan");
            b.genres = vec![];
        });
        assert!(PostgresBookRepository.update(&mut con, &book).await?);

        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book));

        PostgresBookRepository.delete(&mut con, &id).await?;
        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        assert!(!PostgresBookRepository.exists(&mut con, &id).await?);

        Ok(())
    }
}
