use std::collections::HashSet;

use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery, DependOnGenreQuery,
    GenreQuery,
};
use kernel::interface::update::{
    BookModifier, CommentModifier, DependOnBookModifier, DependOnCommentModifier,
};
use kernel::prelude::entity::{Author, AuthorId, Book, BookTitle, Genre, GenreId};
use kernel::KernelError;

use crate::transfer::{BookDeletion, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait ResolveBookReferences:
    'static + Sync + Send + DependOnAuthorQuery + DependOnGenreQuery
{
    /// Loads the current author and genre records a book is going to embed.
    /// Repeated genre ids count once; any unknown id fails with `NotFound`.
    async fn resolve_references(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Connection,
        author_id: &AuthorId,
        genre_ids: &[GenreId],
    ) -> error_stack::Result<(Author, Vec<Genre>), KernelError> {
        let author = self
            .author_query()
            .find_by_id(con, author_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Author {} does not exist", author_id.as_ref()))
            })?;

        let mut seen = HashSet::new();
        let genre_ids = genre_ids
            .iter()
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect::<Vec<GenreId>>();
        let genres = self.genre_query().find_by_ids(con, &genre_ids).await?;
        if genres.len() != genre_ids.len() {
            let missing = genre_ids
                .iter()
                .filter(|id| !genres.iter().any(|genre| genre.id() == *id))
                .map(|id| id.as_ref().to_string())
                .collect::<Vec<_>>();
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Genres do not exist: {}", missing.join(", "))));
        }

        Ok((author, genres))
    }
}

impl<T> ResolveBookReferences for T where T: DependOnAuthorQuery + DependOnGenreQuery {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<Book>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.book_query().find_by_id(&mut connection, &dto.id).await
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.book_query().find_all(&mut connection).await
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + ResolveBookReferences + DependOnBookModifier
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<Book, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let (author, genres) = self
            .resolve_references(&mut connection, &dto.author_id, &dto.genre_ids)
            .await?;
        let title = BookTitle::new(dto.title);
        let id = self
            .book_modifier()
            .create(&mut connection, &title, &author, &genres)
            .await?;
        tracing::info!(book = %id.as_ref(), "created book");

        Ok(Book::new(id, title, author, genres))
    }
}

impl<T> CreateBookService for T where T: ResolveBookReferences + DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + ResolveBookReferences + DependOnBookQuery + DependOnBookModifier
{
    /// `None` when there is no book with the given id; nothing is created then.
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        if !self.book_query().exists(&mut connection, &dto.id).await? {
            return Ok(None);
        }
        let (author, genres) = self
            .resolve_references(&mut connection, &dto.author_id, &dto.genre_ids)
            .await?;
        let book = Book::new(dto.id, BookTitle::new(dto.title), author, genres);
        if !self.book_modifier().update(&mut connection, &book).await? {
            tracing::debug!(book = %book.id().as_ref(), "book removed before update");
            return Ok(None);
        }
        tracing::info!(book = %book.id().as_ref(), "updated book");

        Ok(Some(book))
    }
}

impl<T> UpdateBookService for T where
    T: ResolveBookReferences + DependOnBookQuery + DependOnBookModifier
{
}

#[async_trait::async_trait]
pub trait DeleteBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier + DependOnCommentModifier
{
    /// Removes the book first, then its comments. A failure in the second step
    /// does not restore the book; it is reported as `CommentsOrphaned`.
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<Option<BookDeletion>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let Some(book) = self.book_query().find_by_id(&mut connection, &dto.id).await? else {
            return Ok(None);
        };
        self.book_modifier()
            .delete(&mut connection, book.id())
            .await?;

        let deletion = match self
            .comment_modifier()
            .delete_by_book_id(&mut connection, book.id())
            .await
        {
            Ok(comments) => {
                tracing::info!(book = %book.id().as_ref(), comments, "deleted book");
                BookDeletion::Deleted { book, comments }
            }
            Err(error) => {
                tracing::warn!(
                    book = %book.id().as_ref(),
                    ?error,
                    "deleted book but failed to delete its comments"
                );
                BookDeletion::CommentsOrphaned { book, error }
            }
        };

        Ok(Some(deletion))
    }
}

impl<T> DeleteBookService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnCommentModifier
{
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use error_stack::Report;
    use uuid::Uuid;

    use driver::database::{
        InMemoryAuthorRepository, InMemoryBookRepository, InMemoryDatabase,
        InMemoryGenreRepository, MemoryConnection,
    };
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::{
        BookQuery, CommentQuery, DependOnAuthorQuery, DependOnBookQuery, DependOnCommentQuery,
        DependOnGenreQuery,
    };
    use kernel::interface::update::{
        AuthorModifier, CommentModifier, DependOnAuthorModifier, DependOnBookModifier,
        DependOnCommentModifier,
    };
    use kernel::prelude::entity::{
        AuthorId, AuthorName, Book, BookId, Comment, CommentId, CommentText, Genre, GenreId,
    };
    use kernel::KernelError;

    use crate::fixture::catalog;
    use crate::service::{CreateBookService, DeleteBookService, GetBookService, UpdateBookService};
    use crate::transfer::{BookDeletion, CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};

    #[tokio::test]
    async fn find_by_id_returns_embedded_snapshots() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let expected = &catalog.books[0];

        let found = catalog
            .db
            .get_book(GetBookDto {
                id: expected.id().clone(),
            })
            .await?;

        assert_eq!(found.as_ref(), Some(expected));
        let found = found.unwrap();
        assert_eq!(found.author(), &catalog.authors[0]);
        assert_eq!(found.genres(), &catalog.genres[0..2].to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_lists_every_book() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;

        let books = catalog.db.get_all_books().await?;

        assert_eq!(books, catalog.books);
        assert_eq!(books[0].author().id(), catalog.authors[0].id());
        assert_eq!(books[0].genres().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn insert_resolves_author_and_genres() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let genre_ids = vec![
            catalog.genres[1].id().clone(),
            catalog.genres[0].id().clone(),
        ];

        let created = catalog
            .db
            .create_book(CreateBookDto {
                title: "T".to_string(),
                author_id: catalog.authors[0].id().clone(),
                genre_ids: genre_ids.clone(),
            })
            .await?;

        let found = catalog
            .db
            .get_book(GetBookDto {
                id: created.id().clone(),
            })
            .await?
            .expect("inserted book must be found");
        assert_eq!(found, created);
        assert_eq!(found.title().as_ref(), "T");
        assert_eq!(found.author().name().as_ref(), "Author_1");
        assert_eq!(
            found.genres().iter().map(Genre::id).collect::<HashSet<_>>(),
            genre_ids.iter().collect::<HashSet<_>>()
        );
        assert_eq!(catalog.db.get_all_books().await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn insert_accepts_no_genres_and_collapses_repeats() -> error_stack::Result<(), KernelError>
    {
        let catalog = catalog().await?;
        let author_id = catalog.authors[2].id().clone();

        let bare = catalog
            .db
            .create_book(CreateBookDto {
                title: "Without genres".to_string(),
                author_id: author_id.clone(),
                genre_ids: vec![],
            })
            .await?;
        assert!(bare.genres().is_empty());

        let repeated = catalog
            .db
            .create_book(CreateBookDto {
                title: "Repeated genre".to_string(),
                author_id,
                genre_ids: vec![
                    catalog.genres[3].id().clone(),
                    catalog.genres[3].id().clone(),
                ],
            })
            .await?;
        assert_eq!(repeated.genres(), &vec![catalog.genres[3].clone()]);
        Ok(())
    }

    #[tokio::test]
    async fn insert_embeds_current_author_name() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let author = catalog.authors[1]
            .clone()
            .reconstruct(|a| a.name = AuthorName::new("Renamed"));
        let mut con = catalog.db.acquire().await?;
        catalog.db.author_modifier().update(&mut con, &author).await?;

        let created = catalog
            .db
            .create_book(CreateBookDto {
                title: "Fresh".to_string(),
                author_id: author.id().clone(),
                genre_ids: vec![],
            })
            .await?;
        assert_eq!(created.author(), &author);

        let updated = catalog
            .db
            .update_book(UpdateBookDto {
                id: catalog.books[1].id().clone(),
                title: catalog.books[1].title().as_ref().clone(),
                author_id: author.id().clone(),
                genre_ids: vec![],
            })
            .await?
            .expect("existing book must be updated");
        assert_eq!(updated.author().name().as_ref(), "Renamed");
        Ok(())
    }

    #[tokio::test]
    async fn insert_with_unknown_genre_writes_nothing() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;

        let result = catalog
            .db
            .create_book(CreateBookDto {
                title: "Ghost".to_string(),
                author_id: catalog.authors[0].id().clone(),
                genre_ids: vec![
                    catalog.genres[0].id().clone(),
                    GenreId::new(Uuid::new_v4()),
                ],
            })
            .await;

        let error = result.expect_err("unknown genre must be rejected");
        assert!(matches!(error.current_context(), KernelError::NotFound));
        assert_eq!(catalog.db.get_all_books().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn insert_with_unknown_author_writes_nothing() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;

        let result = catalog
            .db
            .create_book(CreateBookDto {
                title: "Ghost".to_string(),
                author_id: AuthorId::new(Uuid::new_v4()),
                genre_ids: vec![],
            })
            .await;

        let error = result.expect_err("unknown author must be rejected");
        assert!(matches!(error.current_context(), KernelError::NotFound));
        assert_eq!(catalog.db.get_all_books().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_title_in_place() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let original = &catalog.books[0];

        let updated = catalog
            .db
            .update_book(UpdateBookDto {
                id: original.id().clone(),
                title: "BookTitle_Updated".to_string(),
                author_id: original.author().id().clone(),
                genre_ids: original.genres().iter().map(|g| g.id().clone()).collect(),
            })
            .await?;

        let found = catalog
            .db
            .get_book(GetBookDto {
                id: original.id().clone(),
            })
            .await?
            .expect("updated book must be found");
        assert_eq!(updated.as_ref(), Some(&found));
        assert_eq!(found.title().as_ref(), "BookTitle_Updated");
        assert_eq!(found.author(), original.author());
        assert_eq!(found.genres(), original.genres());
        assert_eq!(catalog.db.get_all_books().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_book_creates_nothing() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let id = BookId::new(Uuid::new_v4());

        let updated = catalog
            .db
            .update_book(UpdateBookDto {
                id: id.clone(),
                title: "Nowhere".to_string(),
                author_id: catalog.authors[0].id().clone(),
                genre_ids: vec![],
            })
            .await?;

        assert!(updated.is_none());
        assert!(catalog.db.get_book(GetBookDto { id }).await?.is_none());
        assert_eq!(catalog.db.get_all_books().await?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_genre_leaves_book_untouched(
    ) -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let original = &catalog.books[0];

        let result = catalog
            .db
            .update_book(UpdateBookDto {
                id: original.id().clone(),
                title: "Renamed".to_string(),
                author_id: original.author().id().clone(),
                genre_ids: vec![GenreId::new(Uuid::new_v4())],
            })
            .await;

        let error = result.expect_err("unknown genre must be rejected");
        assert!(matches!(error.current_context(), KernelError::NotFound));
        let found = catalog
            .db
            .get_book(GetBookDto {
                id: original.id().clone(),
            })
            .await?;
        assert_eq!(found.as_ref(), Some(original));
        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_author_leaves_book_untouched(
    ) -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let original = &catalog.books[0];

        let result = catalog
            .db
            .update_book(UpdateBookDto {
                id: original.id().clone(),
                title: "Renamed".to_string(),
                author_id: AuthorId::new(Uuid::new_v4()),
                genre_ids: original.genres().iter().map(|g| g.id().clone()).collect(),
            })
            .await;

        let error = result.expect_err("unknown author must be rejected");
        assert!(matches!(error.current_context(), KernelError::NotFound));
        let found = catalog
            .db
            .get_book(GetBookDto {
                id: original.id().clone(),
            })
            .await?;
        assert_eq!(found.as_ref(), Some(original));
        Ok(())
    }

    /// Reports every book as present, as if it was deleted between the
    /// existence check and the write.
    struct StaleBookQuery;

    #[async_trait::async_trait]
    impl BookQuery for StaleBookQuery {
        type Connection = MemoryConnection;
        async fn find_by_id(
            &self,
            con: &mut MemoryConnection,
            id: &BookId,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            InMemoryBookRepository.find_by_id(con, id).await
        }

        async fn find_all(
            &self,
            con: &mut MemoryConnection,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            InMemoryBookRepository.find_all(con).await
        }

        async fn exists(
            &self,
            _: &mut MemoryConnection,
            _: &BookId,
        ) -> error_stack::Result<bool, KernelError> {
            Ok(true)
        }
    }

    struct StaleBooks(InMemoryDatabase);

    #[async_trait::async_trait]
    impl DatabaseConnection for StaleBooks {
        type Connection = MemoryConnection;
        async fn acquire(&self) -> error_stack::Result<MemoryConnection, KernelError> {
            self.0.acquire().await
        }
    }

    impl DependOnBookQuery for StaleBooks {
        type BookQuery = StaleBookQuery;
        fn book_query(&self) -> &Self::BookQuery {
            &StaleBookQuery
        }
    }

    impl DependOnBookModifier for StaleBooks {
        type BookModifier = InMemoryBookRepository;
        fn book_modifier(&self) -> &Self::BookModifier {
            &InMemoryBookRepository
        }
    }

    impl DependOnAuthorQuery for StaleBooks {
        type AuthorQuery = InMemoryAuthorRepository;
        fn author_query(&self) -> &Self::AuthorQuery {
            &InMemoryAuthorRepository
        }
    }

    impl DependOnGenreQuery for StaleBooks {
        type GenreQuery = InMemoryGenreRepository;
        fn genre_query(&self) -> &Self::GenreQuery {
            &InMemoryGenreRepository
        }
    }

    #[tokio::test]
    async fn update_of_book_removed_after_check_is_none() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let stale = StaleBooks(catalog.db.clone());
        let id = BookId::new(Uuid::new_v4());

        let updated = stale
            .update_book(UpdateBookDto {
                id: id.clone(),
                title: "Gone".to_string(),
                author_id: catalog.authors[0].id().clone(),
                genre_ids: vec![catalog.genres[0].id().clone()],
            })
            .await?;

        assert!(updated.is_none());
        assert!(catalog.db.get_book(GetBookDto { id }).await?.is_none());
        assert_eq!(catalog.db.get_all_books().await?, catalog.books);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_book_and_its_comments() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let id = catalog.books[0].id().clone();

        let deletion = catalog
            .db
            .delete_book(DeleteBookDto { id: id.clone() })
            .await?
            .expect("existing book must be deleted");

        assert!(matches!(deletion, BookDeletion::Deleted { comments: 2, .. }));
        assert_eq!(deletion.book(), &catalog.books[0]);
        assert!(catalog.db.get_book(GetBookDto { id: id.clone() }).await?.is_none());

        let mut con = catalog.db.acquire().await?;
        let left = catalog
            .db
            .comment_query()
            .find_by_book_id(&mut con, &id)
            .await?;
        assert!(left.is_empty());
        let other = catalog
            .db
            .comment_query()
            .find_by_book_id(&mut con, catalog.books[1].id())
            .await?;
        assert_eq!(other, vec![catalog.comments[2].clone()]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_missing_book_is_none() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;

        let deletion = catalog
            .db
            .delete_book(DeleteBookDto {
                id: BookId::new(Uuid::new_v4()),
            })
            .await?;

        assert!(deletion.is_none());
        assert_eq!(catalog.db.get_all_books().await?.len(), 3);
        Ok(())
    }

    struct FailingCommentModifier;

    #[async_trait::async_trait]
    impl CommentModifier for FailingCommentModifier {
        type Connection = MemoryConnection;
        async fn create(
            &self,
            _: &mut MemoryConnection,
            _: &CommentText,
            _: &BookId,
        ) -> error_stack::Result<CommentId, KernelError> {
            Err(Report::new(KernelError::Internal))
        }

        async fn update(
            &self,
            _: &mut MemoryConnection,
            _: &Comment,
        ) -> error_stack::Result<bool, KernelError> {
            Err(Report::new(KernelError::Internal))
        }

        async fn delete(
            &self,
            _: &mut MemoryConnection,
            _: &CommentId,
        ) -> error_stack::Result<(), KernelError> {
            Err(Report::new(KernelError::Internal))
        }

        async fn delete_by_book_id(
            &self,
            _: &mut MemoryConnection,
            _: &BookId,
        ) -> error_stack::Result<u64, KernelError> {
            Err(Report::new(KernelError::Internal).attach_printable("comment store unavailable"))
        }
    }

    struct CommentsUnavailable(InMemoryDatabase);

    #[async_trait::async_trait]
    impl DatabaseConnection for CommentsUnavailable {
        type Connection = MemoryConnection;
        async fn acquire(&self) -> error_stack::Result<MemoryConnection, KernelError> {
            self.0.acquire().await
        }
    }

    impl DependOnBookQuery for CommentsUnavailable {
        type BookQuery = InMemoryBookRepository;
        fn book_query(&self) -> &Self::BookQuery {
            &InMemoryBookRepository
        }
    }

    impl DependOnBookModifier for CommentsUnavailable {
        type BookModifier = InMemoryBookRepository;
        fn book_modifier(&self) -> &Self::BookModifier {
            &InMemoryBookRepository
        }
    }

    impl DependOnCommentModifier for CommentsUnavailable {
        type CommentModifier = FailingCommentModifier;
        fn comment_modifier(&self) -> &Self::CommentModifier {
            &FailingCommentModifier
        }
    }

    #[tokio::test]
    async fn delete_reports_orphaned_comments() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let id = catalog.books[0].id().clone();
        let broken = CommentsUnavailable(catalog.db.clone());

        let deletion = broken
            .delete_book(DeleteBookDto { id: id.clone() })
            .await?
            .expect("existing book must be deleted");

        assert!(!deletion.is_complete());
        assert!(matches!(deletion, BookDeletion::CommentsOrphaned { .. }));
        assert!(catalog.db.get_book(GetBookDto { id: id.clone() }).await?.is_none());

        let mut con = catalog.db.acquire().await?;
        let left = catalog
            .db
            .comment_query()
            .find_by_book_id(&mut con, &id)
            .await?;
        assert_eq!(left.len(), 2);
        Ok(())
    }
}
