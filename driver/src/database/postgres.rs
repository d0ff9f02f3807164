use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::pool::PoolConnection;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{Connection, DatabaseConnection};
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookQuery, DependOnCommentQuery, DependOnGenreQuery,
};
use kernel::interface::update::{
    DependOnAuthorModifier, DependOnBookModifier, DependOnCommentModifier, DependOnGenreModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

pub use self::{author::*, book::*, comment::*, genre::*};

mod author;
mod book;
mod comment;
mod genre;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL).change_context_lazy(|| KernelError::Internal)?;
        let pool = Pool::connect(&url)
            .await
            .change_context_lazy(|| DriverError::SqlX)
            .change_context_lazy(|| KernelError::Internal)?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .change_context_lazy(|| DriverError::Migration)
            .change_context_lazy(|| KernelError::Internal)?;
        tracing::info!("postgres catalog store ready");
        Ok(Self { pool })
    }
}

pub struct PostgresConnection(PoolConnection<Postgres>);

impl Connection for PostgresConnection {}

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Connection = PostgresConnection;
    async fn acquire(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(PostgresConnection(con))
    }
}

impl DependOnAuthorQuery for PostgresDatabase {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnAuthorModifier for PostgresDatabase {
    type AuthorModifier = PostgresAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &PostgresAuthorRepository
    }
}

impl DependOnGenreQuery for PostgresDatabase {
    type GenreQuery = PostgresGenreRepository;
    fn genre_query(&self) -> &Self::GenreQuery {
        &PostgresGenreRepository
    }
}

impl DependOnGenreModifier for PostgresDatabase {
    type GenreModifier = PostgresGenreRepository;
    fn genre_modifier(&self) -> &Self::GenreModifier {
        &PostgresGenreRepository
    }
}

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnCommentQuery for PostgresDatabase {
    type CommentQuery = PostgresCommentRepository;
    fn comment_query(&self) -> &Self::CommentQuery {
        &PostgresCommentRepository
    }
}

impl DependOnCommentModifier for PostgresDatabase {
    type CommentModifier = PostgresCommentRepository;
    fn comment_modifier(&self) -> &Self::CommentModifier {
        &PostgresCommentRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
