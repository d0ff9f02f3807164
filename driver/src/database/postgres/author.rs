use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{Author, AuthorId, AuthorName};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for PostgresAuthorRepository {
    type Connection = PostgresConnection;
    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con).await
    }

    async fn find_by_ids(
        &self,
        con: &mut PostgresConnection,
        ids: &[AuthorId],
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_by_ids(con, ids).await
    }

    async fn exists(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        PgAuthorInternal::exists(con, id).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier for PostgresAuthorRepository {
    type Connection = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        name: &AuthorName,
    ) -> error_stack::Result<AuthorId, KernelError> {
        PgAuthorInternal::create(con, name).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        author: &Author,
    ) -> error_stack::Result<bool, KernelError> {
        PgAuthorInternal::update(con, author).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::delete(con, author_id).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(AuthorId::new(value.id), AuthorName::new(value.name))
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        tracing::debug!(author = %id.as_ref(), found = row.is_some(), "fetched author");
        Ok(row.map(Author::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM authors
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(rows = rows.len(), "fetched all authors");
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_ids(
        con: &mut PgConnection,
        ids: &[AuthorId],
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let ids = ids.iter().map(|id| *id.as_ref()).collect::<Vec<Uuid>>();
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM authors
            WHERE id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(&ids)
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(requested = ids.len(), rows = rows.len(), "fetched authors by id");
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn exists(con: &mut PgConnection, id: &AuthorId) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        name: &AuthorName,
    ) -> error_stack::Result<AuthorId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO authors (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(AuthorId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        author: &Author,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET name = $2
            WHERE id = $1
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(author_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
