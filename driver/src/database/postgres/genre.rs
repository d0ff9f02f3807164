use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::GenreQuery;
use kernel::interface::update::GenreModifier;
use kernel::prelude::entity::{Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresGenreRepository;

#[async_trait::async_trait]
impl GenreQuery for PostgresGenreRepository {
    type Connection = PostgresConnection;
    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        PgGenreInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        PgGenreInternal::find_all(con).await
    }

    async fn find_by_ids(
        &self,
        con: &mut PostgresConnection,
        ids: &[GenreId],
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        PgGenreInternal::find_by_ids(con, ids).await
    }

    async fn exists(
        &self,
        con: &mut PostgresConnection,
        id: &GenreId,
    ) -> error_stack::Result<bool, KernelError> {
        PgGenreInternal::exists(con, id).await
    }
}

#[async_trait::async_trait]
impl GenreModifier for PostgresGenreRepository {
    type Connection = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        name: &GenreName,
    ) -> error_stack::Result<GenreId, KernelError> {
        PgGenreInternal::create(con, name).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        genre: &Genre,
    ) -> error_stack::Result<bool, KernelError> {
        PgGenreInternal::update(con, genre).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        PgGenreInternal::delete(con, genre_id).await
    }
}

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: Uuid,
    name: String,
}

impl From<GenreRow> for Genre {
    fn from(value: GenreRow) -> Self {
        Genre::new(GenreId::new(value.id), GenreName::new(value.name))
    }
}

pub(in crate::database) struct PgGenreInternal;

impl PgGenreInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        let row = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        tracing::debug!(genre = %id.as_ref(), found = row.is_some(), "fetched genre");
        Ok(row.map(Genre::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Genre>, KernelError> {
        let rows = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(rows = rows.len(), "fetched all genres");
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_ids(
        con: &mut PgConnection,
        ids: &[GenreId],
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        let ids = ids.iter().map(|id| *id.as_ref()).collect::<Vec<Uuid>>();
        let rows = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            WHERE id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(&ids)
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(requested = ids.len(), rows = rows.len(), "fetched genres by id");
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn exists(con: &mut PgConnection, id: &GenreId) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        name: &GenreName,
    ) -> error_stack::Result<GenreId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(GenreId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        genre: &Genre,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE genres
            SET name = $2
            WHERE id = $1
            "#,
        )
        .bind(genre.id().as_ref())
        .bind(genre.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(
        con: &mut PgConnection,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM genres
            WHERE id = $1
            "#,
        )
        .bind(genre_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
