use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::CommentQuery;
use kernel::interface::update::CommentModifier;
use kernel::prelude::entity::{BookId, Comment, CommentId, CommentText};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresCommentRepository;

#[async_trait::async_trait]
impl CommentQuery for PostgresCommentRepository {
    type Connection = PostgresConnection;
    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &CommentId,
    ) -> error_stack::Result<Option<Comment>, KernelError> {
        PgCommentInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        PgCommentInternal::find_all(con).await
    }

    async fn find_by_book_id(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        PgCommentInternal::find_by_book_id(con, book_id).await
    }

    async fn exists(
        &self,
        con: &mut PostgresConnection,
        id: &CommentId,
    ) -> error_stack::Result<bool, KernelError> {
        PgCommentInternal::exists(con, id).await
    }
}

#[async_trait::async_trait]
impl CommentModifier for PostgresCommentRepository {
    type Connection = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        text: &CommentText,
        book_id: &BookId,
    ) -> error_stack::Result<CommentId, KernelError> {
        PgCommentInternal::create(con, text, book_id).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        comment: &Comment,
    ) -> error_stack::Result<bool, KernelError> {
        PgCommentInternal::update(con, comment).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        comment_id: &CommentId,
    ) -> error_stack::Result<(), KernelError> {
        PgCommentInternal::delete(con, comment_id).await
    }

    async fn delete_by_book_id(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<u64, KernelError> {
        PgCommentInternal::delete_by_book_id(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    text: String,
    book_id: Uuid,
}

impl From<CommentRow> for Comment {
    fn from(value: CommentRow) -> Self {
        Comment::new(
            CommentId::new(value.id),
            CommentText::new(value.text),
            BookId::new(value.book_id),
        )
    }
}

pub(in crate::database) struct PgCommentInternal;

impl PgCommentInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CommentId,
    ) -> error_stack::Result<Option<Comment>, KernelError> {
        let row = sqlx::query_as::<_, CommentRow>(
            // language=postgresql
            r#"
            SELECT id, text, book_id
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        tracing::debug!(comment = %id.as_ref(), found = row.is_some(), "fetched comment");
        Ok(row.map(Comment::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Comment>, KernelError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            // language=postgresql
            r#"
            SELECT id, text, book_id
            FROM comments
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(rows = rows.len(), "fetched all comments");
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn find_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            // language=postgresql
            r#"
            SELECT id, text, book_id
            FROM comments
            WHERE book_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        tracing::debug!(book = %book_id.as_ref(), rows = rows.len(), "fetched comments of book");
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn exists(
        con: &mut PgConnection,
        id: &CommentId,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn create(
        con: &mut PgConnection,
        text: &CommentText,
        book_id: &BookId,
    ) -> error_stack::Result<CommentId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO comments (text, book_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(text.as_ref())
        .bind(book_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(CommentId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        comment: &Comment,
    ) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET text = $2
            WHERE id = $1
            "#,
        )
        .bind(comment.id().as_ref())
        .bind(comment.text().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(
        con: &mut PgConnection,
        comment_id: &CommentId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn delete_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<u64, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected())
    }
}
