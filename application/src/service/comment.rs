use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, CommentQuery, DependOnBookQuery, DependOnCommentQuery};
use kernel::interface::update::{CommentModifier, DependOnCommentModifier};
use kernel::prelude::entity::{Comment, CommentText};
use kernel::KernelError;

use crate::transfer::{
    CreateCommentDto, DeleteCommentDto, GetBookCommentsDto, GetCommentDto, UpdateCommentDto,
};

#[async_trait::async_trait]
pub trait GetCommentService:
    'static + Sync + Send + DependOnCommentQuery + DependOnBookQuery
{
    async fn get_comment(
        &self,
        dto: GetCommentDto,
    ) -> error_stack::Result<Option<Comment>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.comment_query()
            .find_by_id(&mut connection, &dto.id)
            .await
    }

    async fn get_all_comments(&self) -> error_stack::Result<Vec<Comment>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.comment_query().find_all(&mut connection).await
    }

    /// `None` when the book itself does not exist.
    async fn get_book_comments(
        &self,
        dto: GetBookCommentsDto,
    ) -> error_stack::Result<Option<Vec<Comment>>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        if !self.book_query().exists(&mut connection, &dto.book_id).await? {
            return Ok(None);
        }
        let comments = self
            .comment_query()
            .find_by_book_id(&mut connection, &dto.book_id)
            .await?;
        Ok(Some(comments))
    }
}

impl<T> GetCommentService for T where T: DependOnCommentQuery + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateCommentService:
    'static + Sync + Send + DependOnBookQuery + DependOnCommentModifier
{
    async fn create_comment(
        &self,
        dto: CreateCommentDto,
    ) -> error_stack::Result<Comment, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        if !self.book_query().exists(&mut connection, &dto.book_id).await? {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Book {} does not exist", dto.book_id.as_ref())));
        }
        let text = CommentText::new(dto.text);
        let id = self
            .comment_modifier()
            .create(&mut connection, &text, &dto.book_id)
            .await?;
        tracing::info!(comment = %id.as_ref(), book = %dto.book_id.as_ref(), "created comment");

        Ok(Comment::new(id, text, dto.book_id))
    }
}

impl<T> CreateCommentService for T where T: DependOnBookQuery + DependOnCommentModifier {}

#[async_trait::async_trait]
pub trait UpdateCommentService:
    'static + Sync + Send + DependOnCommentQuery + DependOnCommentModifier
{
    /// Only the text changes; a comment never moves to another book.
    async fn update_comment(
        &self,
        dto: UpdateCommentDto,
    ) -> error_stack::Result<Option<Comment>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let Some(comment) = self
            .comment_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
        else {
            return Ok(None);
        };
        let comment = comment.reconstruct(|c| c.text = CommentText::new(dto.text));
        if !self
            .comment_modifier()
            .update(&mut connection, &comment)
            .await?
        {
            return Ok(None);
        }
        tracing::info!(comment = %comment.id().as_ref(), "updated comment");

        Ok(Some(comment))
    }
}

impl<T> UpdateCommentService for T where T: DependOnCommentQuery + DependOnCommentModifier {}

#[async_trait::async_trait]
pub trait DeleteCommentService:
    'static + Sync + Send + DependOnCommentQuery + DependOnCommentModifier
{
    async fn delete_comment(
        &self,
        dto: DeleteCommentDto,
    ) -> error_stack::Result<Option<Comment>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let Some(comment) = self
            .comment_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
        else {
            return Ok(None);
        };
        self.comment_modifier()
            .delete(&mut connection, comment.id())
            .await?;
        tracing::info!(comment = %comment.id().as_ref(), "deleted comment");

        Ok(Some(comment))
    }
}

impl<T> DeleteCommentService for T where T: DependOnCommentQuery + DependOnCommentModifier {}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::{CommentQuery, DependOnCommentQuery};
    use kernel::prelude::entity::BookId;
    use kernel::KernelError;

    use crate::fixture::catalog;
    use crate::service::{
        CreateCommentService, DeleteBookService, DeleteCommentService, GetCommentService,
        UpdateCommentService,
    };
    use crate::transfer::{
        CreateCommentDto, DeleteBookDto, DeleteCommentDto, GetBookCommentsDto, GetCommentDto,
        UpdateCommentDto,
    };

    #[tokio::test]
    async fn deleted_comment_no_longer_exists() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let id = catalog.comments[0].id().clone();
        let mut con = catalog.db.acquire().await?;
        assert!(catalog.db.comment_query().exists(&mut con, &id).await?);

        let deleted = catalog
            .db
            .delete_comment(DeleteCommentDto { id: id.clone() })
            .await?;

        assert_eq!(deleted.as_ref(), Some(&catalog.comments[0]));
        assert!(!catalog.db.comment_query().exists(&mut con, &id).await?);
        assert!(catalog.db.delete_comment(DeleteCommentDto { id }).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn comment_on_missing_book_is_rejected() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;

        let result = catalog
            .db
            .create_comment(CreateCommentDto {
                text: "lost".to_string(),
                book_id: BookId::new(Uuid::new_v4()),
            })
            .await;

        let error = result.expect_err("comment without book must be rejected");
        assert!(matches!(error.current_context(), KernelError::NotFound));
        assert_eq!(catalog.db.get_all_comments().await?, catalog.comments);
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_text_only() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let original = &catalog.comments[0];

        let updated = catalog
            .db
            .update_comment(UpdateCommentDto {
                id: original.id().clone(),
                text: "edited".to_string(),
            })
            .await?
            .expect("existing comment must be updated");

        assert_eq!(updated.book_id(), original.book_id());
        assert_eq!(updated.text().as_ref(), "edited");
        let found = catalog
            .db
            .get_comment(GetCommentDto {
                id: original.id().clone(),
            })
            .await?;
        assert_eq!(found, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn comments_follow_their_book() -> error_stack::Result<(), KernelError> {
        let catalog = catalog().await?;
        let book_id = catalog.books[2].id().clone();

        let created = catalog
            .db
            .create_comment(CreateCommentDto {
                text: "Comment_4".to_string(),
                book_id: book_id.clone(),
            })
            .await?;
        let listed = catalog
            .db
            .get_book_comments(GetBookCommentsDto {
                book_id: book_id.clone(),
            })
            .await?;
        assert_eq!(listed, Some(vec![created]));

        catalog
            .db
            .delete_book(DeleteBookDto {
                id: book_id.clone(),
            })
            .await?;
        let listed = catalog
            .db
            .get_book_comments(GetBookCommentsDto { book_id })
            .await?;
        assert!(listed.is_none());
        Ok(())
    }
}
