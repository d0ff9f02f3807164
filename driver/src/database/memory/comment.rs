use uuid::Uuid;

use kernel::interface::query::CommentQuery;
use kernel::interface::update::CommentModifier;
use kernel::prelude::entity::{BookId, Comment, CommentId, CommentText};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct InMemoryCommentRepository;

#[async_trait::async_trait]
impl CommentQuery for InMemoryCommentRepository {
    type Connection = MemoryConnection;
    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &CommentId,
    ) -> error_stack::Result<Option<Comment>, KernelError> {
        let comments = con.store.comments.read().await;
        Ok(comments.iter().find(|comment| comment.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        Ok(con.store.comments.read().await.clone())
    }

    async fn find_by_book_id(
        &self,
        con: &mut MemoryConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Comment>, KernelError> {
        let comments = con.store.comments.read().await;
        Ok(comments
            .iter()
            .filter(|comment| comment.book_id() == book_id)
            .cloned()
            .collect())
    }

    async fn exists(
        &self,
        con: &mut MemoryConnection,
        id: &CommentId,
    ) -> error_stack::Result<bool, KernelError> {
        let comments = con.store.comments.read().await;
        Ok(comments.iter().any(|comment| comment.id() == id))
    }
}

#[async_trait::async_trait]
impl CommentModifier for InMemoryCommentRepository {
    type Connection = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        text: &CommentText,
        book_id: &BookId,
    ) -> error_stack::Result<CommentId, KernelError> {
        let id = CommentId::new(Uuid::new_v4());
        let comment = Comment::new(id.clone(), text.clone(), book_id.clone());
        con.store.comments.write().await.push(comment);
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        comment: &Comment,
    ) -> error_stack::Result<bool, KernelError> {
        let mut comments = con.store.comments.write().await;
        let Some(stored) = comments.iter_mut().find(|stored| stored.id() == comment.id()) else {
            return Ok(false);
        };
        *stored = comment.clone();
        Ok(true)
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        comment_id: &CommentId,
    ) -> error_stack::Result<(), KernelError> {
        con.store
            .comments
            .write()
            .await
            .retain(|comment| comment.id() != comment_id);
        Ok(())
    }

    async fn delete_by_book_id(
        &self,
        con: &mut MemoryConnection,
        book_id: &BookId,
    ) -> error_stack::Result<u64, KernelError> {
        let mut comments = con.store.comments.write().await;
        let before = comments.len();
        comments.retain(|comment| comment.book_id() != book_id);
        Ok((before - comments.len()) as u64)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CommentQuery;
    use kernel::interface::update::CommentModifier;
    use kernel::prelude::entity::{BookId, Comment, CommentId, CommentText};
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::database::memory::{InMemoryCommentRepository, InMemoryDatabase};

    #[tokio::test]
    async fn exists_follows_create_and_delete() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;
        let book_id = BookId::new(Uuid::new_v4());

        let id = InMemoryCommentRepository
            .create(&mut con, &CommentText::new("Worth rereading"), &book_id)
            .await?;
        assert!(InMemoryCommentRepository.exists(&mut con, &id).await?);
        assert!(
            !InMemoryCommentRepository
                .exists(&mut con, &CommentId::new(Uuid::new_v4()))
                .await?
        );

        InMemoryCommentRepository.delete(&mut con, &id).await?;
        assert!(!InMemoryCommentRepository.exists(&mut con, &id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_comment_writes_nothing() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;

        let ghost = Comment::new(
            CommentId::new(Uuid::new_v4()),
            CommentText::new("Lost"),
            BookId::new(Uuid::new_v4()),
        );
        assert!(!InMemoryCommentRepository.update(&mut con, &ghost).await?);
        assert!(InMemoryCommentRepository.find_all(&mut con).await?.is_empty());
        Ok(())
    }
}
