use uuid::Uuid;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{Author, AuthorId, AuthorName};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct InMemoryAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for InMemoryAuthorRepository {
    type Connection = MemoryConnection;
    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let authors = con.store.authors.read().await;
        Ok(authors.iter().find(|author| author.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        Ok(con.store.authors.read().await.clone())
    }

    async fn find_by_ids(
        &self,
        con: &mut MemoryConnection,
        ids: &[AuthorId],
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let authors = con.store.authors.read().await;
        Ok(authors
            .iter()
            .filter(|author| ids.contains(author.id()))
            .cloned()
            .collect())
    }

    async fn exists(
        &self,
        con: &mut MemoryConnection,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        let authors = con.store.authors.read().await;
        Ok(authors.iter().any(|author| author.id() == id))
    }
}

#[async_trait::async_trait]
impl AuthorModifier for InMemoryAuthorRepository {
    type Connection = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        name: &AuthorName,
    ) -> error_stack::Result<AuthorId, KernelError> {
        let id = AuthorId::new(Uuid::new_v4());
        con.store
            .authors
            .write()
            .await
            .push(Author::new(id.clone(), name.clone()));
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        author: &Author,
    ) -> error_stack::Result<bool, KernelError> {
        let mut authors = con.store.authors.write().await;
        let Some(stored) = authors.iter_mut().find(|stored| stored.id() == author.id()) else {
            return Ok(false);
        };
        *stored = author.clone();
        Ok(true)
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        con.store
            .authors
            .write()
            .await
            .retain(|author| author.id() != author_id);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AuthorQuery;
    use kernel::interface::update::AuthorModifier;
    use kernel::prelude::entity::{Author, AuthorId, AuthorName};
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::database::memory::{InMemoryAuthorRepository, InMemoryDatabase};

    #[tokio::test]
    async fn find_by_ids_skips_unknown() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;

        let name = AuthorName::new("Ursula K. Le Guin");
        let id = InMemoryAuthorRepository.create(&mut con, &name).await?;
        InMemoryAuthorRepository
            .create(&mut con, &AuthorName::new("Octavia E. Butler"))
            .await?;

        let found = InMemoryAuthorRepository
            .find_by_ids(&mut con, &[id.clone(), AuthorId::new(Uuid::new_v4())])
            .await?;
        assert_eq!(found, vec![Author::new(id, name)]);

        let none = InMemoryAuthorRepository.find_by_ids(&mut con, &[]).await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_author_writes_nothing() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.acquire().await?;

        let ghost = Author::new(AuthorId::new(Uuid::new_v4()), AuthorName::new("Nobody"));
        assert!(!InMemoryAuthorRepository.update(&mut con, &ghost).await?);
        assert!(InMemoryAuthorRepository.find_all(&mut con).await?.is_empty());
        Ok(())
    }
}
