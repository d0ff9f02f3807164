use uuid::Uuid;

use kernel::interface::query::GenreQuery;
use kernel::interface::update::GenreModifier;
use kernel::prelude::entity::{Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct InMemoryGenreRepository;

#[async_trait::async_trait]
impl GenreQuery for InMemoryGenreRepository {
    type Connection = MemoryConnection;
    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        let genres = con.store.genres.read().await;
        Ok(genres.iter().find(|genre| genre.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        Ok(con.store.genres.read().await.clone())
    }

    async fn find_by_ids(
        &self,
        con: &mut MemoryConnection,
        ids: &[GenreId],
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        let genres = con.store.genres.read().await;
        Ok(genres
            .iter()
            .filter(|genre| ids.contains(genre.id()))
            .cloned()
            .collect())
    }

    async fn exists(
        &self,
        con: &mut MemoryConnection,
        id: &GenreId,
    ) -> error_stack::Result<bool, KernelError> {
        let genres = con.store.genres.read().await;
        Ok(genres.iter().any(|genre| genre.id() == id))
    }
}

#[async_trait::async_trait]
impl GenreModifier for InMemoryGenreRepository {
    type Connection = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        name: &GenreName,
    ) -> error_stack::Result<GenreId, KernelError> {
        let id = GenreId::new(Uuid::new_v4());
        con.store
            .genres
            .write()
            .await
            .push(Genre::new(id.clone(), name.clone()));
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        genre: &Genre,
    ) -> error_stack::Result<bool, KernelError> {
        let mut genres = con.store.genres.write().await;
        let Some(stored) = genres.iter_mut().find(|stored| stored.id() == genre.id()) else {
            return Ok(false);
        };
        *stored = genre.clone();
        Ok(true)
    }

    async fn delete(
        &self,
        con: &mut MemoryConnection,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        con.store
            .genres
            .write()
            .await
            .retain(|genre| genre.id() != genre_id);
        Ok(())
    }
}
