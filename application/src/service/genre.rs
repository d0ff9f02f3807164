use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{DependOnGenreQuery, GenreQuery};
use kernel::interface::update::{DependOnGenreModifier, GenreModifier};
use kernel::prelude::entity::{Genre, GenreName};
use kernel::KernelError;

use crate::transfer::{CreateGenreDto, DeleteGenreDto, GetGenreDto, UpdateGenreDto};

#[async_trait::async_trait]
pub trait GetGenreService: 'static + Sync + Send + DependOnGenreQuery {
    async fn get_genre(&self, dto: GetGenreDto) -> error_stack::Result<Option<Genre>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.genre_query().find_by_id(&mut connection, &dto.id).await
    }

    async fn get_all_genres(&self) -> error_stack::Result<Vec<Genre>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.genre_query().find_all(&mut connection).await
    }
}

impl<T> GetGenreService for T where T: DependOnGenreQuery {}

#[async_trait::async_trait]
pub trait CreateGenreService: 'static + Sync + Send + DependOnGenreModifier {
    async fn create_genre(&self, dto: CreateGenreDto) -> error_stack::Result<Genre, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let name = GenreName::new(dto.name);
        let id = self.genre_modifier().create(&mut connection, &name).await?;
        tracing::info!(genre = %id.as_ref(), "created genre");

        Ok(Genre::new(id, name))
    }
}

impl<T> CreateGenreService for T where T: DependOnGenreModifier {}

#[async_trait::async_trait]
pub trait UpdateGenreService:
    'static + Sync + Send + DependOnGenreQuery + DependOnGenreModifier
{
    async fn update_genre(
        &self,
        dto: UpdateGenreDto,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        if !self.genre_query().exists(&mut connection, &dto.id).await? {
            return Ok(None);
        }
        let genre = Genre::new(dto.id, GenreName::new(dto.name));
        if !self.genre_modifier().update(&mut connection, &genre).await? {
            return Ok(None);
        }
        tracing::info!(genre = %genre.id().as_ref(), "updated genre");

        Ok(Some(genre))
    }
}

impl<T> UpdateGenreService for T where T: DependOnGenreQuery + DependOnGenreModifier {}

#[async_trait::async_trait]
pub trait DeleteGenreService:
    'static + Sync + Send + DependOnGenreQuery + DependOnGenreModifier
{
    async fn delete_genre(
        &self,
        dto: DeleteGenreDto,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let Some(genre) = self.genre_query().find_by_id(&mut connection, &dto.id).await? else {
            return Ok(None);
        };
        self.genre_modifier()
            .delete(&mut connection, genre.id())
            .await?;
        tracing::info!(genre = %genre.id().as_ref(), "deleted genre");

        Ok(Some(genre))
    }
}

impl<T> DeleteGenreService for T where T: DependOnGenreQuery + DependOnGenreModifier {}
