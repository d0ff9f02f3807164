use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{Author, AuthorName};
use kernel::KernelError;

use crate::transfer::{CreateAuthorDto, DeleteAuthorDto, GetAuthorDto, UpdateAuthorDto};

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_author(&self, dto: GetAuthorDto) -> error_stack::Result<Option<Author>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.author_query().find_by_id(&mut connection, &dto.id).await
    }

    async fn get_all_authors(&self) -> error_stack::Result<Vec<Author>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;
        self.author_query().find_all(&mut connection).await
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait CreateAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    async fn create_author(&self, dto: CreateAuthorDto) -> error_stack::Result<Author, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let name = AuthorName::new(dto.name);
        let id = self.author_modifier().create(&mut connection, &name).await?;
        tracing::info!(author = %id.as_ref(), "created author");

        Ok(Author::new(id, name))
    }
}

impl<T> CreateAuthorService for T where T: DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait UpdateAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier
{
    async fn update_author(
        &self,
        dto: UpdateAuthorDto,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        if !self.author_query().exists(&mut connection, &dto.id).await? {
            return Ok(None);
        }
        let author = Author::new(dto.id, AuthorName::new(dto.name));
        if !self.author_modifier().update(&mut connection, &author).await? {
            return Ok(None);
        }
        tracing::info!(author = %author.id().as_ref(), "updated author");

        Ok(Some(author))
    }
}

impl<T> UpdateAuthorService for T where T: DependOnAuthorQuery + DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait DeleteAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier
{
    async fn delete_author(
        &self,
        dto: DeleteAuthorDto,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let Some(author) = self.author_query().find_by_id(&mut connection, &dto.id).await? else {
            return Ok(None);
        };
        self.author_modifier()
            .delete(&mut connection, author.id())
            .await?;
        tracing::info!(author = %author.id().as_ref(), "deleted author");

        Ok(Some(author))
    }
}

impl<T> DeleteAuthorService for T where T: DependOnAuthorQuery + DependOnAuthorModifier {}
