use crate::controller::{Intake, TryIntake};
use crate::request::{require_id, require_text};
use application::transfer::{CreateGenreDto, DeleteGenreDto, GetGenreDto, UpdateGenreDto};
use error_stack::Report;
use kernel::prelude::entity::GenreId;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateGenreRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGenreRequest {
    id: Option<Uuid>,
    name: String,
}

#[derive(Debug)]
pub struct GetGenreRequest {
    id: Uuid,
}

impl GetGenreRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteGenreRequest {
    id: Uuid,
}

impl DeleteGenreRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct GenreTransformer;

impl TryIntake<CreateGenreRequest> for GenreTransformer {
    type To = CreateGenreDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateGenreRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateGenreDto {
            name: require_text("name", input.name)?,
        })
    }
}

impl TryIntake<UpdateGenreRequest> for GenreTransformer {
    type To = UpdateGenreDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateGenreRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateGenreDto {
            id: GenreId::new(require_id("id", input.id)?),
            name: require_text("name", input.name)?,
        })
    }
}

impl Intake<GetGenreRequest> for GenreTransformer {
    type To = GetGenreDto;
    fn emit(&self, input: GetGenreRequest) -> Self::To {
        GetGenreDto {
            id: GenreId::new(input.id),
        }
    }
}

impl Intake<DeleteGenreRequest> for GenreTransformer {
    type To = DeleteGenreDto;
    fn emit(&self, input: DeleteGenreRequest) -> Self::To {
        DeleteGenreDto {
            id: GenreId::new(input.id),
        }
    }
}
