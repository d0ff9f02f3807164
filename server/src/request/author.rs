use crate::controller::{Intake, TryIntake};
use crate::request::{require_id, require_text};
use application::transfer::{CreateAuthorDto, DeleteAuthorDto, GetAuthorDto, UpdateAuthorDto};
use error_stack::Report;
use kernel::prelude::entity::AuthorId;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    id: Option<Uuid>,
    name: String,
}

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: Uuid,
}

impl GetAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteAuthorRequest {
    id: Uuid,
}

impl DeleteAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct AuthorTransformer;

impl TryIntake<CreateAuthorRequest> for AuthorTransformer {
    type To = CreateAuthorDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateAuthorRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateAuthorDto {
            name: require_text("name", input.name)?,
        })
    }
}

impl TryIntake<UpdateAuthorRequest> for AuthorTransformer {
    type To = UpdateAuthorDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateAuthorRequest) -> Result<Self::To, Self::Error> {
        Ok(UpdateAuthorDto {
            id: AuthorId::new(require_id("id", input.id)?),
            name: require_text("name", input.name)?,
        })
    }
}

impl Intake<GetAuthorRequest> for AuthorTransformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetAuthorRequest) -> Self::To {
        GetAuthorDto {
            id: AuthorId::new(input.id),
        }
    }
}

impl Intake<DeleteAuthorRequest> for AuthorTransformer {
    type To = DeleteAuthorDto;
    fn emit(&self, input: DeleteAuthorRequest) -> Self::To {
        DeleteAuthorDto {
            id: AuthorId::new(input.id),
        }
    }
}
