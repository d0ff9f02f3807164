use crate::controller::{Intake, TryIntake};
use crate::request::{require_id, require_text};
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetBookCommentsDto, GetBookDto, UpdateBookDto,
};
use error_stack::Report;
use kernel::prelude::entity::{AuthorId, BookId, GenreId};
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

// Only ids are read from the embedded references; names come from the store.
#[derive(Debug, Deserialize)]
pub struct AuthorReference {
    id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct GenreReference {
    id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    title: String,
    author_dto: AuthorReference,
    #[serde(default)]
    genre_dtos: Vec<GenreReference>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    id: Option<Uuid>,
    title: String,
    author_dto: AuthorReference,
    #[serde(default)]
    genre_dtos: Vec<GenreReference>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: Uuid,
}

impl GetBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: Uuid,
}

impl DeleteBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetBookCommentsRequest {
    id: Uuid,
}

impl GetBookCommentsRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

fn references(
    author: AuthorReference,
    genres: Vec<GenreReference>,
) -> error_stack::Result<(AuthorId, Vec<GenreId>), KernelError> {
    let author_id = AuthorId::new(require_id("authorDto.id", author.id)?);
    let genre_ids = genres
        .into_iter()
        .map(|genre| require_id("genreDtos.id", genre.id).map(GenreId::new))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((author_id, genre_ids))
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        let title = require_text("title", input.title)?;
        let (author_id, genre_ids) = references(input.author_dto, input.genre_dtos)?;
        Ok(CreateBookDto {
            title,
            author_id,
            genre_ids,
        })
    }
}

impl TryIntake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: UpdateBookRequest) -> Result<Self::To, Self::Error> {
        let id = BookId::new(require_id("id", input.id)?);
        let title = require_text("title", input.title)?;
        let (author_id, genre_ids) = references(input.author_dto, input.genre_dtos)?;
        Ok(UpdateBookDto {
            id,
            title,
            author_id,
            genre_ids,
        })
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto {
            id: BookId::new(input.id),
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto {
            id: BookId::new(input.id),
        }
    }
}

impl Intake<GetBookCommentsRequest> for BookTransformer {
    type To = GetBookCommentsDto;
    fn emit(&self, input: GetBookCommentsRequest) -> Self::To {
        GetBookCommentsDto {
            book_id: BookId::new(input.id),
        }
    }
}
