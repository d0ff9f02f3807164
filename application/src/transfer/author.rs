use kernel::prelude::entity::AuthorId;

pub struct GetAuthorDto {
    pub id: AuthorId,
}

pub struct CreateAuthorDto {
    pub name: String,
}

pub struct UpdateAuthorDto {
    pub id: AuthorId,
    pub name: String,
}

pub struct DeleteAuthorDto {
    pub id: AuthorId,
}
