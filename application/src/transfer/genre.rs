use kernel::prelude::entity::GenreId;

pub struct GetGenreDto {
    pub id: GenreId,
}

pub struct CreateGenreDto {
    pub name: String,
}

pub struct UpdateGenreDto {
    pub id: GenreId,
    pub name: String,
}

pub struct DeleteGenreDto {
    pub id: GenreId,
}
