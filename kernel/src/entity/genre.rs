mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Genre {
    id: GenreId,
    name: GenreName,
}

impl Genre {
    pub fn new(id: GenreId, name: GenreName) -> Self {
        Self { id, name }
    }
}
