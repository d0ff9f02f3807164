mod author;
mod book;
mod comment;
mod genre;

pub use self::{author::*, book::*, comment::*, genre::*};
