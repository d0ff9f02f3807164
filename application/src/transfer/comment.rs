use kernel::prelude::entity::{BookId, CommentId};

pub struct GetCommentDto {
    pub id: CommentId,
}

pub struct GetBookCommentsDto {
    pub book_id: BookId,
}

pub struct CreateCommentDto {
    pub text: String,
    pub book_id: BookId,
}

pub struct UpdateCommentDto {
    pub id: CommentId,
    pub text: String,
}

pub struct DeleteCommentDto {
    pub id: CommentId,
}
