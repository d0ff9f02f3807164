mod author;
mod book;
mod comment;
mod genre;

pub use self::{author::*, book::*, comment::*, genre::*};

use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

fn require_text(field: &str, value: String) -> error_stack::Result<String, KernelError> {
    if value.trim().is_empty() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{field} must not be blank")));
    }
    Ok(value)
}

fn require_id(field: &str, id: Option<Uuid>) -> error_stack::Result<Uuid, KernelError> {
    id.ok_or_else(|| {
        Report::new(KernelError::Validation).attach_printable(format!("{field} is required"))
    })
}
