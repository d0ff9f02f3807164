use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Failed to read environment variable")]
    Env,
    #[error("Failed to communicate with postgres")]
    SqlX,
    #[error("Failed to apply postgres migrations")]
    Migration,
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
