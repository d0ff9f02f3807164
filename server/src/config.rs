use std::net::SocketAddr;

use error_stack::{Report, ResultExt};
use kernel::KernelError;

const DATABASE_KIND: &str = "DATABASE_KIND";
const SERVER_ADDR: &str = "SERVER_ADDR";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DatabaseKind {
    Postgres,
    Memory,
}

impl DatabaseKind {
    fn parse(value: &str) -> error_stack::Result<Self, KernelError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(DatabaseKind::Postgres),
            "memory" => Ok(DatabaseKind::Memory),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("Unknown {DATABASE_KIND} `{other}`"))),
        }
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    database: DatabaseKind,
    addr: SocketAddr,
}

impl ServerConfig {
    /// Reads the process environment, honouring a `.env` file.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::build(
            dotenvy::var(DATABASE_KIND).ok(),
            dotenvy::var(SERVER_ADDR).ok(),
        )
    }

    fn build(
        database: Option<String>,
        addr: Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let database = match database {
            Some(kind) => DatabaseKind::parse(&kind)?,
            None => DatabaseKind::Postgres,
        };
        let addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .change_context_lazy(|| KernelError::Validation)
            .attach_printable_lazy(|| format!("Invalid {SERVER_ADDR} `{addr}`"))?;
        Ok(Self { database, addr })
    }

    pub fn database(&self) -> DatabaseKind {
        self.database
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

#[cfg(test)]
mod test {
    use crate::config::{DatabaseKind, ServerConfig};
    use kernel::KernelError;

    #[test]
    fn defaults_to_postgres_on_8080() -> error_stack::Result<(), KernelError> {
        let config = ServerConfig::build(None, None)?;
        assert_eq!(config.database(), DatabaseKind::Postgres);
        assert_eq!(config.addr().port(), 8080);
        Ok(())
    }

    #[test]
    fn reads_memory_backend_and_address() -> error_stack::Result<(), KernelError> {
        let config = ServerConfig::build(
            Some("Memory".to_string()),
            Some("127.0.0.1:3000".to_string()),
        )?;
        assert_eq!(config.database(), DatabaseKind::Memory);
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
        Ok(())
    }

    #[test]
    fn rejects_unknown_backend() {
        let error = ServerConfig::build(Some("mongo".to_string()), None)
            .expect_err("unknown backend must be rejected");
        assert!(matches!(error.current_context(), KernelError::Validation));
    }
}
