use crate::config::{DatabaseKind, ServerConfig};
use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::CatalogServices;
use driver::database::{InMemoryDatabase, PostgresDatabase};
use error_stack::ResultExt;
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "application=debug,driver=debug,server=debug,tower_http=debug,sqlx=info"
                            .into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(database = ?config.database(), addr = %config.addr(), "starting catalog");

    match config.database() {
        DatabaseKind::Postgres => {
            let database = PostgresDatabase::new().await?;
            serve(AppModule::new(database), config.addr()).await?;
        }
        DatabaseKind::Memory => {
            serve(AppModule::new(InMemoryDatabase::new()), config.addr()).await?;
        }
    }

    Ok(())
}

async fn serve<D: CatalogServices>(
    module: AppModule<D>,
    bind: SocketAddr,
) -> error_stack::Result<(), KernelError> {
    let router = route::router(module);

    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
