//! Service lifecycle: a store connection plus an HTTP listener, acquired by
//! [`start`] and released together by [`BlogServer::stop`].

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::rt::task::JoinHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;

use crate::config::Config;
use crate::database::connect_store;
use crate::middleware::not_found::not_found;
use crate::post::{PostStore, StoreError};
use crate::router::index::routes;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(String),
}

/// A running service. Dropping it without calling [`BlogServer::stop`]
/// leaves the listener running until the actix system shuts down.
pub struct BlogServer {
    store: Arc<dyn PostStore>,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    addrs: Vec<SocketAddr>,
}

impl BlogServer {
    pub fn local_addrs(&self) -> &[SocketAddr] {
        &self.addrs
    }

    /// Close the store connection, then stop the listener.
    pub async fn stop(self) -> Result<(), ServerError> {
        log::info!("Stopping server");
        self.store.close().await;
        self.handle.stop(true).await;

        self.task
            .await
            .map_err(|e| ServerError::Join(e.to_string()))??;
        log::info!("Server has stopped");
        Ok(())
    }
}

/// Connect to the configured store, then bind the HTTP listener.
pub async fn start(config: &Config) -> Result<BlogServer, ServerError> {
    let store = connect_store(&config.database_url, &config.database_name).await?;
    serve(store, &config.host, config.port, &config.public_dir).await
}

/// The application every worker runs: the API first, then static assets
/// from `public_dir` at `/`, with unmatched paths answered as JSON 404s.
pub fn app(
    data: web::Data<dyn PostStore>,
    public_dir: PathBuf,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
        .app_data(data)
        .configure(routes)
        .service(Files::new("/", public_dir).index_file("index.html"))
}

/// Bind the HTTP listener over an already connected store. If binding fails
/// the store is closed before the error is returned.
pub async fn serve(
    store: Arc<dyn PostStore>,
    host: &str,
    port: u16,
    public_dir: &Path,
) -> Result<BlogServer, ServerError> {
    let data = web::Data::from(store.clone());
    let public_dir = public_dir.to_path_buf();

    let bound = HttpServer::new(move || app(data.clone(), public_dir.clone()))
        .disable_signals()
        .bind((host, port));

    let bound = match bound {
        Ok(bound) => bound,
        Err(e) => {
            log::error!("Failed to bind {}:{}: {}", host, port, e);
            store.close().await;
            return Err(e.into());
        }
    };

    let addrs = bound.addrs();
    let server = bound.run();
    let handle = server.handle();
    let task = actix_web::rt::spawn(server);

    for addr in &addrs {
        log::info!("Listening on http://{}", addr);
    }

    Ok(BlogServer {
        store,
        handle,
        task,
        addrs,
    })
}
