mod apis;
mod config;
mod constants;
mod entity;
mod error;
mod fields;
mod log;
mod state;
mod table;

use crate::{
  apis::{
    contact, create_person, health_check, home, login, openapi_document, person_detail, post_image, show_person,
    update_person,
  },
  constants::*,
  error::*,
  log::*,
  state::AppState,
};
use axum::{
  extract::DefaultBodyLimit,
  routing::{get, post, put},
  Router,
};
use config::parse_opts;
use std::sync::Arc;
use tokio::runtime::Builder;

fn main() -> Result<()> {
  init_logger();

  let mut runtime_builder = Builder::new_multi_thread();
  runtime_builder.enable_all();
  runtime_builder.thread_name(THREAD_NAME);
  let runtime = runtime_builder.build()?;

  runtime.block_on(async {
    match parse_opts().await {
      Ok(Some(shared_state)) => {
        if let Err(e) = define_route(Arc::new(shared_state)).await {
          error!("Server is down!: {e}");
        }
      }
      Ok(None) => {
        warn!("Nothing to run");
      }
      Err(e) => {
        error!("{e}");
      }
    };
  });

  Ok(())
}

/// Route table of the service
pub(crate) fn router(shared_state: Arc<AppState>) -> Router {
  let body_limit = shared_state.max_upload_bytes;

  Router::new()
    .route("/", get(home))
    .route("/health", get(health_check))
    .route("/openapi.json", get(openapi_document))
    .route("/person/new", post(create_person))
    .route("/person/detail", get(person_detail))
    .route("/person/detail/:person_id", get(show_person))
    .route("/person/:person_id", put(update_person))
    .route("/login", post(login))
    .route("/contact", post(contact))
    .route("/post-image", post(post_image))
    .layer(DefaultBodyLimit::max(body_limit))
    .with_state(shared_state)
}

async fn define_route(shared_state: Arc<AppState>) -> Result<()> {
  let addr = shared_state.listen_socket;
  let tcp_listener = tokio::net::TcpListener::bind(&addr).await?;
  info!("Listening on {}", &addr);

  axum::serve(tcp_listener, router(shared_state)).await?;

  Ok(())
}
