use crate::table::PersonTable;
use std::net::SocketAddr;

pub struct AppState {
  pub listen_socket: SocketAddr,
  /// Upper bound of a request body, applied to every route
  pub max_upload_bytes: usize,
  pub person_table: Box<dyn PersonTable>,
}
