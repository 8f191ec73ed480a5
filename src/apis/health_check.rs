use crate::log::*;

#[utoipa::path(
  get,
  path = "/health",
  responses((status = 200, description = "Server is up", body = String)),
  tag = "home"
)]
pub async fn health_check() -> &'static str {
  debug!("health_check invoked");
  "Works at least as a server. Not checked if APIs work well."
}
