use super::response::ImageResponse;
use crate::{constants::IMAGE_FIELD_NAME, error::*, log::*};
use axum::{
  extract::{multipart::MultipartRejection, Multipart},
  Json,
};

const BODY: &str = "body";

#[utoipa::path(
  post,
  path = "/post-image",
  request_body(content = String, content_type = "multipart/form-data", description = "File sent in the `image` field"),
  responses(
    (status = 200, description = "Name, format and size of the image", body = ImageResponse),
    (status = 422, description = "No image was sent", body = crate::apis::validated::RejectionBody)
  ),
  tag = "images"
)]
pub async fn post_image(
  multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, RequestRejection> {
  let mut multipart = multipart.map_err(|e| RequestRejection::malformed(&[BODY], e.body_text(), "content_type"))?;

  loop {
    let field = match multipart.next_field().await {
      Ok(Some(field)) => field,
      Ok(None) => break,
      Err(e) => return Err(RequestRejection::malformed(&[BODY], e.to_string(), "value_error")),
    };
    if field.name() != Some(IMAGE_FIELD_NAME) {
      continue;
    }

    let filename = field.file_name().map(str::to_owned);
    let format = field.content_type().map(str::to_owned);
    let bytes = field
      .bytes()
      .await
      .map_err(|e| RequestRejection::malformed(&[BODY, IMAGE_FIELD_NAME], e.to_string(), "value_error"))?;

    debug!("Received image {:?} of {} bytes", filename, bytes.len());
    return Ok(Json(ImageResponse {
      filename,
      format,
      size_kb: ImageResponse::size_in_kb(bytes.len()),
    }));
  }

  Err(RequestRejection::malformed(&[BODY, IMAGE_FIELD_NAME], "field required", "missing"))
}
