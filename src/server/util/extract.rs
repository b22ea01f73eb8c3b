use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON request body extractor.
///
/// Same as `axum::Json`, except a body that fails to parse or deserialize is answered with
/// 400 and the usual `{"error": ...}` body instead of axum's plain-text 4xx.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
