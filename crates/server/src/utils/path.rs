use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] whose rejections are reported as [`AppError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
