use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::domain::errors::{ErrorKind, RepositoryError};

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("{message}")]
	NotFound { message: String },
	#[display("{message}")]
	Conflict { message: String },
	#[display("{message}")]
	BadClientData { message: String },
	#[display("{message}")]
	InternalServerError { message: String },
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::NotFound { .. } => "Not Found".to_string(),
			ApiError::Conflict { .. } => "Conflict".to_string(),
			ApiError::BadClientData { .. } => "Bad request".to_string(),
			ApiError::InternalServerError { .. } => {
				"Internal Server Error".to_string()
			}
		}
	}

	/// Wraps a repository failure, prefixing its message with `context`.
	pub fn from_repository(
		context: impl std::fmt::Display,
		e: RepositoryError,
	) -> Self {
		let message = format!("{context}: {e}");
		match e.kind() {
			ErrorKind::NotFound => ApiError::NotFound { message },
			ErrorKind::AlreadyExists => ApiError::Conflict { message },
			ErrorKind::Validation | ErrorKind::Unexpected => {
				ApiError::InternalServerError { message }
			}
		}
	}
}

impl From<RepositoryError> for ApiError {
	fn from(e: RepositoryError) -> Self {
		ApiError::from_repository("Error accessing payments", e)
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.name(),
				message:     self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
			ApiError::Conflict { .. } => StatusCode::CONFLICT,
			ApiError::BadClientData { .. } => StatusCode::BAD_REQUEST,
			ApiError::InternalServerError { .. } => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}
