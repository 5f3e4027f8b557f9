use derive_more::derive::{Display, Error};

/// Classification of a [`RepositoryError`], independent of the backend that
/// raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	NotFound,
	AlreadyExists,
	Validation,
	Unexpected,
}

#[derive(Debug, Display, Error)]
pub enum RepositoryError {
	#[display("{element_type} {id} not found")]
	NotFound {
		element_type: &'static str,
		id:           String,
	},
	/// Reserved for backends that can detect identifier collisions.
	#[display("{element_type} {id} already exists")]
	AlreadyExists {
		element_type: &'static str,
		id:           String,
	},
	#[display("Invalid {element_type}: {reason}")]
	Validation {
		element_type: &'static str,
		reason:       String,
	},
	#[display("Error {action} {element_type}: {cause}")]
	Unexpected {
		action:       &'static str,
		element_type: &'static str,
		cause:        String,
	},
}

impl RepositoryError {
	pub fn not_found(
		element_type: &'static str,
		id: impl Into<String>,
	) -> Self {
		Self::NotFound {
			element_type,
			id: id.into(),
		}
	}

	pub fn already_exists(
		element_type: &'static str,
		id: impl Into<String>,
	) -> Self {
		Self::AlreadyExists {
			element_type,
			id: id.into(),
		}
	}

	pub fn validation(
		element_type: &'static str,
		reason: impl Into<String>,
	) -> Self {
		Self::Validation {
			element_type,
			reason: reason.into(),
		}
	}

	pub fn unexpected(
		action: &'static str,
		element_type: &'static str,
		cause: impl std::fmt::Display,
	) -> Self {
		Self::Unexpected {
			action,
			element_type,
			cause: cause.to_string(),
		}
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			RepositoryError::NotFound { .. } => ErrorKind::NotFound,
			RepositoryError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
			RepositoryError::Validation { .. } => ErrorKind::Validation,
			RepositoryError::Unexpected { .. } => ErrorKind::Unexpected,
		}
	}
}
