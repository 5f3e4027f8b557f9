use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::payment::Payment;

/// Arbitrary key/value filter accepted by [`PaymentRepository::get_payments`].
/// Backends currently return the full set regardless of its content.
pub type PaymentFilter = HashMap<String, String>;

pub type SharedPaymentRepository = Arc<dyn PaymentRepository>;

/// Storage contract every payment backend implements.
#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	/// Stores `payment` under a freshly generated identifier, discarding any
	/// id it already carries, and returns the stored record.
	async fn add_payment(
		&self,
		payment: Payment,
	) -> Result<Payment, RepositoryError>;

	/// Replaces the stored record whose id matches `payment.id`.
	async fn update_payment(
		&self,
		payment: Payment,
	) -> Result<Payment, RepositoryError>;

	/// Removes the record with the given id and returns it.
	async fn delete_payment(
		&self,
		id: &str,
	) -> Result<Payment, RepositoryError>;

	async fn get_payment(&self, id: &str) -> Result<Payment, RepositoryError>;

	async fn get_payments(
		&self,
		filter: Option<&PaymentFilter>,
	) -> Result<Vec<Payment>, RepositoryError>;
}

#[async_trait]
impl<R: PaymentRepository + ?Sized> PaymentRepository for Arc<R> {
	async fn add_payment(
		&self,
		payment: Payment,
	) -> Result<Payment, RepositoryError> {
		(**self).add_payment(payment).await
	}

	async fn update_payment(
		&self,
		payment: Payment,
	) -> Result<Payment, RepositoryError> {
		(**self).update_payment(payment).await
	}

	async fn delete_payment(
		&self,
		id: &str,
	) -> Result<Payment, RepositoryError> {
		(**self).delete_payment(id).await
	}

	async fn get_payment(&self, id: &str) -> Result<Payment, RepositoryError> {
		(**self).get_payment(id).await
	}

	async fn get_payments(
		&self,
		filter: Option<&PaymentFilter>,
	) -> Result<Vec<Payment>, RepositoryError> {
		(**self).get_payments(filter).await
	}
}
