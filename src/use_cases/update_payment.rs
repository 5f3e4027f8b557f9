use crate::domain::errors::RepositoryError;
use crate::domain::payment::{PAYMENT_ELEMENT_TYPE, Payment};
use crate::domain::repository::PaymentRepository;

/// Applies a partial payment document on top of the stored record.
#[derive(Clone)]
pub struct UpdatePaymentUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> UpdatePaymentUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		id: &str,
		partial: Payment,
	) -> Result<Payment, RepositoryError> {
		let existing = self.load(id).await?;
		self.apply(id, existing, partial).await
	}

	/// Fetches the record a later [`apply`](Self::apply) merges into.
	pub async fn load(&self, id: &str) -> Result<Payment, RepositoryError> {
		self.payment_repo.get_payment(id).await
	}

	pub async fn apply(
		&self,
		id: &str,
		existing: Payment,
		partial: Payment,
	) -> Result<Payment, RepositoryError> {
		let mut merged = partial.merged_over(existing).map_err(|e| {
			RepositoryError::unexpected("merging", PAYMENT_ELEMENT_TYPE, e)
		})?;
		merged.id = id.to_string();

		self.payment_repo.update_payment(merged).await
	}
}
