use crate::domain::errors::RepositoryError;
use crate::domain::payment::Payment;
use crate::domain::repository::{PaymentFilter, PaymentRepository};

#[derive(Clone)]
pub struct ListPaymentsUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> ListPaymentsUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	/// The filter is handed to the repository untouched; an empty one is
	/// passed as `None`.
	pub async fn execute(
		&self,
		filter: PaymentFilter,
	) -> Result<Vec<Payment>, RepositoryError> {
		let applied = (!filter.is_empty()).then_some(&filter);
		self.payment_repo.get_payments(applied).await
	}
}
