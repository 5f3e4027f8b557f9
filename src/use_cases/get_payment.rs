use crate::domain::errors::RepositoryError;
use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;

#[derive(Clone)]
pub struct GetPaymentUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> GetPaymentUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(&self, id: &str) -> Result<Payment, RepositoryError> {
		self.payment_repo.get_payment(id).await
	}
}
