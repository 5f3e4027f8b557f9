use crate::domain::errors::RepositoryError;
use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;

#[derive(Clone)]
pub struct CreatePaymentUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> CreatePaymentUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		payment: Payment,
	) -> Result<Payment, RepositoryError> {
		self.payment_repo.add_payment(payment).await
	}
}
