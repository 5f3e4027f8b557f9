use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::payment::{PAYMENT_ELEMENT_TYPE, Payment};
use crate::domain::repository::{PaymentFilter, PaymentRepository};

/// Map-backed repository. A single lock guards the whole map.
#[derive(Default)]
pub struct InMemoryPaymentRepository {
	payments: Mutex<HashMap<String, Payment>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	fn payments(
		&self,
		action: &'static str,
	) -> Result<MutexGuard<'_, HashMap<String, Payment>>, RepositoryError> {
		self.payments.lock().map_err(|e| {
			RepositoryError::unexpected(action, PAYMENT_ELEMENT_TYPE, e)
		})
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn add_payment(
		&self,
		mut payment: Payment,
	) -> Result<Payment, RepositoryError> {
		payment.id = Uuid::new_v4().to_string();
		debug!("Adding payment {}", payment.id);
		self.payments("adding")?
			.insert(payment.id.clone(), payment.clone());
		Ok(payment)
	}

	async fn update_payment(
		&self,
		payment: Payment,
	) -> Result<Payment, RepositoryError> {
		if payment.id.is_empty() {
			return Err(RepositoryError::validation(
				PAYMENT_ELEMENT_TYPE,
				"payment with empty identifier passed",
			));
		}

		let mut payments = self.payments("updating")?;
		match payments.get_mut(&payment.id) {
			Some(stored) => {
				debug!("Replacing payment {}", payment.id);
				*stored = payment.clone();
				Ok(payment)
			}
			None => Err(RepositoryError::not_found(
				PAYMENT_ELEMENT_TYPE,
				payment.id,
			)),
		}
	}

	async fn delete_payment(
		&self,
		id: &str,
	) -> Result<Payment, RepositoryError> {
		self.payments("deleting")?
			.remove(id)
			.ok_or_else(|| RepositoryError::not_found(PAYMENT_ELEMENT_TYPE, id))
	}

	async fn get_payment(&self, id: &str) -> Result<Payment, RepositoryError> {
		self.payments("getting")?
			.get(id)
			.cloned()
			.ok_or_else(|| RepositoryError::not_found(PAYMENT_ELEMENT_TYPE, id))
	}

	async fn get_payments(
		&self,
		_filter: Option<&PaymentFilter>,
	) -> Result<Vec<Payment>, RepositoryError> {
		Ok(self.payments("listing")?.values().cloned().collect())
	}
}
