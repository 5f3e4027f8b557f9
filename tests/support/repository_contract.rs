//! Behaviour every `PaymentRepository` backend must share. Each check takes a
//! freshly built repository so no state leaks between tests.

use payment_demo::domain::errors::{ErrorKind, RepositoryError};
use payment_demo::domain::payment::Payment;
use payment_demo::domain::repository::{PaymentFilter, PaymentRepository};
use uuid::Uuid;

use crate::support::fixtures::default_payment;

fn assert_not_found(
	result: Result<impl std::fmt::Debug, RepositoryError>,
	id: &str,
) {
	match result {
		Err(RepositoryError::NotFound { id: missing, .. }) => {
			assert_eq!(missing, id)
		}
		other => panic!("Expected NotFound for {id} but got {other:?}"),
	}
}

pub async fn add_assigns_a_fresh_id<R: PaymentRepository>(repository: &R) {
	let payment = default_payment();

	let added = repository.add_payment(payment.clone()).await.unwrap();

	assert!(!added.id.is_empty());
	assert_ne!(added.id, payment.id);
	assert!(Uuid::parse_str(&added.id).is_ok());

	let mut expected = payment;
	expected.id = added.id.clone();
	assert_eq!(added, expected);
}

pub async fn add_without_client_id_assigns_an_id<R: PaymentRepository>(
	repository: &R,
) {
	let mut payment = default_payment();
	payment.id.clear();

	let added = repository.add_payment(payment).await.unwrap();

	assert!(!added.id.is_empty());
}

pub async fn added_payment_is_listed<R: PaymentRepository>(repository: &R) {
	let mut payment = Payment {
		kind: "Payment".to_string(),
		..Default::default()
	};
	payment.attributes.amount = "100.21".to_string();
	payment.attributes.currency = "GBP".to_string();

	let added = repository.add_payment(payment).await.unwrap();

	assert_eq!(added.attributes.amount, "100.21");
	assert_eq!(added.attributes.currency, "GBP");
	let all = repository.get_payments(None).await.unwrap();
	assert!(all.contains(&added));
}

pub async fn get_returns_added_payment<R: PaymentRepository>(repository: &R) {
	let added = repository.add_payment(default_payment()).await.unwrap();

	let fetched = repository.get_payment(&added.id).await.unwrap();

	assert_eq!(fetched, added);
}

pub async fn missing_ids_are_not_found<R: PaymentRepository>(repository: &R) {
	let id = Uuid::new_v4().to_string();

	assert_not_found(repository.get_payment(&id).await, &id);
	assert_not_found(repository.delete_payment(&id).await, &id);

	let mut payment = default_payment();
	payment.id = id.clone();
	assert_not_found(repository.update_payment(payment).await, &id);
}

pub async fn update_replaces_content_and_keeps_id<R: PaymentRepository>(
	repository: &R,
) {
	let mut added = repository.add_payment(default_payment()).await.unwrap();
	added.version = 2;
	added.attributes.amount = "250.00".to_string();
	added.attributes.fx = Default::default();

	let updated = repository.update_payment(added.clone()).await.unwrap();

	assert_eq!(updated, added);
	assert_eq!(repository.get_payment(&added.id).await.unwrap(), added);
}

pub async fn update_of_unknown_id_leaves_store_unchanged<R: PaymentRepository>(
	repository: &R,
) {
	let added = repository.add_payment(default_payment()).await.unwrap();
	let before = repository.get_payments(None).await.unwrap();

	let mut stranger = added.clone();
	stranger.id = Uuid::new_v4().to_string();
	stranger.attributes.amount = "999.99".to_string();
	let id = stranger.id.clone();
	assert_not_found(repository.update_payment(stranger).await, &id);

	let after = repository.get_payments(None).await.unwrap();
	assert_eq!(after.len(), before.len());
	assert_eq!(repository.get_payment(&added.id).await.unwrap(), added);
}

pub async fn update_with_empty_id_is_invalid<R: PaymentRepository>(
	repository: &R,
) {
	let mut payment = default_payment();
	payment.id.clear();

	let error = repository.update_payment(payment).await.unwrap_err();

	assert_eq!(error.kind(), ErrorKind::Validation);
}

pub async fn delete_returns_removed_payment_once<R: PaymentRepository>(
	repository: &R,
) {
	let added = repository.add_payment(default_payment()).await.unwrap();

	let deleted = repository.delete_payment(&added.id).await.unwrap();

	assert_eq!(deleted, added);
	assert_not_found(repository.get_payment(&added.id).await, &added.id);
	assert_not_found(repository.delete_payment(&added.id).await, &added.id);
}

pub async fn list_grows_by_added_count<R: PaymentRepository>(
	repository: &R,
	to_create: usize,
) {
	let initial = repository.get_payments(None).await.unwrap().len();

	for _ in 0..to_create {
		repository.add_payment(default_payment()).await.unwrap();
	}

	let all = repository.get_payments(None).await.unwrap();
	assert_eq!(all.len(), initial + to_create);
}

pub async fn list_ignores_filter<R: PaymentRepository>(repository: &R) {
	repository.add_payment(default_payment()).await.unwrap();
	repository.add_payment(default_payment()).await.unwrap();

	let filter =
		PaymentFilter::from([("currency".to_string(), "JPY".to_string())]);

	let unfiltered = repository.get_payments(None).await.unwrap();
	let filtered = repository.get_payments(Some(&filter)).await.unwrap();
	assert_eq!(filtered.len(), unfiltered.len());
}
