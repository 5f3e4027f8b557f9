use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, Script};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::payment::{PAYMENT_ELEMENT_TYPE, Payment};
use crate::domain::repository::{PaymentFilter, PaymentRepository};

pub const DEFAULT_PAYMENTS_COLLECTION: &str = "payments";

// Both scripts run server side, so the existence check and the mutation are
// a single atomic step.
const REPLACE_EXISTING_LUA: &str = r#"
	if redis.call("HEXISTS", KEYS[1], ARGV[1]) == 1 then
		redis.call("HSET", KEYS[1], ARGV[1], ARGV[2])
		return redis.call("HGET", KEYS[1], ARGV[1])
	end
	return false
"#;

const TAKE_LUA: &str = r#"
	local document = redis.call("HGET", KEYS[1], ARGV[1])
	if document then
		redis.call("HDEL", KEYS[1], ARGV[1])
	end
	return document
"#;

/// Stores every payment as a JSON document inside one Redis hash (the
/// collection), keyed by payment id.
///
/// The connection is opened on first use and shared by every clone.
#[derive(Clone)]
pub struct RedisPaymentRepository {
	client:         Client,
	connection:     Arc<OnceCell<ConnectionManager>>,
	collection:     String,
	replace_script: Script,
	take_script:    Script,
}

impl RedisPaymentRepository {
	pub fn new(client: Client, collection: impl Into<String>) -> Self {
		Self {
			client,
			connection: Arc::new(OnceCell::new()),
			collection: collection.into(),
			replace_script: Script::new(REPLACE_EXISTING_LUA),
			take_script: Script::new(TAKE_LUA),
		}
	}

	pub fn collection(&self) -> &str {
		&self.collection
	}

	/// Drops the whole collection.
	pub async fn clear(&self) -> Result<(), RepositoryError> {
		let mut con = self.connection("clearing").await?;
		let _: () = con
			.del(&self.collection)
			.await
			.map_err(|e| unexpected("clearing", e))?;
		Ok(())
	}

	async fn connection(
		&self,
		action: &'static str,
	) -> Result<ConnectionManager, RepositoryError> {
		let manager = self
			.connection
			.get_or_try_init(|| {
				let config =
					ConnectionManagerConfig::new().set_number_of_retries(1);
				self.client.get_connection_manager_with_config(config)
			})
			.await
			.map_err(|e| unexpected(action, e))?;
		Ok(manager.clone())
	}
}

fn unexpected(
	action: &'static str,
	cause: impl std::fmt::Display,
) -> RepositoryError {
	RepositoryError::unexpected(action, PAYMENT_ELEMENT_TYPE, cause)
}

fn encode(
	action: &'static str,
	payment: &Payment,
) -> Result<String, RepositoryError> {
	serde_json::to_string(payment).map_err(|e| unexpected(action, e))
}

fn decode(
	action: &'static str,
	document: &str,
) -> Result<Payment, RepositoryError> {
	serde_json::from_str(document).map_err(|e| unexpected(action, e))
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn add_payment(
		&self,
		mut payment: Payment,
	) -> Result<Payment, RepositoryError> {
		payment.id = Uuid::new_v4().to_string();
		let document = encode("adding", &payment)?;

		let mut con = self.connection("adding").await?;
		let inserted: bool = con
			.hset_nx(&self.collection, &payment.id, document)
			.await
			.map_err(|e| unexpected("adding", e))?;

		if !inserted {
			return Err(RepositoryError::already_exists(
				PAYMENT_ELEMENT_TYPE,
				payment.id,
			));
		}

		debug!("Stored payment {} in {}", payment.id, self.collection);
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

		let document = encode("updating", &payment)?;
		let mut con = self.connection("updating").await?;
		let replaced: Option<String> = self
			.replace_script
			.key(&self.collection)
			.arg(&payment.id)
			.arg(document)
			.invoke_async(&mut con)
			.await
			.map_err(|e| unexpected("updating", e))?;

		match replaced {
			Some(document) => {
				debug!(
					"Replaced payment {} in {}",
					payment.id, self.collection
				);
				decode("updating", &document)
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
		let mut con = self.connection("deleting").await?;
		let removed: Option<String> = self
			.take_script
			.key(&self.collection)
			.arg(id)
			.invoke_async(&mut con)
			.await
			.map_err(|e| unexpected("deleting", e))?;

		match removed {
			Some(document) => decode("deleting", &document),
			None => Err(RepositoryError::not_found(PAYMENT_ELEMENT_TYPE, id)),
		}
	}

	async fn get_payment(&self, id: &str) -> Result<Payment, RepositoryError> {
		let mut con = self.connection("getting").await?;
		let document: Option<String> = con
			.hget(&self.collection, id)
			.await
			.map_err(|e| unexpected("getting", e))?;

		match document {
			Some(document) => decode("getting", &document),
			None => Err(RepositoryError::not_found(PAYMENT_ELEMENT_TYPE, id)),
		}
	}

	async fn get_payments(
		&self,
		_filter: Option<&PaymentFilter>,
	) -> Result<Vec<Payment>, RepositoryError> {
		let mut con = self.connection("listing").await?;
		let documents: Vec<String> = con
			.hvals(&self.collection)
			.await
			.map_err(|e| unexpected("listing", e))?;

		documents
			.iter()
			.map(|document| decode("listing", document))
			.collect()
	}
}
