use serde::Deserialize;

use crate::infrastructure::persistence::redis_payment_repository::DEFAULT_PAYMENTS_COLLECTION;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
	Memory,
	Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub storage:             StorageBackend,
	pub redis_url:           String,
	pub payments_collection: String,
	pub server_host:         String,
	pub server_port:         u16,
	pub server_keepalive:    u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_with_prefix("APP")
	}

	pub fn load_with_prefix(prefix: &str) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("storage", "memory")?
			.set_default("redis_url", "redis://127.0.0.1/")?
			.set_default("payments_collection", DEFAULT_PAYMENTS_COLLECTION)?
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 8080)?
			.set_default("server_keepalive", 75)?
			.add_source(config::Environment::with_prefix(prefix))
			.build()?;

		config_builder.try_deserialize()
	}
}
