use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer};
use log::info;

use crate::adapters::web::routes::configure;
use crate::domain::repository::SharedPaymentRepository;
use crate::infrastructure::config::settings::{Config, StorageBackend};
use crate::infrastructure::persistence::in_memory_payment_repository::InMemoryPaymentRepository;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod payments_handler;
		pub mod routes;
		pub mod schema;
	}
}

pub mod domain {
	pub mod errors;
	pub mod payment;
	pub mod repository;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod persistence {
		pub mod in_memory_payment_repository;
		pub mod redis_payment_repository;
	}
}

pub mod use_cases {
	pub mod create_payment;
	pub mod delete_payment;
	pub mod get_payment;
	pub mod list_payments;
	pub mod update_payment;
}

pub fn build_repository(
	config: &Config,
) -> Result<SharedPaymentRepository, redis::RedisError> {
	match config.storage {
		StorageBackend::Memory => {
			Ok(Arc::new(InMemoryPaymentRepository::new()))
		}
		StorageBackend::Redis => {
			let client = redis::Client::open(config.redis_url.as_str())?;
			Ok(Arc::new(RedisPaymentRepository::new(
				client,
				config.payments_collection.clone(),
			)))
		}
	}
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let _ = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.try_init();

	let repository = build_repository(&config).map_err(std::io::Error::other)?;
	info!("Using {:?} payment storage", config.storage);

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);
	HttpServer::new(move || {
		let repository = repository.clone();
		App::new().configure(move |cfg| configure(cfg, repository))
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
