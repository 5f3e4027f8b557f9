use payment_demo::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use testcontainers::GenericImage;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use uuid::Uuid;

pub struct RedisTestContainer {
	pub client:    redis::Client,
	pub container: testcontainers::ContainerAsync<GenericImage>,
}

impl RedisTestContainer {
	pub fn client(&self) -> &redis::Client {
		&self.client
	}

	/// A repository over a collection no other test uses.
	pub fn repository(&self) -> RedisPaymentRepository {
		RedisPaymentRepository::new(
			self.client.clone(),
			format!("payments_test_{}", Uuid::new_v4()),
		)
	}
}

pub async fn get_test_redis_client() -> RedisTestContainer {
	let container = GenericImage::new("redis", "8.0.3-alpine")
		.with_exposed_port(ContainerPort::Tcp(6379))
		.with_wait_for(WaitFor::message_on_stdout(
			"Ready to accept connections",
		))
		.start()
		.await
		.unwrap();
	let host_port = container.get_host_port_ipv4(6379).await;
	let redis_url = format!("redis://127.0.0.1:{}", host_port.unwrap());
	let client = redis::Client::open(redis_url).expect("Invalid Redis URL");
	RedisTestContainer { client, container }
}
