use payment_demo::domain::payment::Payment;

pub const TEST_PAYMENT: &str = include_str!("../resources/test_payment.json");

/// The reference payment, including its client-side id.
pub fn default_payment() -> Payment {
	serde_json::from_str(TEST_PAYMENT).expect("Invalid test payment fixture")
}
