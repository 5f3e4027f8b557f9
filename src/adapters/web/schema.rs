use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

pub type Links = HashMap<String, String>;

fn self_link(url: impl Into<String>) -> Links {
	Links::from([("self".to_string(), url.into())])
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentResponse {
	pub data:  Payment,
	pub links: Links,
}

impl PaymentResponse {
	pub fn new(data: Payment, url: impl Into<String>) -> Self {
		Self {
			data,
			links: self_link(url),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentListResponse {
	pub data:  Vec<Payment>,
	pub links: Links,
}

impl PaymentListResponse {
	pub fn new(data: Vec<Payment>, url: impl Into<String>) -> Self {
		Self {
			data,
			links: self_link(url),
		}
	}
}
