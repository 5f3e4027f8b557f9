use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const PAYMENT_ELEMENT_TYPE: &str = "Payment";

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
	*value == T::default()
}

// An explicit null decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A payment record. Everything except `id` is opaque payload that the
/// repositories store and return verbatim.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Payment {
	#[serde(
		rename = "type",
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub kind:            String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub id:              String,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub version:         i64,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub organisation_id: String,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub attributes:      PaymentAttributes,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentAttributes {
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub amount:                  String,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub beneficiary_party:       PaymentParty,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub charges_information:     ChargesInformation,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub currency:                String,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub debtor_party:            PaymentParty,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub end_to_end_reference:    String,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub fx:                      ExchangeInformation,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub numeric_reference:       String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub payment_id:              String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub payment_purpose:         String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub payment_scheme:          String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub payment_type:            String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub processing_date:         String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub reference:               String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub scheme_payment_sub_type: String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub scheme_payment_type:     String,
	#[serde(
		skip_serializing_if = "is_default",
		deserialize_with = "null_as_default"
	)]
	pub sponsor_party:           PaymentParty,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentParty {
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub account_name:        String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub account_number:      String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub account_number_code: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_type:        Option<i32>,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub address:             String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub bank_id:             String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub bank_id_code:        String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub name:                String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ChargesInformation {
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub bearer_code:               String,
	#[serde(
		skip_serializing_if = "Vec::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub sender_charges:            Vec<Amount>,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub receiver_charges_amount:   String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub receiver_charges_currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Amount {
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub amount:   String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExchangeInformation {
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub contract_reference: String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub exchange_rate:      String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub original_amount:    String,
	#[serde(
		skip_serializing_if = "String::is_empty",
		deserialize_with = "null_as_default"
	)]
	pub original_currency:  String,
}

impl Payment {
	/// Overlays the fields set in `self` onto `base`.
	///
	/// Empty strings, zero version, empty lists and unset nested objects in
	/// `self` keep the value from `base`. Nested objects are merged field by
	/// field, lists are replaced whole.
	pub fn merged_over(self, base: Payment) -> serde_json::Result<Payment> {
		let mut merged = serde_json::to_value(base)?;
		merge_values(&mut merged, serde_json::to_value(self)?);
		serde_json::from_value(merged)
	}
}

fn merge_values(target: &mut Value, patch: Value) {
	match (target, patch) {
		(Value::Object(target), Value::Object(patch)) => {
			for (key, value) in patch {
				match target.get_mut(&key) {
					Some(existing) => merge_values(existing, value),
					None => {
						target.insert(key, value);
					}
				}
			}
		}
		(target, patch) => *target = patch,
	}
}
