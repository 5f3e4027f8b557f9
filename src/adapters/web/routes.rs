use actix_web::web;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::payments_handler::{
	add_payment, delete_payment, get_payment, get_payment_list, update_payment,
};
use crate::domain::repository::SharedPaymentRepository;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::delete_payment::DeletePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::list_payments::ListPaymentsUseCase;
use crate::use_cases::update_payment::UpdatePaymentUseCase;

pub const API_BASE_PATH: &str = "/v1";

fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		ApiError::BadClientData {
			message: format!("Invalid payload: {err}"),
		}
		.into()
	})
}

/// Registers the payment routes and the use cases they depend on.
pub fn configure(
	cfg: &mut web::ServiceConfig,
	repository: SharedPaymentRepository,
) {
	cfg.app_data(json_config())
		.app_data(web::Data::new(CreatePaymentUseCase::new(repository.clone())))
		.app_data(web::Data::new(ListPaymentsUseCase::new(repository.clone())))
		.app_data(web::Data::new(GetPaymentUseCase::new(repository.clone())))
		.app_data(web::Data::new(UpdatePaymentUseCase::new(repository.clone())))
		.app_data(web::Data::new(DeletePaymentUseCase::new(repository)))
		.service(
			web::scope(API_BASE_PATH)
				.service(add_payment)
				.service(get_payment_list)
				.service(get_payment)
				.service(update_payment)
				.service(delete_payment),
		);
}
