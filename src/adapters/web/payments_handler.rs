use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use log::{error, info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{PaymentListResponse, PaymentResponse};
use crate::domain::errors::{ErrorKind, RepositoryError};
use crate::domain::payment::Payment;
use crate::domain::repository::{PaymentFilter, SharedPaymentRepository};
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::delete_payment::DeletePaymentUseCase;
use crate::use_cases::get_payment::GetPaymentUseCase;
use crate::use_cases::list_payments::ListPaymentsUseCase;
use crate::use_cases::update_payment::UpdatePaymentUseCase;

fn failure(context: String, e: RepositoryError) -> ApiError {
	match e.kind() {
		ErrorKind::NotFound => warn!("{context}: {e}"),
		_ => error!("{context}: {e}"),
	}
	ApiError::from_repository(context, e)
}

#[post("/payments")]
pub async fn add_payment(
	req: HttpRequest,
	payload: web::Json<Payment>,
	use_case: web::Data<CreatePaymentUseCase<SharedPaymentRepository>>,
) -> Result<HttpResponse, ApiError> {
	let payment = use_case
		.execute(payload.into_inner())
		.await
		.map_err(|e| failure("Error saving payment".to_string(), e))?;

	info!("Payment {} created", payment.id);
	let url = format!(
		"{}/{}",
		req.uri().path().trim_end_matches('/'),
		payment.id
	);
	Ok(HttpResponse::Created().json(PaymentResponse::new(payment, url)))
}

#[get("/payments")]
pub async fn get_payment_list(
	req: HttpRequest,
	filter: web::Query<PaymentFilter>,
	use_case: web::Data<ListPaymentsUseCase<SharedPaymentRepository>>,
) -> Result<HttpResponse, ApiError> {
	let payments = use_case
		.execute(filter.into_inner())
		.await
		.map_err(|e| failure("Error getting payment list".to_string(), e))?;

	Ok(HttpResponse::Ok().json(PaymentListResponse::new(
		payments,
		req.uri().to_string(),
	)))
}

#[get("/payments/{payment_id}")]
pub async fn get_payment(
	req: HttpRequest,
	payment_id: web::Path<String>,
	use_case: web::Data<GetPaymentUseCase<SharedPaymentRepository>>,
) -> Result<HttpResponse, ApiError> {
	let payment_id = payment_id.into_inner();
	let payment = use_case
		.execute(&payment_id)
		.await
		.map_err(|e| {
			failure(format!("Error getting payment {payment_id}"), e)
		})?;

	Ok(HttpResponse::Ok().json(PaymentResponse::new(
		payment,
		req.uri().to_string(),
	)))
}

/// Merges the (possibly partial) body over the stored payment. The body is
/// only decoded once the payment is known to exist.
#[put("/payments/{payment_id}")]
pub async fn update_payment(
	req: HttpRequest,
	payment_id: web::Path<String>,
	body: web::Bytes,
	use_case: web::Data<UpdatePaymentUseCase<SharedPaymentRepository>>,
) -> Result<HttpResponse, ApiError> {
	let payment_id = payment_id.into_inner();
	let context = || format!("Error updating payment {payment_id}");

	let existing = use_case
		.load(&payment_id)
		.await
		.map_err(|e| failure(context(), e))?;

	let partial: Payment =
		serde_json::from_slice(&body).map_err(|e| ApiError::BadClientData {
			message: format!("{}: Invalid payload: {e}", context()),
		})?;

	let payment = use_case
		.apply(&payment_id, existing, partial)
		.await
		.map_err(|e| failure(context(), e))?;

	info!("Payment {payment_id} updated");
	Ok(HttpResponse::Ok().json(PaymentResponse::new(
		payment,
		req.uri().to_string(),
	)))
}

#[delete("/payments/{payment_id}")]
pub async fn delete_payment(
	req: HttpRequest,
	payment_id: web::Path<String>,
	use_case: web::Data<DeletePaymentUseCase<SharedPaymentRepository>>,
) -> Result<HttpResponse, ApiError> {
	let payment_id = payment_id.into_inner();
	let payment = use_case
		.execute(&payment_id)
		.await
		.map_err(|e| {
			failure(format!("Error deleting payment {payment_id}"), e)
		})?;

	info!("Payment {payment_id} deleted");
	Ok(HttpResponse::Ok().json(PaymentResponse::new(
		payment,
		req.uri().to_string(),
	)))
}
