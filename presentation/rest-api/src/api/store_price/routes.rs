use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::Money;
use business::domain::store_price::use_cases::apply_discount::{
    ApplyDiscountParams, ApplyDiscountUseCase,
};
use business::domain::store_price::use_cases::batch_ingest::{
    BatchIngestParams, BatchIngestUseCase,
};
use business::domain::store_price::use_cases::supersede::{
    SupersedeListingParams, SupersedeListingUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::StoreOwnerBearer;
use crate::api::store_price::dto::{
    BatchIngestRequest, BatchIngestResponse, DiscountRequest, IngestResultResponse,
    ListingResponse, SupersedeRequest,
};
use crate::api::tags::ApiTags;

pub struct StorePriceApi {
    batch_ingest_use_case: Arc<dyn BatchIngestUseCase>,
    apply_discount_use_case: Arc<dyn ApplyDiscountUseCase>,
    supersede_use_case: Arc<dyn SupersedeListingUseCase>,
}

impl StorePriceApi {
    pub fn new(
        batch_ingest_use_case: Arc<dyn BatchIngestUseCase>,
        apply_discount_use_case: Arc<dyn ApplyDiscountUseCase>,
        supersede_use_case: Arc<dyn SupersedeListingUseCase>,
    ) -> Self {
        Self {
            batch_ingest_use_case,
            apply_discount_use_case,
            supersede_use_case,
        }
    }
}

fn validation_error(message: &str) -> Json<ErrorResponse> {
    ErrorResponse::new("ValidationError", message)
}

/// Store price ledger API
///
/// Endpoints a store owner uses to publish and maintain the prices of its store.
#[OpenApi]
impl StorePriceApi {
    /// Ingest a batch of prices
    ///
    /// Each item resolves or creates its product and becomes a new current
    /// listing. Items succeed or fail independently and nothing is rolled back.
    #[oai(path = "/store/products", method = "post", tag = "ApiTags::StorePrices")]
    async fn batch_ingest(
        &self,
        auth: StoreOwnerBearer,
        body: Json<BatchIngestRequest>,
    ) -> BatchIngestApiResponse {
        let owner = match auth.0.store_owner() {
            Ok(user) => user,
            Err(err) => return BatchIngestApiResponse::Forbidden(err.into_error_response().1),
        };

        // Malformed wire items are answered here; the rest keep their request index.
        let mut results = Vec::new();
        let mut accepted = Vec::new();
        let mut positions = Vec::new();
        for (index, item) in body.0.items.into_iter().enumerate() {
            match item.into_domain() {
                Ok(item) => {
                    positions.push(index);
                    accepted.push(item);
                }
                Err(message) => results.push(IngestResultResponse::invalid(index, message)),
            }
        }

        let outcomes = match self
            .batch_ingest_use_case
            .execute(BatchIngestParams {
                owner: owner.user_id,
                items: accepted,
            })
            .await
        {
            Ok(outcomes) => outcomes,
            Err(err) => {
                let (status, json) = err.into_error_response();
                if status.as_u16() == 404 {
                    return BatchIngestApiResponse::NotFound(json);
                }
                // The store lookup failed: no accepted item could be processed.
                results.extend(
                    positions
                        .iter()
                        .map(|&index| IngestResultResponse::failed(index, &json.0.message)),
                );
                Vec::new()
            }
        };

        for mut outcome in outcomes {
            if let Some(&index) = positions.get(outcome.index) {
                outcome.index = index;
            }
            results.push(outcome.into());
        }

        let response = BatchIngestResponse::new(results);
        match response.status_code() {
            201 => BatchIngestApiResponse::Created(Json(response)),
            409 => BatchIngestApiResponse::Conflict(Json(response)),
            500 => BatchIngestApiResponse::Failed(Json(response)),
            _ => BatchIngestApiResponse::BadRequest(Json(response)),
        }
    }

    /// Discount a listing
    ///
    /// Sets the discounted price of one of the caller's current listings.
    #[oai(
        path = "/store/products/:listing_id/discount",
        method = "put",
        tag = "ApiTags::StorePrices"
    )]
    async fn apply_discount(
        &self,
        auth: StoreOwnerBearer,
        listing_id: Path<String>,
        body: Json<DiscountRequest>,
    ) -> ListingApiResponse {
        let owner = match auth.0.store_owner() {
            Ok(user) => user,
            Err(err) => return ListingApiResponse::Forbidden(err.into_error_response().1),
        };
        let Ok(listing_id) = Uuid::parse_str(&listing_id.0) else {
            return ListingApiResponse::BadRequest(validation_error("store_price.invalid_id"));
        };
        let Some(discounted_price) = Money::from_major(body.0.discounted_price) else {
            return ListingApiResponse::BadRequest(validation_error(
                "store_price.invalid_discount",
            ));
        };

        let result = self
            .apply_discount_use_case
            .execute(ApplyDiscountParams {
                listing_id,
                owner: owner.user_id,
                discounted_price,
            })
            .await;

        ListingApiResponse::from_result(result)
    }

    /// Replace a listing's price
    ///
    /// Retires the current listing and records a new current one, atomically.
    /// The old listing is kept as history.
    #[oai(
        path = "/store/products/:listing_id/price",
        method = "put",
        tag = "ApiTags::StorePrices"
    )]
    async fn supersede(
        &self,
        auth: StoreOwnerBearer,
        listing_id: Path<String>,
        body: Json<SupersedeRequest>,
    ) -> ListingApiResponse {
        let owner = match auth.0.store_owner() {
            Ok(user) => user,
            Err(err) => return ListingApiResponse::Forbidden(err.into_error_response().1),
        };
        let Ok(listing_id) = Uuid::parse_str(&listing_id.0) else {
            return ListingApiResponse::BadRequest(validation_error("store_price.invalid_id"));
        };
        let Some(price) = Money::from_major(body.0.price) else {
            return ListingApiResponse::BadRequest(validation_error("store_price.invalid_price"));
        };

        let result = self
            .supersede_use_case
            .execute(SupersedeListingParams {
                listing_id,
                owner: owner.user_id,
                price,
                currency: body.0.currency,
            })
            .await;

        ListingApiResponse::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum BatchIngestApiResponse {
    /// At least one item was created
    #[oai(status = 201)]
    Created(Json<BatchIngestResponse>),
    /// Nothing created, every item was invalid
    #[oai(status = 400)]
    BadRequest(Json<BatchIngestResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    /// The caller owns no store
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// Nothing created, at least one item already had a current listing
    #[oai(status = 409)]
    Conflict(Json<BatchIngestResponse>),
    /// Nothing created, storage failed for at least one item
    #[oai(status = 500)]
    Failed(Json<BatchIngestResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListingApiResponse {
    #[oai(status = 200)]
    Ok(Json<ListingResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    /// The listing is no longer current or lost a concurrent update
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ListingApiResponse {
    fn from_result<E: IntoErrorResponse>(
        result: Result<business::domain::store_price::model::StorePrice, E>,
    ) -> Self {
        match result {
            Ok(listing) => ListingApiResponse::Ok(Json(listing.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListingApiResponse::BadRequest(json),
                    404 => ListingApiResponse::NotFound(json),
                    409 => ListingApiResponse::Conflict(json),
                    _ => ListingApiResponse::InternalError(json),
                }
            }
        }
    }
}
