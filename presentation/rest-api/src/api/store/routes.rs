use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::shared::value_objects::GeoPoint;
use business::domain::store::errors::StoreError;
use business::domain::store::model::StorePatch;
use business::domain::store::use_cases::create::{CreateStoreParams, CreateStoreUseCase};
use business::domain::store::use_cases::find_nearby::{
    FindNearbyStoresParams, FindNearbyStoresUseCase,
};
use business::domain::store::use_cases::update::{UpdateStoreParams, UpdateStoreUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::StoreOwnerBearer;
use crate::api::store::dto::{
    CreateStoreRequest, NearbyStoreResponse, StoreResponse, UpdateStoreRequest,
};
use crate::api::tags::ApiTags;

pub struct StoreApi {
    create_use_case: Arc<dyn CreateStoreUseCase>,
    update_use_case: Arc<dyn UpdateStoreUseCase>,
    find_nearby_use_case: Arc<dyn FindNearbyStoresUseCase>,
}

impl StoreApi {
    pub fn new(
        create_use_case: Arc<dyn CreateStoreUseCase>,
        update_use_case: Arc<dyn UpdateStoreUseCase>,
        find_nearby_use_case: Arc<dyn FindNearbyStoresUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            update_use_case,
            find_nearby_use_case,
        }
    }
}

fn invalid_location() -> Json<ErrorResponse> {
    StoreError::InvalidLocation.into_error_response().1
}

/// Store directory API
#[OpenApi]
impl StoreApi {
    /// Create the caller's store
    ///
    /// A store owner has exactly one store; a second attempt is a conflict.
    #[oai(path = "/store", method = "post", tag = "ApiTags::Stores")]
    async fn create_store(
        &self,
        auth: StoreOwnerBearer,
        body: Json<CreateStoreRequest>,
    ) -> CreateStoreResponse {
        let owner = match auth.0.store_owner() {
            Ok(user) => user,
            Err(err) => return CreateStoreResponse::Forbidden(err.into_error_response().1),
        };
        let Some(location) = body.0.location.to_domain() else {
            return CreateStoreResponse::BadRequest(invalid_location());
        };

        let params = CreateStoreParams {
            owner: owner.user_id,
            name: body.0.name,
            location,
        };

        match self.create_use_case.execute(params).await {
            Ok(store) => CreateStoreResponse::Created(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateStoreResponse::BadRequest(json),
                    409 => CreateStoreResponse::Conflict(json),
                    _ => CreateStoreResponse::InternalError(json),
                }
            }
        }
    }

    /// Update the caller's store
    ///
    /// The store is found through the token's owner; name and location are
    /// both optional.
    #[oai(path = "/store", method = "put", tag = "ApiTags::Stores")]
    async fn update_store(
        &self,
        auth: StoreOwnerBearer,
        body: Json<UpdateStoreRequest>,
    ) -> UpdateStoreResponse {
        let owner = match auth.0.store_owner() {
            Ok(user) => user,
            Err(err) => return UpdateStoreResponse::Forbidden(err.into_error_response().1),
        };
        let location = match body.0.location.as_ref().map(|l| l.to_domain()) {
            Some(None) => return UpdateStoreResponse::BadRequest(invalid_location()),
            Some(point) => point,
            None => None,
        };

        let params = UpdateStoreParams {
            owner: owner.user_id,
            patch: StorePatch {
                name: body.0.name,
                location,
            },
        };

        match self.update_use_case.execute(params).await {
            Ok(store) => UpdateStoreResponse::Ok(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateStoreResponse::BadRequest(json),
                    404 => UpdateStoreResponse::NotFound(json),
                    _ => UpdateStoreResponse::InternalError(json),
                }
            }
        }
    }

    /// Stores near a point
    ///
    /// Public. Nearest first, within `maxDistance` meters (default 5000).
    #[oai(path = "/stores/nearby", method = "get", tag = "ApiTags::Stores")]
    async fn find_nearby(
        &self,
        lon: Query<f64>,
        lat: Query<f64>,
        /// Search radius in meters
        #[oai(name = "maxDistance")]
        max_distance: Query<Option<i64>>,
    ) -> FindNearbyResponse {
        let Some(center) = GeoPoint::new(lon.0, lat.0) else {
            return FindNearbyResponse::BadRequest(invalid_location());
        };

        match self
            .find_nearby_use_case
            .execute(FindNearbyStoresParams {
                center,
                radius_meters: max_distance.0,
            })
            .await
        {
            Ok(stores) => FindNearbyResponse::Ok(Json(
                stores.into_iter().map(NearbyStoreResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FindNearbyResponse::BadRequest(json),
                    _ => FindNearbyResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateStoreResponse {
    #[oai(status = 201)]
    Created(Json<StoreResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateStoreResponse {
    #[oai(status = 200)]
    Ok(Json<StoreResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindNearbyResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<NearbyStoreResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
