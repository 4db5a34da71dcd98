use poem_openapi::Object;

use business::domain::shared::value_objects::GeoPoint;
use business::domain::store::model::{NearbyStore, Store, StoreSummary};

/// GeoJSON point, `coordinates` is `[lon, lat]`
#[derive(Debug, Clone, Object)]
pub struct LocationDto {
    #[oai(rename = "type", default = "point_type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

fn point_type() -> String {
    "Point".to_string()
}

impl From<GeoPoint> for LocationDto {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: point_type(),
            coordinates: point.coordinates().to_vec(),
        }
    }
}

impl LocationDto {
    /// `None` unless this is a Point with in-range `[lon, lat]`.
    pub fn to_domain(&self) -> Option<GeoPoint> {
        if self.kind != "Point" {
            return None;
        }
        match self.coordinates.as_slice() {
            [lon, lat] => GeoPoint::new(*lon, *lat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    pub name: String,
    pub location: LocationDto,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<LocationDto>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: String,
    pub name: String,
    pub location: LocationDto,
    pub owner: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id.to_string(),
            name: store.name,
            location: store.location.into(),
            owner: store.owner.as_str().to_string(),
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct NearbyStoreResponse {
    pub id: String,
    pub name: String,
    pub location: LocationDto,
    /// Earth-surface distance to the query point in meters
    pub distance_meters: f64,
}

impl From<NearbyStore> for NearbyStoreResponse {
    fn from(nearby: NearbyStore) -> Self {
        Self {
            id: nearby.store.id.to_string(),
            name: nearby.store.name,
            location: nearby.store.location.into(),
            distance_meters: nearby.distance_meters,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StoreSummaryResponse {
    pub id: String,
    pub name: String,
    pub location: LocationDto,
}

impl From<StoreSummary> for StoreSummaryResponse {
    fn from(store: StoreSummary) -> Self {
        Self {
            id: store.id.to_string(),
            name: store.name,
            location: store.location.into(),
        }
    }
}
