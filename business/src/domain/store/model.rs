use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::StoreError;
use crate::domain::shared::value_objects::{GeoPoint, UserId};

/// Radius used for candidate selection when the caller does not provide one.
pub const DEFAULT_RADIUS_METERS: i64 = 5000;

#[derive(Debug, Clone)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub location: GeoPoint,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The subset of a store shown next to a price.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSummary {
    pub id: Uuid,
    pub name: String,
    pub location: GeoPoint,
}

/// A store returned by a radius query together with its distance to the center.
#[derive(Debug, Clone)]
pub struct NearbyStore {
    pub store: Store,
    pub distance_meters: f64,
}

pub struct NewStoreProps {
    pub name: String,
    pub location: GeoPoint,
    pub owner: UserId,
}

/// Partial update applied by the store owner.
#[derive(Debug, Clone, Default)]
pub struct StorePatch {
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
}

impl Store {
    pub fn new(props: NewStoreProps) -> Result<Self, StoreError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(StoreError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: props.location,
            owner: props.owner,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        location: GeoPoint,
        owner: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            location,
            owner,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy with the patch applied. Absent fields are left untouched.
    pub fn patched(&self, patch: StorePatch) -> Result<Self, StoreError> {
        let name = match patch.name {
            Some(name) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(StoreError::NameEmpty);
                }
                trimmed.to_string()
            }
            None => self.name.clone(),
        };

        Ok(Self {
            id: self.id,
            name,
            location: patch.location.unwrap_or(self.location),
            owner: self.owner.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    pub fn summary(&self) -> StoreSummary {
        StoreSummary {
            id: self.id,
            name: self.name.clone(),
            location: self.location,
        }
    }
}
