use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::GeoPoint;
use business::domain::store::model::StoreSummary;
use business::domain::store_price::model::{PricedListing, StorePrice};
use business::domain::store_price::value_objects::{Currency, PriceSource};

use crate::money::from_decimal;

#[derive(Debug, FromRow)]
pub struct StorePriceEntity {
    pub id: Uuid,
    pub store_id: Uuid,
    pub product_id: Uuid,
    pub price: BigDecimal,
    pub currency: String,
    pub discounted_price: Option<BigDecimal>,
    pub is_current: bool,
    pub source: String,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StorePriceEntity {
    pub fn into_domain(self) -> Result<StorePrice, RepositoryError> {
        let discounted_price = self
            .discounted_price
            .as_ref()
            .map(from_decimal)
            .transpose()?;
        let location = match (self.lon, self.lat) {
            (Some(lon), Some(lat)) => Some(GeoPoint::from_repository(lon, lat)),
            _ => None,
        };

        Ok(StorePrice::from_repository(
            self.id,
            self.store_id,
            self.product_id,
            from_decimal(&self.price)?,
            Currency::from_repository(self.currency.trim().to_string()),
            discounted_price,
            self.is_current,
            self.source
                .parse::<PriceSource>()
                .unwrap_or(PriceSource::StoreBatch),
            location,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// A listing row joined with the columns of its store.
#[derive(Debug, FromRow)]
pub struct PricedListingEntity {
    #[sqlx(flatten)]
    pub listing: StorePriceEntity,
    pub store_name: String,
    pub store_lon: f64,
    pub store_lat: f64,
}

impl PricedListingEntity {
    pub fn into_domain(self) -> Result<PricedListing, RepositoryError> {
        let store = StoreSummary {
            id: self.listing.store_id,
            name: self.store_name,
            location: GeoPoint::from_repository(self.store_lon, self.store_lat),
        };
        Ok(PricedListing {
            listing: self.listing.into_domain()?,
            store,
        })
    }
}
