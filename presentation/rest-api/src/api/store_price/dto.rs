use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::Money;
use business::domain::store_price::model::StorePrice;
use business::domain::store_price::use_cases::batch_ingest::{
    IngestItem, IngestOutcome, IngestStatus,
};
use business::domain::store_price::value_objects::PriceSource;

use crate::api::store::dto::LocationDto;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PriceSourceDto {
    #[oai(rename = "store_batch")]
    StoreBatch,
    #[oai(rename = "shopper")]
    Shopper,
}

impl From<PriceSource> for PriceSourceDto {
    fn from(source: PriceSource) -> Self {
        match source {
            PriceSource::StoreBatch => PriceSourceDto::StoreBatch,
            PriceSource::Shopper => PriceSourceDto::Shopper,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: String,
    pub store_id: String,
    pub product_id: String,
    pub price: f64,
    pub currency: String,
    #[oai(skip_serializing_if_is_none)]
    pub discounted_price: Option<f64>,
    pub is_current: bool,
    pub source: PriceSourceDto,
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<LocationDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StorePrice> for ListingResponse {
    fn from(listing: StorePrice) -> Self {
        Self {
            id: listing.id.to_string(),
            store_id: listing.store_id.to_string(),
            product_id: listing.product_id.to_string(),
            price: listing.price.to_major(),
            currency: listing.currency.to_string(),
            discounted_price: listing.discounted_price.map(|d| d.to_major()),
            is_current: listing.is_current,
            source: listing.source.into(),
            location: listing.location.map(|l| l.into()),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct IngestItemRequest {
    pub name: String,
    /// One of UPC, EAN, GTIN-8, GTIN-12, GTIN-13, GTIN-14
    pub barcode_type: String,
    pub gtin: String,
    /// Decimal amount, e.g. 4.85
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub currency: Option<String>,
    /// Defaults to the store location
    #[oai(skip_serializing_if_is_none)]
    pub location: Option<LocationDto>,
}

impl IngestItemRequest {
    /// Converts the wire item, or returns the code of the first malformed field.
    pub fn into_domain(self) -> Result<IngestItem, &'static str> {
        let price = Money::from_major(self.price).ok_or("store_price.invalid_price")?;
        let location = match self.location {
            Some(dto) => Some(dto.to_domain().ok_or("store_price.invalid_location")?),
            None => None,
        };

        Ok(IngestItem {
            name: self.name,
            barcode_type: self.barcode_type,
            gtin: self.gtin,
            price,
            currency: self.currency,
            location,
        })
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BatchIngestRequest {
    pub items: Vec<IngestItemRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum IngestStatusDto {
    #[oai(rename = "created")]
    Created,
    #[oai(rename = "conflict")]
    Conflict,
    #[oai(rename = "invalid")]
    Invalid,
    #[oai(rename = "failed")]
    Failed,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct IngestResultResponse {
    /// Position of the item in the request
    pub index: u64,
    pub status: IngestStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub listing: Option<ListingResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl IngestResultResponse {
    pub fn invalid(index: usize, message: &str) -> Self {
        Self {
            index: index as u64,
            status: IngestStatusDto::Invalid,
            listing: None,
            message: Some(message.to_string()),
        }
    }

    pub fn failed(index: usize, message: &str) -> Self {
        Self {
            index: index as u64,
            status: IngestStatusDto::Failed,
            listing: None,
            message: Some(message.to_string()),
        }
    }
}

impl From<IngestOutcome> for IngestResultResponse {
    fn from(outcome: IngestOutcome) -> Self {
        let index = outcome.index as u64;
        match outcome.status {
            IngestStatus::Created(listing) => Self {
                index,
                status: IngestStatusDto::Created,
                listing: Some(listing.into()),
                message: None,
            },
            IngestStatus::Conflict => Self {
                index,
                status: IngestStatusDto::Conflict,
                listing: None,
                message: Some("store_price.conflict".to_string()),
            },
            IngestStatus::Invalid(message) => Self {
                index,
                status: IngestStatusDto::Invalid,
                listing: None,
                message: Some(message),
            },
            IngestStatus::Failed(message) => Self {
                index,
                status: IngestStatusDto::Failed,
                listing: None,
                message: Some(message),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BatchIngestResponse {
    pub created: u64,
    pub results: Vec<IngestResultResponse>,
}

impl BatchIngestResponse {
    pub fn new(mut results: Vec<IngestResultResponse>) -> Self {
        results.sort_by_key(|r| r.index);
        let created = results
            .iter()
            .filter(|r| r.status == IngestStatusDto::Created)
            .count() as u64;
        Self { created, results }
    }

    fn any(&self, status: IngestStatusDto) -> bool {
        self.results.iter().any(|r| r.status == status)
    }

    /// 201 if anything was created, else 409 on any conflict, else 500 on any
    /// storage failure, else 400.
    pub fn status_code(&self) -> u16 {
        if self.created > 0 {
            201
        } else if self.any(IngestStatusDto::Conflict) {
            409
        } else if self.any(IngestStatusDto::Failed) {
            500
        } else {
            400
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct DiscountRequest {
    /// Decimal amount, greater than zero and at most the list price
    pub discounted_price: f64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SupersedeRequest {
    /// New list price as a decimal amount
    pub price: f64,
    /// Defaults to the currency of the replaced listing
    #[oai(skip_serializing_if_is_none)]
    pub currency: Option<String>,
}
