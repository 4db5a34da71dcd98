use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::comparison::model::{ComparisonResult, PriceView, ProductSummary};
use business::domain::comparison::pricing::{PriceIndicator, PriceTier};

use crate::api::product::dto::BarcodeResponse;
use crate::api::store::dto::StoreSummaryResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PriceTierDto {
    #[oai(rename = "cheap")]
    Cheap,
    #[oai(rename = "moderate")]
    Moderate,
    #[oai(rename = "expensive")]
    Expensive,
}

impl From<PriceTier> for PriceTierDto {
    fn from(tier: PriceTier) -> Self {
        match tier {
            PriceTier::Cheap => PriceTierDto::Cheap,
            PriceTier::Moderate => PriceTierDto::Moderate,
            PriceTier::Expensive => PriceTierDto::Expensive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PriceIndicatorDto {
    #[oai(rename = "green")]
    Green,
    #[oai(rename = "yellow")]
    Yellow,
    #[oai(rename = "red")]
    Red,
}

impl From<PriceIndicator> for PriceIndicatorDto {
    fn from(indicator: PriceIndicator) -> Self {
        match indicator {
            PriceIndicator::Green => PriceIndicatorDto::Green,
            PriceIndicator::Yellow => PriceIndicatorDto::Yellow,
            PriceIndicator::Red => PriceIndicatorDto::Red,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceViewResponse {
    /// Effective price: the discounted price when present
    pub price: f64,
    pub list_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub discounted_price: Option<f64>,
    pub currency: String,
    pub label: PriceTierDto,
    pub indicator: PriceIndicatorDto,
    pub store: StoreSummaryResponse,
}

impl From<PriceView> for PriceViewResponse {
    fn from(view: PriceView) -> Self {
        Self {
            price: view.price.to_major(),
            list_price: view.list_price.to_major(),
            discounted_price: view.discounted_price.map(|d| d.to_major()),
            currency: view.currency.to_string(),
            label: view.label.tier.into(),
            indicator: view.label.indicator.into(),
            store: view.store.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub name: String,
    pub barcode: BarcodeResponse,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(product: ProductSummary) -> Self {
        Self {
            name: product.name,
            barcode: product.barcode.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub product: ProductSummaryResponse,
    pub average_price: Option<f64>,
    pub current_store: Option<PriceViewResponse>,
    pub nearby_stores: Vec<PriceViewResponse>,
    /// No store nearby has a price; the client should ask for one
    pub manual_price_entry_required: bool,
}

impl From<ComparisonResult> for ComparisonResponse {
    fn from(result: ComparisonResult) -> Self {
        Self {
            product: result.product.into(),
            average_price: result.average_price.map(|a| a.to_major()),
            current_store: result.current_store.map(|c| c.into()),
            nearby_stores: result.nearby_stores.into_iter().map(|n| n.into()).collect(),
            manual_price_entry_required: result.manual_price_entry_required,
        }
    }
}
