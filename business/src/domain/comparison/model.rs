use crate::domain::product::value_objects::Barcode;
use crate::domain::shared::value_objects::Money;
use crate::domain::store::model::StoreSummary;
use crate::domain::store_price::value_objects::Currency;

use super::pricing::PriceLabel;

#[derive(Debug, Clone)]
pub struct ProductSummary {
    pub name: String,
    pub barcode: Barcode,
}

/// A listing as shown to the shopper.
#[derive(Debug, Clone)]
pub struct PriceView {
    /// Effective price: the discount when present, else the list price.
    pub price: Money,
    pub list_price: Money,
    pub discounted_price: Option<Money>,
    pub currency: Currency,
    pub label: PriceLabel,
    pub store: StoreSummary,
}

#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub product: ProductSummary,
    pub average_price: Option<Money>,
    pub current_store: Option<PriceView>,
    pub nearby_stores: Vec<PriceView>,
    /// No priced data nearby. A normal outcome, not an error.
    pub manual_price_entry_required: bool,
}
