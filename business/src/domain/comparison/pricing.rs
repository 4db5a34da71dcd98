//! Relative price classification and the shopper-facing comparison view.
//!
//! Everything here is pure: no I/O, no clock, no randomness. Prices are banded
//! against the arithmetic mean of effective prices using two fixed cutoffs:
//!
//! - `effective <= 80%` of the average: `cheap`
//! - `effective >= 120%` of the average: `expensive`
//! - anything in between: `moderate`
//!
//! Both cutoffs are inclusive and evaluated on integer minor units by
//! cross-multiplication, so the classification never depends on float rounding.

use uuid::Uuid;

use super::model::{ComparisonResult, PriceView, ProductSummary};
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Money;
use crate::domain::store_price::model::PricedListing;

pub const CHEAP_CUTOFF_PERCENT: i128 = 80;
pub const EXPENSIVE_CUTOFF_PERCENT: i128 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceTier {
    Cheap,
    Moderate,
    Expensive,
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTier::Cheap => write!(f, "cheap"),
            PriceTier::Moderate => write!(f, "moderate"),
            PriceTier::Expensive => write!(f, "expensive"),
        }
    }
}

/// Traffic-light hint rendered next to the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceIndicator {
    Green,
    Yellow,
    Red,
}

impl std::fmt::Display for PriceIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceIndicator::Green => write!(f, "green"),
            PriceIndicator::Yellow => write!(f, "yellow"),
            PriceIndicator::Red => write!(f, "red"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLabel {
    pub tier: PriceTier,
    pub indicator: PriceIndicator,
}

impl From<PriceTier> for PriceLabel {
    fn from(tier: PriceTier) -> Self {
        let indicator = match tier {
            PriceTier::Cheap => PriceIndicator::Green,
            PriceTier::Moderate => PriceIndicator::Yellow,
            PriceTier::Expensive => PriceIndicator::Red,
        };
        Self { tier, indicator }
    }
}

/// Exact mean kept as `total / count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceAverage {
    total: i128,
    count: i128,
}

impl PriceAverage {
    pub fn of(prices: impl IntoIterator<Item = Money>) -> Self {
        prices.into_iter().fold(
            Self { total: 0, count: 0 },
            |acc, price| Self {
                total: acc.total + price.minor_units() as i128,
                count: acc.count + 1,
            },
        )
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The mean rounded half away from zero to a whole minor unit. An empty set
    /// averages to zero.
    pub fn as_money(&self) -> Money {
        if self.count == 0 {
            return Money::ZERO;
        }
        let quotient = self.total / self.count;
        let remainder = self.total % self.count;
        let rounded = if 2 * remainder.abs() >= self.count {
            quotient + self.total.signum()
        } else {
            quotient
        };
        Money::from_minor(rounded as i64)
    }
}

/// Classifies `effective` against `average`.
pub fn label(effective: Money, average: &PriceAverage) -> PriceLabel {
    // An empty average behaves as an average of exactly zero.
    let count = average.count.max(1);
    let scaled = effective.minor_units() as i128 * count * 100;

    let tier = if scaled <= average.total * CHEAP_CUTOFF_PERCENT {
        PriceTier::Cheap
    } else if scaled >= average.total * EXPENSIVE_CUTOFF_PERCENT {
        PriceTier::Expensive
    } else {
        PriceTier::Moderate
    };

    tier.into()
}

fn format_entry(entry: &PricedListing, average: &PriceAverage) -> PriceView {
    let effective = entry.listing.effective_price();
    PriceView {
        price: effective,
        list_price: entry.listing.price,
        discounted_price: entry.listing.discounted_price,
        currency: entry.listing.currency.clone(),
        label: label(effective, average),
        store: entry.store.clone(),
    }
}

fn summarize(product: &Product) -> ProductSummary {
    ProductSummary {
        name: product.name.clone(),
        barcode: product.barcode.clone(),
    }
}

/// Result returned when no store nearby has a current price for the product.
pub fn manual_entry_required(product: &Product) -> ComparisonResult {
    ComparisonResult {
        product: summarize(product),
        average_price: None,
        current_store: None,
        nearby_stores: Vec::new(),
        manual_price_entry_required: true,
    }
}

/// Labels every listing and splits them into the reference store's entry and
/// everybody else. The input order (cheapest list price first) is preserved.
pub fn build_comparison(
    product: &Product,
    listings: &[PricedListing],
    reference_store_id: Uuid,
) -> ComparisonResult {
    if listings.is_empty() {
        return manual_entry_required(product);
    }

    let average = PriceAverage::of(listings.iter().map(|e| e.listing.effective_price()));

    let current_store = listings
        .iter()
        .find(|e| e.store.id == reference_store_id)
        .map(|e| format_entry(e, &average));

    let nearby_stores = listings
        .iter()
        .filter(|e| e.store.id != reference_store_id)
        .map(|e| format_entry(e, &average))
        .collect();

    ComparisonResult {
        product: summarize(product),
        average_price: Some(average.as_money()),
        current_store,
        nearby_stores,
        manual_price_entry_required: false,
    }
}
