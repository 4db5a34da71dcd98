use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::StorePriceError;
use super::value_objects::{Currency, PriceSource};
use crate::domain::shared::value_objects::{GeoPoint, Money};
use crate::domain::store::model::StoreSummary;

/// One listing event in the ledger. At most one listing per (store, product)
/// is current at any time.
#[derive(Debug, Clone)]
pub struct StorePrice {
    pub id: Uuid,
    pub store_id: Uuid,
    pub product_id: Uuid,
    pub price: Money,
    pub currency: Currency,
    pub discounted_price: Option<Money>,
    pub is_current: bool,
    pub source: PriceSource,
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewStorePriceProps {
    pub store_id: Uuid,
    pub product_id: Uuid,
    pub price: Money,
    pub currency: Option<String>,
    pub location: Option<GeoPoint>,
    pub source: PriceSource,
}

/// A current listing joined with the store that offers it.
#[derive(Debug, Clone)]
pub struct PricedListing {
    pub listing: StorePrice,
    pub store: StoreSummary,
}

fn parse_currency(code: Option<String>) -> Result<Currency, StorePriceError> {
    match code {
        Some(code) => Currency::parse(&code).ok_or(StorePriceError::InvalidCurrency),
        None => Ok(Currency::default()),
    }
}

impl StorePrice {
    /// Builds a new current listing.
    pub fn new(props: NewStorePriceProps) -> Result<Self, StorePriceError> {
        if !props.price.is_valid_price() {
            return Err(StorePriceError::InvalidPrice);
        }
        let currency = parse_currency(props.currency)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            store_id: props.store_id,
            product_id: props.product_id,
            price: props.price,
            currency,
            discounted_price: None,
            is_current: true,
            source: props.source,
            location: props.location,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        store_id: Uuid,
        product_id: Uuid,
        price: Money,
        currency: Currency,
        discounted_price: Option<Money>,
        is_current: bool,
        source: PriceSource,
        location: Option<GeoPoint>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            store_id,
            product_id,
            price,
            currency,
            discounted_price,
            is_current,
            source,
            location,
            created_at,
            updated_at,
        }
    }

    /// The discounted price if present, else the list price.
    pub fn effective_price(&self) -> Money {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Returns a copy carrying `discounted_price`. The discount must be positive
    /// and may not exceed the list price.
    pub fn with_discount(&self, discounted_price: Money) -> Result<Self, StorePriceError> {
        if !discounted_price.is_valid_price() || discounted_price > self.price {
            return Err(StorePriceError::InvalidDiscount);
        }

        Ok(Self {
            discounted_price: Some(discounted_price),
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Builds the listing that replaces this one for the same (store, product).
    /// The replacement starts without a discount and keeps the listing location
    /// and source.
    pub fn superseded_by(
        &self,
        price: Money,
        currency: Option<String>,
    ) -> Result<Self, StorePriceError> {
        if !self.is_current {
            return Err(StorePriceError::NotCurrent);
        }

        Self::new(NewStorePriceProps {
            store_id: self.store_id,
            product_id: self.product_id,
            price,
            currency: currency.or_else(|| Some(self.currency.as_str().to_string())),
            location: self.location,
            source: self.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(price: i64) -> StorePrice {
        StorePrice::new(NewStorePriceProps {
            store_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price: Money::from_minor(price),
            currency: None,
            location: None,
            source: PriceSource::StoreBatch,
        })
        .unwrap()
    }

    #[test]
    fn should_create_current_listing_in_default_currency() {
        let listing = make_listing(399);

        assert!(listing.is_current);
        assert_eq!(listing.currency.as_str(), "EUR");
        assert_eq!(listing.discounted_price, None);
        assert_eq!(listing.effective_price(), Money::from_minor(399));
    }

    #[test]
    fn should_reject_non_positive_price() {
        let result = StorePrice::new(NewStorePriceProps {
            store_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price: Money::ZERO,
            currency: None,
            location: None,
            source: PriceSource::StoreBatch,
        });

        assert!(matches!(result, Err(StorePriceError::InvalidPrice)));
    }

    #[test]
    fn should_reject_price_beyond_storable_range() {
        let result = StorePrice::new(NewStorePriceProps {
            store_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price: Money::from_minor(1_234_567_890_100),
            currency: None,
            location: None,
            source: PriceSource::StoreBatch,
        });

        assert!(matches!(result, Err(StorePriceError::InvalidPrice)));
    }

    #[test]
    fn should_accept_largest_storable_price() {
        let listing = make_listing(999_999_999_999);

        assert_eq!(listing.price, Money::MAX_STORABLE);
    }

    #[test]
    fn should_reject_invalid_currency() {
        let result = StorePrice::new(NewStorePriceProps {
            store_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price: Money::from_minor(100),
            currency: Some("EURO".to_string()),
            location: None,
            source: PriceSource::Shopper,
        });

        assert!(matches!(result, Err(StorePriceError::InvalidCurrency)));
    }

    #[test]
    fn should_use_discount_as_effective_price() {
        let listing = make_listing(485)
            .with_discount(Money::from_minor(450))
            .unwrap();

        assert_eq!(listing.price, Money::from_minor(485));
        assert_eq!(listing.effective_price(), Money::from_minor(450));
    }

    #[test]
    fn should_accept_discount_equal_to_price() {
        let listing = make_listing(485)
            .with_discount(Money::from_minor(485))
            .unwrap();

        assert_eq!(listing.discounted_price, Some(Money::from_minor(485)));
    }

    #[test]
    fn should_reject_discount_above_price() {
        let result = make_listing(485).with_discount(Money::from_minor(486));
        assert!(matches!(result, Err(StorePriceError::InvalidDiscount)));
    }

    #[test]
    fn should_reject_zero_discount() {
        let result = make_listing(485).with_discount(Money::ZERO);
        assert!(matches!(result, Err(StorePriceError::InvalidDiscount)));
    }

    #[test]
    fn should_supersede_with_same_pair_and_fresh_id() {
        let old = make_listing(399).with_discount(Money::from_minor(350)).unwrap();

        let replacement = old.superseded_by(Money::from_minor(450), None).unwrap();

        assert_ne!(replacement.id, old.id);
        assert_eq!(replacement.store_id, old.store_id);
        assert_eq!(replacement.product_id, old.product_id);
        assert_eq!(replacement.price, Money::from_minor(450));
        assert_eq!(replacement.currency, old.currency);
        assert_eq!(replacement.discounted_price, None);
        assert!(replacement.is_current);
    }

    #[test]
    fn should_keep_source_when_superseding() {
        let old = StorePrice::new(NewStorePriceProps {
            store_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            price: Money::from_minor(399),
            currency: None,
            location: None,
            source: PriceSource::Shopper,
        })
        .unwrap();

        let replacement = old.superseded_by(Money::from_minor(450), None).unwrap();

        assert_eq!(replacement.source, PriceSource::Shopper);
    }

    #[test]
    fn should_not_supersede_listing_that_is_not_current() {
        let mut old = make_listing(399);
        old.is_current = false;

        let result = old.superseded_by(Money::from_minor(450), None);

        assert!(matches!(result, Err(StorePriceError::NotCurrent)));
    }

    #[test]
    fn should_map_duplicated_write_to_conflict() {
        use crate::domain::errors::RepositoryError;

        assert!(matches!(
            StorePriceError::from_write(RepositoryError::Duplicated),
            StorePriceError::Conflict
        ));
        assert!(matches!(
            StorePriceError::from_write(RepositoryError::DatabaseError),
            StorePriceError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
