use serde::{Deserialize, Serialize};

/// Identifier of an account managed by the external access-control service.
/// Store ownership is keyed on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Monetary amount in integer minor units (cents for EUR).
///
/// Every price computation (average, banding) runs on these integers so that
/// results never depend on floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest amount a `NUMERIC(12,2)` price column holds: 9_999_999_999.99.
    pub const MAX_STORABLE: Money = Money(999_999_999_999);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Converts a decimal amount (e.g. `4.85`) to minor units, rounding half away
    /// from zero to two decimal places. Returns `None` for NaN, infinities and
    /// amounts that do not fit in an `i64`.
    pub fn from_major(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let minor = (value * 100.0).round();
        if minor < i64::MIN as f64 || minor > i64::MAX as f64 {
            return None;
        }
        Some(Self(minor as i64))
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Positive and within `MAX_STORABLE`.
    pub fn is_valid_price(&self) -> bool {
        self.is_positive() && *self <= Self::MAX_STORABLE
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// WGS84 point in GeoJSON axis order: longitude first, then latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
}

impl GeoPoint {
    /// Returns `None` when either coordinate is out of range or not finite.
    pub fn new(lon: f64, lat: f64) -> Option<Self> {
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        if lon_ok && lat_ok {
            Some(Self { lon, lat })
        } else {
            None
        }
    }

    /// Constructor for coordinates already persisted in the repository (no validation).
    pub fn from_repository(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// `[lon, lat]`, as in a GeoJSON `Point`.
    pub fn coordinates(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("owner-456");
        assert_eq!(user_id.as_str(), "owner-456");
        assert_eq!(format!("{}", user_id), "owner-456");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        let user_id_1: UserId = "same-user".into();
        let user_id_2: UserId = "same-user".to_string().into();
        let user_id_3 = UserId::new("different-user");

        assert_eq!(user_id_1, user_id_2);
        assert_ne!(user_id_1, user_id_3);
    }

    #[test]
    fn should_round_major_amount_to_nearest_minor_unit() {
        assert_eq!(Money::from_major(4.85), Some(Money::from_minor(485)));
        assert_eq!(Money::from_major(5.1), Some(Money::from_minor(510)));
        assert_eq!(Money::from_major(0.005), Some(Money::from_minor(1)));
        assert_eq!(Money::from_major(3.994), Some(Money::from_minor(399)));
    }

    #[test]
    fn should_reject_non_finite_major_amounts() {
        assert_eq!(Money::from_major(f64::NAN), None);
        assert_eq!(Money::from_major(f64::INFINITY), None);
        assert_eq!(Money::from_major(1e300), None);
    }

    #[test]
    fn should_display_money_with_two_decimals() {
        assert_eq!(Money::from_minor(450).to_string(), "4.50");
        assert_eq!(Money::from_minor(7).to_string(), "0.07");
        assert_eq!(Money::from_minor(-105).to_string(), "-1.05");
    }

    #[test]
    fn should_convert_money_to_major_units() {
        assert_eq!(Money::from_minor(510).to_major(), 5.1);
        assert!(!Money::ZERO.is_positive());
    }

    #[test]
    fn should_bound_valid_prices_to_storable_range() {
        assert!(Money::from_minor(1).is_valid_price());
        assert!(Money::MAX_STORABLE.is_valid_price());
        assert!(!Money::from_minor(999_999_999_999 + 1).is_valid_price());
        assert!(!Money::from_major(12_345_678_901.0).unwrap().is_valid_price());
        assert!(!Money::ZERO.is_valid_price());
    }

    #[test]
    fn should_accept_coordinates_in_range() {
        let point = GeoPoint::new(24.94, 60.17).unwrap();
        assert_eq!(point.coordinates(), [24.94, 60.17]);
        assert!(GeoPoint::new(-180.0, -90.0).is_some());
        assert!(GeoPoint::new(180.0, 90.0).is_some());
    }

    #[test]
    fn should_reject_coordinates_out_of_range() {
        assert!(GeoPoint::new(180.5, 0.0).is_none());
        assert!(GeoPoint::new(0.0, -91.0).is_none());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_none());
    }
}
