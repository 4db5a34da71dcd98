use super::value_objects::UserId;

/// Role claimed by the bearer token.
#[derive(Debug, Clone, PartialEq)]
pub enum UserRole {
    Admin,
    StoreOwner,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::StoreOwner => write!(f, "storeOwner"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            // Older tokens spell the store role as "storeUser" / "store_user".
            "storeOwner" | "storeUser" | "store_user" => Ok(UserRole::StoreOwner),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// Approval state of the account, owned by the access-control service.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountStatus {
    Pending,
    Unlocked,
    Locked,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Pending => write!(f, "pending"),
            AccountStatus::Unlocked => write!(f, "unlocked"),
            AccountStatus::Locked => write!(f, "locked"),
        }
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AccountStatus::Pending),
            "unlocked" => Ok(AccountStatus::Unlocked),
            "locked" => Ok(AccountStatus::Locked),
            _ => Err(format!("Invalid account status: {}", s)),
        }
    }
}

/// Identity attached to a request by the access-control collaborator.
///
/// The core trusts it as given and performs no credential checks.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
    pub status: AccountStatus,
}

impl AuthenticatedUser {
    /// Only unlocked store owners may touch their store or its listings.
    pub fn can_manage_store(&self) -> bool {
        self.role == UserRole::StoreOwner && self.status == AccountStatus::Unlocked
    }
}
