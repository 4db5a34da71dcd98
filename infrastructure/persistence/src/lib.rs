pub mod db;
pub mod errors;
pub mod money;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod store {
    pub mod entity;
    pub mod repository;
}
pub mod store_price {
    pub mod entity;
    pub mod repository;
}
