pub mod error;
pub mod security;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod comparison {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod store {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod store_price {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
