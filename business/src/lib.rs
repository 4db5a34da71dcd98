pub mod application {
    pub mod comparison {
        pub mod compare;
    }
    pub mod product {
        pub mod resolve_by_barcode;
        pub mod resolve_or_create;
    }
    pub mod store {
        pub mod create;
        pub mod find_nearby;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod store_price {
        pub mod add_listing;
        pub mod apply_discount;
        pub mod batch_ingest;
        pub mod list_current;
        pub mod supersede;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod comparison {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod use_cases {
            pub mod compare;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod resolve_by_barcode;
            pub mod resolve_or_create;
        }
    }
    pub mod shared {
        pub mod identity;
        pub mod value_objects;
    }
    pub mod store {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod find_nearby;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod store_price {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_listing;
            pub mod apply_discount;
            pub mod batch_ingest;
            pub mod list_current;
            pub mod supersede;
        }
    }
}
