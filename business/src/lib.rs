pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod get_cart;
        pub mod list_stock;
        pub mod remove_product;
        pub mod session;
        pub mod update_amount;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_cart;
            pub mod list_stock;
            pub mod remove_product;
            pub mod update_amount;
        }
    }
}
