pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod clear;
        pub mod create;
        pub mod get_by_id;
        pub mod populate;
        pub mod remove_product;
        pub mod replace_all;
        pub mod update_quantity;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod clear;
            pub mod create;
            pub mod get_by_id;
            pub mod remove_product;
            pub mod replace_all;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod listing;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
}
