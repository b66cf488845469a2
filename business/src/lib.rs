pub mod application {
    pub mod product {
        pub mod delete;
        pub mod get_all;
    }
    pub mod product_list {
        pub mod view;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod product_list {
        pub mod messages;
        pub mod screen;
        pub mod state;
    }
}
