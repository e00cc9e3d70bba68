pub mod shared {
    pub mod http {
        pub mod api_error;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod account;
            pub mod errors;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_accounts {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_account {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod create_account {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_account {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_account {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod account_store;
                pub mod account_store_in_memory;
            }
        }
    }
}

pub mod shell;
