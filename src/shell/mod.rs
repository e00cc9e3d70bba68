// Composition root for the accounts service.
//
// - Read config from the environment.
// - Build the router and GraphQL schema around an injected account store.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
