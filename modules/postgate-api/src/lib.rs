pub mod graphql;
pub mod server;

pub use graphql::{build_schema, ApiSchema};
pub use server::{Gateway, GatewayHandle};
