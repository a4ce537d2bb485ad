// handlers/protected/mod.rs - Handlers behind the JWT middleware
//
// Every route registered from this module is wrapped by
// middleware::jwt_auth_middleware, which rejects requests without a valid
// bearer token and injects an AuthUser extension for the handler.

pub mod health; // GET /api/v1/health
pub mod users;  // /api/v1/users[/:id]

pub use health::health;
pub use users::*;
