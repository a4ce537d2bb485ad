// handlers/public/mod.rs - Handlers reachable without a bearer token
//
// Only token acquisition lives here. The swagger UI is also public but is
// served by utoipa-swagger-ui directly (see docs.rs).

pub mod login; // POST /api/v1/login

pub use login::login;
