// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (JWT auth)
pub mod protected; // Bearer token required
pub mod public;    // Token acquisition
