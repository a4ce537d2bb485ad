// handlers/protected/users/mod.rs - User CRUD handlers
//
// One statement per handler against the users table. Path ids that do not
// parse as integers are rejected with 400 before the store is touched.

pub mod create; // POST   /api/v1/users
pub mod delete; // DELETE /api/v1/users/:id
pub mod list;   // GET    /api/v1/users
pub mod show;   // GET    /api/v1/users/:id
pub mod update; // PUT    /api/v1/users/:id

pub use create::user_create;
pub use delete::{user_delete, DeleteResponse};
pub use list::user_list;
pub use show::user_show;
pub use update::user_update;
