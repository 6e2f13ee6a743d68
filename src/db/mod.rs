//! Persistence for the `passwords` table, split into connection lifecycle and
//! record queries.

mod connection;
mod records;

pub use connection::{close_store, ensure_schema, open_store};
pub use records::{create_credential, delete_credential, fetch_credentials, update_credential};
