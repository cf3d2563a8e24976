//! Resource operations, one method per provisioning call.
//!
//! Each operation builds its endpoint path and form body, then delegates to
//! the client's `fetch`/`execute` pipeline. Split by resource the way the
//! server splits its routes: `/cloud/users...` and `/cloud/groups...`.

mod groups;
mod users;
