//! Canonical server implementation for the file relay envelope, plus the
//! `readfile` command line tool. Both surfaces share the same [`reader`]
//! logic, so the CLI and the HTTP handler cannot drift apart.

pub mod reader;
pub mod routes;
