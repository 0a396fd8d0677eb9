//! This crate serves purely as the JSON envelope abstraction for a sample
//! file relay server. The canonical server implementation lives in the
//! same repository.
//!
//! The server exposes a single operation: `GET /` reads one configured
//! sample file and relays its content verbatim. Every response, success
//! or failure, is wrapped in the uniform [`envelope::ResponseEnvelope`].
//!
//! ## Usage
//! For the complete wire format, see the serde structs in [`envelope`].
//! * `GET /` returns a `200` success envelope carrying the file content,
//!   or a `500` error envelope with best-effort diagnostic text.
//!
//! ## Errors
//! The server does not distinguish failure causes on the wire: a missing
//! file, a permission error and an encoding error all collapse into one
//! error envelope. Clients get diagnostic text in `details`, nothing
//! machine-readable beyond the `status` tag.
//!
//! ## Security
//! The envelope carries raw file content and raw error text. Make sure
//! the server is only reachable from trusted hosts.

pub mod envelope;
