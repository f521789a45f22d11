//! # notes server
//!
//! The binary is intentionally thin: everything about notes lives in the
//! `notesapp` library, and `src/server/` only adapts it to HTTP.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Server Layer (crates/notes/src/server/)                    │
//! │  - clap argument parsing + config resolution (setup.rs)     │
//! │  - axum routes, JSON in/out (routes.rs)                     │
//! │  - JSON / form / empty create bodies (draft.rs)             │
//! │  - store errors → HTTP status + {error} body (error.rs)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (crates/notesapp/src/store/)                   │
//! │  - list / create / delete over one JSON file                │
//! │  - synchronous; called from tokio's blocking pool           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/api/notes` | `200` array of notes |
//! | `POST` | `/api/notes` | `200` the created note (JSON or form body) |
//! | `DELETE` | `/api/notes/{id}` | `200` `{"message": "Note deleted"}`, even for unknown ids |
//!
//! Storage failures answer `500 {"error": ...}`; unreadable request bodies
//! answer `400 {"error": ...}`.

mod server;

fn main() {
    if let Err(e) = server::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
