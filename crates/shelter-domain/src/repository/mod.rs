//! Port Traits
//!
//! These traits define what the domain needs from the outside world,
//! but NOT how it's done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait AnimalArchive   │  FileArchive (JSON + XML)
//!   fn archive()        │  NoArchive
//! ```

pub mod archive;
