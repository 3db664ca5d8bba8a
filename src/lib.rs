//! Voicegate - capability negotiation and configuration for voice capture
//!
//! This crate decides which audio-capture capabilities, encoding formats and
//! service parameters a hosting environment may use for voice-to-text
//! capture, and manages persistence and validation of the resulting
//! configuration.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, the vendor compatibility matrix, format and
//!   bitrate negotiation rules, and domain errors
//! - **Application**: The capability probe and configuration store, plus the
//!   port interfaces (traits) they are built on
//! - **Infrastructure**: Adapter implementations (key-value backends,
//!   environment snapshots, the legacy endpoint adapter, the remote status
//!   probe)

pub mod application;
pub mod domain;
pub mod infrastructure;
