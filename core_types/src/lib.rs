//! # Core Types
//!
//! This crate defines the fundamental types shared by the Cozmonaut services.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Identities and ordinals are typed and cannot be confused.
//! - **No ambient globals**: Well-known identities are plain constructor functions.
//!
//! ## Key Types
//!
//! - [`ServiceId`]: Unique identifier for services
//! - [`ProcedureOrdinal`]: Selects a procedure within one service's namespace

pub mod ids;
pub mod ordinal;
pub mod service_ids;

pub use ids::ServiceId;
pub use ordinal::ProcedureOrdinal;
pub use service_ids::{
    console_service_id, face_service_id, monitor_service_id, scripting_service_id,
    speech_service_id,
};
