// Sub-modules organized by functional domain
pub mod api;
pub mod booking;
pub mod center;
pub mod competition;
pub mod matches;
pub mod team;

// Re-export all models so call sites can use `crate::db::models::Team` directly

// API response structures
pub use api::*;

// Booking models
pub use booking::*;

// Center and pitch models
pub use center::*;

// Competition models
pub use competition::*;

// Match models
pub use matches::*;

// Team models
pub use team::*;
