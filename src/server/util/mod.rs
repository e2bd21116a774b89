//! Pure helpers shared by the service layer.

pub mod distance;
pub mod lock;
pub mod qgc;
