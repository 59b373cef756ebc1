use crate::core::domain::Identifiable;

pub mod model;

// sentinel values substituted when the catalog or a client omits a field
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn cover_url(&self) -> Option<&str>;
}
