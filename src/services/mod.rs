pub mod formatting;
pub mod providers;
pub mod recommendation;
pub mod translation;
