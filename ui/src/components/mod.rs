pub mod auth_gates;
pub mod safe_area;

pub use auth_gates::{SignedIn, SignedOut};
pub use safe_area::SafeArea;
