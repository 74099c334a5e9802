// Standalone components (no primitives)
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod separator;
pub mod stat_card;
pub mod tabs;
pub mod textarea;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use stat_card::*;
pub use tabs::*;
pub use textarea::*;
