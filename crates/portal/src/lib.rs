//! Navigation and access core of the TARCZA portal.
//!
//! UI-free: the crate decides which modules an identity may reach and how a
//! requested path composes into a view. The Dioxus app consumes these
//! decisions; it never re-implements them.

pub mod composer;
pub mod directory;
pub mod policy;
pub mod registry;
pub mod session;
pub mod signin;

pub use composer::{resolve, PortalView, RouteDecision};
pub use registry::{ModuleDescriptor, ModuleId};
pub use session::Session;
pub use signin::{SignInFlow, SignInProgress};
