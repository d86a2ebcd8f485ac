//! Visual Prompt Studio: a guided chat that helps build image-generation
//! prompts through a six-step wizard, or analyses a reference image in
//! reverse mode.

pub mod ai;
pub mod catalog;
pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod types;

#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod theme;
#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod views;

pub use session::{PendingTurn, Session, TurnReply};
