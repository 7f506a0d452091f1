//! View layer for the Shelf storefront.
//!
//! This crate provides:
//! - `Document` / `MemoryDocument` - View surface keyed by stable container ids
//! - `render` - Pure markup renderers for the product grid and cart surfaces
//! - `Notifier` - Transient banner with a cancellable dismissal timer
//! - `Viewport` - Desktop sidebar vs. mobile overlay visibility policy
//! - `Storefront` - Event-driven controller tying the cart store to the views
//! - `StorefrontConfig` - TOML/JSON configuration

mod config;
mod document;
mod error;
mod image;
mod markup;
mod notification;
pub mod render;
mod shell;
mod storefront;
mod timer;
mod viewport;

pub use config::*;
pub use document::*;
pub use error::*;
pub use image::*;
pub use notification::*;
pub use shell::*;
pub use storefront::*;
pub use timer::*;
pub use viewport::*;

// Re-export the domain crate for convenience
pub use shelf_commerce;
