//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Configuration inspection (show, path)
//! - `core` - Shared utilities (config/snapshot loading, date parsing)
//! - `goals` - Goal progress from category spending
//! - `score` - Score and per-purchase impact

pub mod config;
pub mod core;
pub mod goals;
pub mod score;

// Re-export command functions for main.rs
pub use config::*;
pub use self::core::*;
pub use goals::*;
pub use score::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
