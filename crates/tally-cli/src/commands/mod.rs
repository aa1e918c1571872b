//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `setup` - Shared utilities (config resolution, policy override)
//! - `files` - Data directory listing
//! - `reports` - Report rendering (text and JSON)
//! - `export` - Normalized CSV export

pub mod export;
pub mod files;
pub mod reports;
pub mod setup;

// Re-export command functions for main.rs
pub use export::*;
pub use files::*;
pub use reports::*;
pub use setup::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
