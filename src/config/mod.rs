//! Fetch configuration
//!
//! This module holds the options parsed from the command line and the
//! clamping rules that keep them within the service caps.
//!
//! # Example
//!
//! ```
//! use followrank::config::FetchOptions;
//!
//! let options = FetchOptions::new(500, 50, true).clamped();
//! assert_eq!(options.page_size, 50); // capped at 200, then at max_followers
//! ```

mod types;
mod validation;

pub use types::FetchOptions;
pub use validation::{clamp_options, clamp_target};
