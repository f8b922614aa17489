//! The post-generation pipeline: prompt construction, the two-tier
//! provider call, numbered-list parsing, and the deterministic fallback
//! used when every backend is down.

mod client;
mod fallback;
mod parser;
mod prompt;
mod provider;

pub use client::{GenerationClient, GenerationError};
pub use fallback::fallback_posts;
pub use parser::parse_posts;
pub use prompt::build_prompt;
pub use provider::{GenerationParams, ProviderError, TextProvider};

#[cfg(test)]
pub(crate) use client::stubs;
