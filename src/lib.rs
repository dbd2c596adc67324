pub mod assistant;
pub mod chat;
pub mod config;
pub mod logging;
pub mod profile;

// Re-export commonly used types for convenience.
pub use assistant::{PlaceholderAssistant, RemoteAssistant};
pub use chat::{ChatSession, ChatView, QueryRouter};
pub use config::AppConfig;
pub use profile::{ProfileDocument, ProfileLoader, ProfileSource, ProfileStore};
