mod types;

pub use types::{Result, VoicegridError};
