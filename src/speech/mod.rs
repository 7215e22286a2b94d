pub mod formatter;
pub mod prompts;

pub use formatter::SpeechFormatter;
