pub mod impl_fake;
pub mod impl_ollama;
pub mod impl_openai;
pub mod interface;
pub mod prompt;
