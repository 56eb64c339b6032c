pub mod chat_llm;
pub mod cloud_translate;
pub mod completion_llm;
pub mod error;
pub mod factory;
pub mod interface;
pub mod languages;
pub mod prompt;
pub mod sanitize;

pub use error::{TranslateError, TranslateResult};
pub use factory::TranslationFactory;
pub use interface::TranslationProvider;
pub use languages::AUTO_SOURCE;
