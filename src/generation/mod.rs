//! Prompt → provider → normalized HTML → stored artifact.

mod normalize;
mod orchestrator;
mod prompt;
mod selector;

pub use normalize::{is_complete_document, normalize};
pub use orchestrator::{Generation, GenerationRequest, Generator};
pub use prompt::SYSTEM_INSTRUCTION;
pub use selector::Selection;
