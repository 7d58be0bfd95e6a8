// Media operations: image description (vision model) and the simulated audio analysis.

pub mod audio;
pub mod handlers;
pub mod prompts;
