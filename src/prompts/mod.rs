//! Prompt rendering for the three completion calls the server makes.
//!
//! All prompts are Spanish instruction strings. The generation and
//! modification prompts end with a fixed format instruction so the response
//! can be split on `$` by [`crate::parse::parse_recipe`].

mod generate;
mod modify;
mod similar;

pub use generate::render_generate_prompt;
pub use modify::render_modify_prompt;
pub use similar::render_similar_prompt;
