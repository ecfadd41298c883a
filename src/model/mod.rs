mod recipe;
mod step;

pub use recipe::{Difficulty, Recipe};
pub use step::{Step, StepError};
