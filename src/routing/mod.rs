pub mod catchers;
pub mod categories;
pub mod questions;
pub mod quizzes;
pub mod methods;

pub use {
    categories::*,
    questions::*,
    quizzes::*
};
