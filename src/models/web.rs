mod body;
mod lenient;
mod misc;

pub use {
    body::*,
    misc::*
};
