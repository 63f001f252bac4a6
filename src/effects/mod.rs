pub mod back_to_top;
pub mod reveal;
pub mod ripple;
pub mod scroll_reveal;

pub use reveal::{init_counters, init_fade_in, init_typewriter};
