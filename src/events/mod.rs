pub mod nav;
pub mod scroll;

pub use nav::wire_smooth_scroll;
pub use scroll::wire_scroll;
