//! Platform-independent effect logic.
//!
//! Nothing here touches `web-sys`; the browser glue in the crate root feeds
//! these state machines through the traits in [`port`].

pub mod constants;
pub mod counter;
pub mod fade;
pub mod nav;
pub mod port;
pub mod ripple;
pub mod scroll;
pub mod typewriter;
pub mod visibility;

pub use port::{DelayScheduler, FrameScheduler, PresentationPort};
pub use scroll::{ScrollConfig, ScrollCoordinator, ScrollSnapshot, ScrollTargets};
pub use visibility::{TriggerStrategy, VisibilityTrigger};
