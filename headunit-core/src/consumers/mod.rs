//! Gear change consumers
//!
//! Each consumer is a [`GearObserver`](crate::gear::GearObserver) that
//! derives everything from the notification it receives. None of them keeps
//! a second copy of the gear beyond what it needs to stay idempotent.

mod camera;
mod glow;
mod publish;
mod status;

pub use camera::{CameraView, ReverseCamera};
pub use glow::{accent_color, GlowOutput, GlowTint, Rgb, DEFAULT_BRIGHTNESS, GLOW_MAX_ALPHA};
pub use publish::{GearPublisher, PublishHook};
pub use status::{StatusLine, GEAR_TEXT_LEN};
