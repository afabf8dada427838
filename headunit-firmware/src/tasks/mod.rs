//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod gear;
pub mod link;
pub mod panel_rx;
pub mod panel_tx;
pub mod tick;
pub mod touch;
pub mod vehicle_rx;
pub mod vehicle_tx;

pub use button::{button_task, BUTTON_COUNT};
pub use gear::gear_task;
pub use link::link_task;
pub use panel_rx::panel_rx_task;
pub use panel_tx::panel_tx_task;
pub use touch::touch_task;
pub use vehicle_rx::vehicle_rx_task;
pub use vehicle_tx::vehicle_tx_task;
