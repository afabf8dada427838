//! Gear task
//!
//! Owns the one `GearStateManager` and every consumer. Intents from all
//! sources arrive on a single channel and are applied strictly in receive
//! order, so "last write wins" means the last intent this task dequeued.

use defmt::*;

use headunit_core::consumers::{
    CameraView, GearPublisher, GlowOutput, GlowTint, PublishHook, ReverseCamera, Rgb, StatusLine,
};
use headunit_core::{GearChange, GearIntentSink, GearObserver, GearStateManager};
use headunit_protocol::HeadUnitMessage;

use crate::channels::{INTENT_CHANNEL, PANEL_CHANNEL, PUBLISH_CHANNEL};

/// Queue a message for the panel without blocking
fn to_panel(msg: HeadUnitMessage) {
    if PANEL_CHANNEL.try_send(msg).is_err() {
        warn!("Panel channel full, dropping {:?}", msg);
    }
}

/// Reverse camera view hosted on the panel
struct PanelCamera;

impl CameraView for PanelCamera {
    fn show(&self) {
        info!("Reverse camera on");
        to_panel(HeadUnitMessage::Camera { visible: true });
    }

    fn close(&self) {
        info!("Reverse camera off");
        to_panel(HeadUnitMessage::Camera { visible: false });
    }
}

/// Ambient glow strip driven by the panel
///
/// The strip has no alpha channel, so the colour is scaled before sending.
struct PanelGlow;

impl GlowOutput for PanelGlow {
    fn set_glow(&self, color: Rgb, alpha: u8) {
        let scale = |c: u8| (c as u16 * alpha as u16 / 255) as u8;
        to_panel(HeadUnitMessage::Glow {
            r: scale(color.r),
            g: scale(color.g),
            b: scale(color.b),
        });
    }
}

/// Instrument cluster publisher
struct ClusterPublisher;

impl GearPublisher for ClusterPublisher {
    fn publish_gear(&self, ordinal: u8) {
        if PUBLISH_CHANNEL.try_send(ordinal).is_err() {
            warn!("Publish channel full, dropping gear {}", ordinal);
        }
    }
}

/// Gear letter and source tag on the panel
struct PanelIndicator;

impl GearObserver for PanelIndicator {
    fn on_gear_changed(&self, change: GearChange) {
        to_panel(HeadUnitMessage::GearIndicator {
            gear: change.gear,
            source_tag: change.source.to_byte(),
        });
    }
}

/// Gear task - the single writer of gear state
#[embassy_executor::task]
pub async fn gear_task(glow_brightness: u8) {
    info!("Gear task started");

    let camera = ReverseCamera::new(PanelCamera);
    let publish = PublishHook::new(ClusterPublisher);
    let status = StatusLine::new();
    let glow = GlowTint::with_brightness(PanelGlow, glow_brightness);
    let indicator = PanelIndicator;

    let mut manager = GearStateManager::new();
    let observers: [&dyn GearObserver; 5] = [&camera, &publish, &status, &glow, &indicator];
    for observer in observers {
        if let Err(e) = manager.subscribe(observer) {
            error!("Failed to subscribe gear observer: {:?}", e);
        }
    }

    // Start-up state goes to the panel without a cluster publish
    indicator.on_gear_changed(GearChange {
        gear: manager.gear(),
        source: manager.last_source(),
    });
    glow.set_brightness(glow_brightness);

    loop {
        let intent = INTENT_CHANNEL.receive().await;
        manager.notify_gear_intent(intent);

        debug!(
            "{=str} {=str} (published {})",
            status.gear_text().as_str(),
            status.source_text().as_str(),
            publish.published()
        );
    }
}
