//! Reverse camera popup

use core::cell::Cell;

use crate::gear::{GearChange, GearObserver};
use headunit_protocol::GearState;

/// Camera view controlled by the gear
pub trait CameraView {
    /// Create and show the view
    fn show(&self);
    /// Close and release the view
    fn close(&self);
}

/// Shows the camera in Reverse and closes it in every other gear
///
/// Only the "view is open" flag is tracked, so repeated notifications for
/// the same gear never show or close twice.
pub struct ReverseCamera<V: CameraView> {
    view: V,
    open: Cell<bool>,
}

impl<V: CameraView> ReverseCamera<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            open: Cell::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: CameraView> GearObserver for ReverseCamera<V> {
    fn on_gear_changed(&self, change: GearChange) {
        let want_open = change.gear == GearState::Reverse;
        if want_open == self.open.get() {
            return;
        }
        if want_open {
            self.view.show();
        } else {
            self.view.close();
        }
        self.open.set(want_open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::GearSource;

    #[derive(Default)]
    struct CountingView {
        shows: Cell<u32>,
        closes: Cell<u32>,
    }

    impl CameraView for CountingView {
        fn show(&self) {
            self.shows.set(self.shows.get() + 1);
        }

        fn close(&self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    fn notify(camera: &ReverseCamera<CountingView>, gear: GearState) {
        camera.on_gear_changed(GearChange {
            gear,
            source: GearSource::Touch,
        });
    }

    #[test]
    fn test_reverse_twice_shows_once() {
        let camera = ReverseCamera::new(CountingView::default());
        notify(&camera, GearState::Reverse);
        notify(&camera, GearState::Reverse);
        assert_eq!(camera.view().shows.get(), 1);
        assert!(camera.is_open());
    }

    #[test]
    fn test_park_twice_closes_once() {
        let camera = ReverseCamera::new(CountingView::default());
        notify(&camera, GearState::Reverse);
        notify(&camera, GearState::Park);
        notify(&camera, GearState::Park);
        assert_eq!(camera.view().closes.get(), 1);
        assert!(!camera.is_open());
    }

    #[test]
    fn test_never_opened_never_closes() {
        let camera = ReverseCamera::new(CountingView::default());
        notify(&camera, GearState::Park);
        notify(&camera, GearState::Drive);
        notify(&camera, GearState::Neutral);
        assert_eq!(camera.view().shows.get(), 0);
        assert_eq!(camera.view().closes.get(), 0);
    }

    #[test]
    fn test_source_does_not_matter() {
        let camera = ReverseCamera::new(CountingView::default());
        camera.on_gear_changed(GearChange {
            gear: GearState::Reverse,
            source: GearSource::Throttle,
        });
        assert!(camera.is_open());
    }
}
