use laser_shots_core::Shot;

/// Receiver of finalized detections, e.g. the canvas that draws markers.
pub trait ShotSink {
    fn report_shot(&mut self, shot: Shot);
}

impl ShotSink for Vec<Shot> {
    fn report_shot(&mut self, shot: Shot) {
        self.push(shot);
    }
}

/// Adapts a closure into a [`ShotSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(Shot)> ShotSink for FnSink<F> {
    fn report_shot(&mut self, shot: Shot) {
        (self.0)(shot)
    }
}
