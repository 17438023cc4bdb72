/// Camera/UI state a rendering frontend reads alongside the body snapshot.
/// Pure data: all projection math lives in the frontend, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Magnification factor; 1.0 is the native scale.
    pub zoom: f64,
    /// Display-space panning offset.
    pub offset: [f64; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: [0.0, 0.0],
        }
    }
}

impl ViewState {
    /// Shift the view by a display-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset[0] += dx;
        self.offset[1] += dy;
    }

    /// Multiply the zoom by a positive factor: above 1.0 magnifies, below
    /// shrinks. Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor > 0.0 {
            self.zoom *= factor;
        }
    }
}
