/// Transient touch coordinates for one drag interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchTracker {
    start_y: f32,
    last_y: f32,
    active: bool,
}

impl TouchTracker {
    pub fn begin(&mut self, y: f32) {
        self.start_y = y;
        self.last_y = y;
        self.active = true;
    }

    /// Records a new touch point and returns the movement since the previous one.
    ///
    /// Returns `None` when no touch is in progress.
    pub fn move_to(&mut self, y: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let delta = y - self.last_y;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    /// Total movement since `begin` (positive = downwards).
    pub fn travel(&self) -> f32 {
        self.last_y - self.start_y
    }
}
