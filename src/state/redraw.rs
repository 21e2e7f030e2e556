// Dirty flag standing between state mutation and the next repaint.

/// Coalesces invalidations so at most one frame is pending at a time.
#[derive(Default, Debug, Clone)]
pub struct DirtyFlag {
    dirty: bool,
}

impl DirtyFlag {
    /// Marks dirty. Returns true when the caller must request a frame, i.e.
    /// no frame was pending yet.
    pub fn invalidate(&mut self) -> bool {
        !std::mem::replace(&mut self.dirty, true)
    }

    /// Consumes the flag at frame time. Returns whether a repaint is due.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
