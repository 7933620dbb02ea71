use crate::error::GridResult;
use crate::render::{PlacementFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates every frame and keeps the last one around so tests can
/// inspect what would have been applied.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<PlacementFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PlacementFrame) -> GridResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
