mod frame;
mod null_renderer;
mod primitives;

pub use frame::PlacementFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{NowLinePrimitive, SegmentPrimitive};

use crate::error::GridResult;

/// Contract implemented by the host's styling layer.
///
/// Backends receive fully computed placements (leading offset plus distance
/// from the far edge for segments, absolute offsets for the now indicator)
/// and map them onto whatever styling mechanism the host uses.
pub trait Renderer {
    fn render(&mut self, frame: &PlacementFrame) -> GridResult<()>;
}
