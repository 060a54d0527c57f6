use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that knows how to draw itself.
///
/// Props are plain struct fields set by the parent before each frame.
/// `render` takes `&mut self` so a component can refresh caches (wrapped
/// rows, scroll offsets) while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The high-level event this component reports to its parent.
    type Event;

    /// Handle a low-level `TuiEvent`, optionally reporting something upward.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
