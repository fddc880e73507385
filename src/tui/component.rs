use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components hold their own presentation state (cursor, viewport, labels)
/// and draw themselves into the `Rect` the parent hands them.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can settle viewport state
/// (e.g. scroll offsets) against the real area during the render pass.
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
