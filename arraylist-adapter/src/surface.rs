use arraylist::{ItemId, Placement, Rgb, Transition};

/// The display a [`crate::Widget`] renders into.
///
/// Implementations hold the UI objects (DOM nodes, GPU quads, terminal cells); the widget only
/// tells them what changed. Each item has an accent marker and a text label.
pub trait Surface {
    fn set_opacity(&mut self, opacity: f32);
    /// Uniform visual scale.
    fn set_scale(&mut self, scale: f32);
    fn set_font(&mut self, font: &str);
    fn set_font_size(&mut self, font_size: f32);
    /// Which edge the list is anchored to.
    fn set_placement(&mut self, placement: Placement);
    /// Pure visibility toggle; items are kept.
    fn set_visible(&mut self, visible: bool);

    /// Attaches a new item. Its final position arrives with the next [`Surface::set_order`].
    fn attach_item(&mut self, id: ItemId, text: &str, transition: Transition, thickness: f32);
    /// Removes the item and its place in the display sequence.
    fn detach_item(&mut self, id: ItemId);
    fn set_item_text(&mut self, id: ItemId, text: &str);
    fn set_item_transition(&mut self, id: ItemId, transition: Transition);
    fn set_item_accent(&mut self, id: ItemId, color: Rgb);
    fn set_item_text_color(&mut self, id: ItemId, color: Rgb);
    /// Accent marker thickness (the border width).
    fn set_item_thickness(&mut self, id: ItemId, thickness: f32);
    /// Full display sequence, first to last.
    fn set_order(&mut self, order: &[ItemId]);
}

/// Resolves display surfaces by selector.
pub trait Host {
    type Surface: Surface;

    fn resolve_surface(&mut self, selector: &str) -> Option<Self::Surface>;
}
