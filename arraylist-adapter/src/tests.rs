use crate::*;

use std::collections::HashMap;
use std::string::{String, ToString};
use std::vec;
use std::vec::Vec;

use arraylist::{
    CategoryColors, ColorMode, ItemId, ListConfig, ListOptions, Placement, RAINBOW, Rgb,
    TextStyle, Transition,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct RecordedItem {
    text: String,
    transition: Option<Transition>,
    accent: Option<Rgb>,
    text_color: Option<Rgb>,
    thickness: f32,
}

#[derive(Debug, Default)]
struct Recorder {
    opacity: f32,
    scale: f32,
    font: String,
    font_size: f32,
    placement: Option<Placement>,
    visible: Option<bool>,
    items: HashMap<ItemId, RecordedItem>,
    order: Vec<ItemId>,
    detached: Vec<ItemId>,
}

impl Recorder {
    fn item(&mut self, id: ItemId) -> &mut RecordedItem {
        match self.items.get_mut(&id) {
            Some(item) => item,
            None => panic!("surface call for unattached item {id:?}"),
        }
    }

    fn texts(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .map(|item| item.text.as_str())
            .collect()
    }
}

impl Surface for Recorder {
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn attach_item(&mut self, id: ItemId, text: &str, transition: Transition, thickness: f32) {
        let item = RecordedItem {
            text: text.to_string(),
            transition: Some(transition),
            thickness,
            ..RecordedItem::default()
        };
        assert!(self.items.insert(id, item).is_none(), "{id:?} attached twice");
    }

    fn detach_item(&mut self, id: ItemId) {
        assert!(self.items.remove(&id).is_some(), "{id:?} detached while not attached");
        self.order.retain(|&o| o != id);
        self.detached.push(id);
    }

    fn set_item_text(&mut self, id: ItemId, text: &str) {
        self.item(id).text = text.to_string();
    }

    fn set_item_transition(&mut self, id: ItemId, transition: Transition) {
        self.item(id).transition = Some(transition);
    }

    fn set_item_accent(&mut self, id: ItemId, color: Rgb) {
        self.item(id).accent = Some(color);
    }

    fn set_item_text_color(&mut self, id: ItemId, color: Rgb) {
        self.item(id).text_color = Some(color);
    }

    fn set_item_thickness(&mut self, id: ItemId, thickness: f32) {
        self.item(id).thickness = thickness;
    }

    fn set_order(&mut self, order: &[ItemId]) {
        for id in order {
            assert!(self.items.contains_key(id), "{id:?} ordered while not attached");
        }
        self.order = order.to_vec();
    }
}

struct TestHost {
    selectors: Vec<&'static str>,
}

impl Host for TestHost {
    type Surface = Recorder;

    fn resolve_surface(&mut self, selector: &str) -> Option<Recorder> {
        self.selectors
            .contains(&selector)
            .then(Recorder::default)
    }
}

fn widths(text: &str, _: &TextStyle<'_>) -> f32 {
    match text {
        "Alpha" => 50.0,
        "B" => 10.0,
        _ => text.len() as f32 * 10.0,
    }
}

fn widget(config: ListConfig) -> Widget<Recorder> {
    let mut host = TestHost {
        selectors: vec!["#hud"],
    };
    let mut w = Widget::mount(&mut host, "#hud", ListOptions::new(widths).with_config(config))
        .unwrap();
    w.tick(0);
    w
}

fn id_of(w: &Widget<Recorder>, name: &str) -> ItemId {
    w.list().item(name).map(|i| i.id).unwrap()
}

#[test]
fn mount_fails_without_a_surface() {
    let mut host = TestHost { selectors: vec![] };
    let err = Widget::mount(&mut host, "#missing", ListOptions::monospace()).unwrap_err();
    match &err {
        Error::HostSurfaceMissing { selector } => assert_eq!(selector, "#missing"),
    }
    assert!(err.to_string().contains("#missing"));
}

#[test]
fn mount_applies_every_style() {
    let w = widget(
        ListConfig::default()
            .with_opacity(0.5)
            .with_scale(2.0)
            .with_font("monospace")
            .with_placement(Placement::Bottom),
    );
    let s = w.surface();
    assert_eq!(s.opacity, 0.5);
    assert_eq!(s.scale, 1.5);
    assert_eq!(s.font, "monospace");
    assert_eq!(s.font_size, 16.0);
    assert_eq!(s.placement, Some(Placement::Bottom));
    assert!(w.list().clock().is_running());
}

#[test]
fn disabled_feature_leaves_the_surface_after_settling() {
    let mut w = widget(ListConfig::default());
    w.enable("A", Some("Alpha"), None);
    w.enable("B", Some("B"), None);
    let (a, b) = (id_of(&w, "A"), id_of(&w, "B"));
    assert_eq!(w.surface().order, vec![a, b]);
    assert_eq!(w.surface().texts(), vec!["Alpha", "B"]);

    assert!(w.disable("A"));
    assert_eq!(
        w.surface().items.get(&a).and_then(|i| i.transition),
        Some(Transition::Exiting)
    );

    w.tick(200);
    assert_eq!(w.surface().order, vec![b]);
    assert_eq!(w.surface().detached, vec![a]);
    assert!(!w.disable("nope"));
}

#[test]
fn setters_clamp_and_reach_the_surface() {
    let mut w = widget(ListConfig::default());
    assert_eq!(w.set_opacity(5.0), 1.0);
    assert_eq!(w.opacity(), 1.0);
    assert_eq!(w.surface().opacity, 1.0);

    assert_eq!(w.set_scale(0.1), 0.5);
    assert_eq!(w.surface().scale, 0.5);

    assert_eq!(w.set_font_size(2.0), 8.0);
    assert_eq!(w.surface().font_size, 8.0);

    assert_eq!(w.set_flow_speed(-3.0), 0.1);
    w.set_font("serif");
    assert_eq!(w.surface().font, "serif");
}

#[test]
fn border_width_applies_to_existing_and_new_items() {
    let mut w = widget(ListConfig::default());
    w.enable("a", None, None);
    w.enable("b", None, None);
    assert_eq!(w.set_border_width(20.0), 10.0);
    for item in w.surface().items.values() {
        assert_eq!(item.thickness, 10.0);
    }

    w.enable("c", None, None);
    let c = id_of(&w, "c");
    assert_eq!(w.surface().items.get(&c).map(|i| i.thickness), Some(10.0));
}

#[test]
fn categorized_color_sets_accent_and_text_identically() {
    let table = CategoryColors::parse([("combat", "#E53333")]).unwrap();
    let mut w = widget(
        ListConfig::default()
            .with_color_mode(ColorMode::Categorized)
            .with_category_colors(table),
    );
    w.enable("X", Some("Killaura"), Some("combat"));
    w.tick(400);
    let item = w.surface().items.get(&id_of(&w, "X")).cloned().unwrap();
    let expected = Some(Rgb::new(0xE5, 0x33, 0x33));
    assert_eq!(item.accent, expected);
    assert_eq!(item.text_color, expected);
}

#[test]
fn category_table_change_reaches_the_surface() {
    let mut w = widget(ListConfig::default().with_color_mode(ColorMode::Categorized));
    w.enable("X", Some("Killaura"), Some("combat"));
    w.tick(200);
    let x = id_of(&w, "X");

    let blue = Rgb::new(0x11, 0x22, 0xEE);
    w.set_category_colors(CategoryColors::parse([("combat", "#1122EE")]).unwrap());
    assert_eq!(w.category_colors().get("combat"), Some(blue));
    assert_eq!(w.list().item("X").and_then(|i| i.color), Some(blue));
    let item = w.surface().items.get(&x).cloned().unwrap();
    assert_eq!(item.accent, Some(blue));
    assert_eq!(item.text_color, Some(blue));
}

#[test]
fn enable_before_the_first_frame_still_animates() {
    let mut host = TestHost {
        selectors: vec!["#hud"],
    };
    let mut w = Widget::mount(&mut host, "#hud", ListOptions::new(widths)).unwrap();
    w.enable("a", None, None);
    let a = id_of(&w, "a");

    w.tick(10_000);
    assert_eq!(
        w.surface().items.get(&a).and_then(|i| i.transition),
        Some(Transition::Entering)
    );
    let slide = w.slide("a", Easing::Linear).unwrap();
    assert_eq!(slide.progress(10_100), 0.5);

    w.tick(10_199);
    assert_eq!(w.list().item("a").map(|i| i.transition), Some(Transition::Entering));
    w.tick(10_200);
    assert_eq!(
        w.surface().items.get(&a).and_then(|i| i.transition),
        Some(Transition::Settled)
    );
}

#[test]
fn rainbow_follows_the_clock() {
    let mut w = widget(ListConfig::default().with_animations_disabled(true));
    w.enable("a", None, None);
    let a = id_of(&w, "a");
    assert_eq!(w.surface().items.get(&a).and_then(|i| i.accent), Some(RAINBOW[0]));

    // flow speed 2 → 0.02 per 16ms; 800ms advances one palette step.
    w.tick(800);
    assert_eq!(w.surface().items.get(&a).and_then(|i| i.accent), Some(RAINBOW[1]));
}

#[test]
fn color_mode_change_recolors_immediately() {
    let mut w = widget(ListConfig::default().with_animations_disabled(true));
    w.enable("a", None, None);
    w.set_color_mode(ColorMode::Literal(Rgb::new(9, 9, 9)));
    let a = id_of(&w, "a");
    assert_eq!(
        w.surface().items.get(&a).and_then(|i| i.text_color),
        Some(Rgb::new(9, 9, 9))
    );
    assert_eq!(w.color_mode(), ColorMode::Literal(Rgb::new(9, 9, 9)));
}

#[test]
fn placement_flip_reorders_the_surface() {
    let mut w = widget(ListConfig::default().with_animations_disabled(true));
    w.enable("A", Some("Alpha"), None);
    w.enable("B", Some("B"), None);
    assert_eq!(w.surface().texts(), vec!["Alpha", "B"]);

    w.set_placement(Placement::Bottom);
    assert_eq!(w.surface().placement, Some(Placement::Bottom));
    assert_eq!(w.surface().texts(), vec!["B", "Alpha"]);
}

#[test]
fn display_name_override_updates_text() {
    let mut w = widget(ListConfig::default());
    w.enable("fly", Some("Fly"), None);
    w.enable("fly", Some("Flight"), None);
    assert_eq!(w.surface().texts(), vec!["Flight"]);
}

#[test]
fn show_and_hide_toggle_visibility_only() {
    let mut w = widget(ListConfig::default());
    w.enable("a", None, None);
    w.hide();
    assert!(!w.is_visible());
    assert_eq!(w.surface().visible, Some(false));
    assert_eq!(w.surface().items.len(), 1);
    w.show();
    assert!(w.is_visible());
    assert_eq!(w.surface().visible, Some(true));
}

#[test]
fn slide_tracks_enter_and_exit() {
    let mut w = widget(ListConfig::default());
    w.enable("a", None, None);
    let slide = w.slide("a", Easing::Linear).unwrap();
    assert_eq!(slide.direction, SlideDirection::In);
    assert_eq!(slide.progress(100), 0.5);
    assert_eq!(slide.offset(100, 40.0), 20.0);

    w.tick(200);
    assert!(w.slide("a", Easing::Linear).is_none());

    w.disable("a");
    let slide = w.slide("a", Easing::Linear).unwrap();
    assert_eq!(slide.direction, SlideDirection::Out);
    assert_eq!(slide.visible_fraction(200), 1.0);
    assert!(slide.is_done(400));
    assert_eq!(slide.visible_fraction(400), 0.0);
}

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
    }
}

#[test]
fn dispose_detaches_everything_and_returns_the_surface() {
    let mut w = widget(ListConfig::default());
    w.enable("a", None, None);
    w.enable("b", None, None);
    let surface = w.dispose();
    assert!(surface.items.is_empty());
    assert!(surface.order.is_empty());
    assert_eq!(surface.detached.len(), 2);
}

#[test]
fn set_config_reapplies_styles() {
    let mut w = widget(ListConfig::default());
    w.enable("a", None, None);
    w.set_config(ListConfig::default().with_opacity(0.25).with_border_width(7.0));
    assert_eq!(w.surface().opacity, 0.25);
    let a = id_of(&w, "a");
    assert_eq!(w.surface().items.get(&a).map(|i| i.thickness), Some(7.0));
}
