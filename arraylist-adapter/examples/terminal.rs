use std::collections::BTreeMap;

use arraylist::{ItemId, ListOptions, Placement, Rgb, Transition};
use arraylist_adapter::{Easing, Host, Surface, Widget};

// Example: a surface that renders the list as ANSI-colored terminal lines.
#[derive(Debug, Default)]
struct Terminal {
    items: BTreeMap<ItemId, Line>,
    order: Vec<ItemId>,
    visible: bool,
}

#[derive(Debug, Default)]
struct Line {
    text: String,
    color: Option<Rgb>,
    thickness: f32,
}

impl Terminal {
    fn render(&self, label: &str) {
        println!("-- {label}");
        if !self.visible {
            return;
        }
        for id in &self.order {
            let Some(line) = self.items.get(id) else {
                continue;
            };
            let bar = "|".repeat(line.thickness as usize);
            match line.color {
                Some(c) => println!("\x1b[38;2;{};{};{}m{bar} {}\x1b[0m", c.r, c.g, c.b, line.text),
                None => println!("{bar} {}", line.text),
            }
        }
    }
}

impl Surface for Terminal {
    fn set_opacity(&mut self, _opacity: f32) {}
    fn set_scale(&mut self, _scale: f32) {}
    fn set_font(&mut self, _font: &str) {}
    fn set_font_size(&mut self, _font_size: f32) {}
    fn set_placement(&mut self, _placement: Placement) {}

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn attach_item(&mut self, id: ItemId, text: &str, _transition: Transition, thickness: f32) {
        self.items.insert(
            id,
            Line {
                text: text.to_string(),
                color: None,
                thickness,
            },
        );
    }

    fn detach_item(&mut self, id: ItemId) {
        self.items.remove(&id);
        self.order.retain(|&o| o != id);
    }

    fn set_item_text(&mut self, id: ItemId, text: &str) {
        if let Some(line) = self.items.get_mut(&id) {
            line.text = text.to_string();
        }
    }

    fn set_item_transition(&mut self, _id: ItemId, _transition: Transition) {}

    fn set_item_accent(&mut self, _id: ItemId, _color: Rgb) {}

    fn set_item_text_color(&mut self, id: ItemId, color: Rgb) {
        if let Some(line) = self.items.get_mut(&id) {
            line.color = Some(color);
        }
    }

    fn set_item_thickness(&mut self, id: ItemId, thickness: f32) {
        if let Some(line) = self.items.get_mut(&id) {
            line.thickness = thickness;
        }
    }

    fn set_order(&mut self, order: &[ItemId]) {
        self.order = order.to_vec();
    }
}

struct Stdout;

impl Host for Stdout {
    type Surface = Terminal;

    fn resolve_surface(&mut self, selector: &str) -> Option<Terminal> {
        (selector == "stdout").then(|| Terminal {
            visible: true,
            ..Terminal::default()
        })
    }
}

fn main() -> Result<(), arraylist_adapter::Error> {
    let mut w = Widget::mount(&mut Stdout, "stdout", ListOptions::monospace())?;
    for (name, display) in [("aura", "Killaura"), ("fly", "Fly"), ("esp", "ESP")] {
        w.enable(name, Some(display), None);
    }

    let mut now_ms = 0u64;
    for _ in 0..20 {
        now_ms += 16;
        w.tick(now_ms);
        if let Some(slide) = w.slide("aura", Easing::default()) {
            println!("aura slide-in: {:.2}", slide.visible_fraction(now_ms));
        }
    }
    w.surface().render("settled");

    w.set_border_width(1.0);
    w.disable("fly");
    for _ in 0..20 {
        now_ms += 16;
        w.tick(now_ms);
    }
    w.surface().render("fly disabled");

    w.hide();
    w.surface().render("hidden");
    let surface = w.dispose();
    println!("lines after dispose: {}", surface.items.len());
    Ok(())
}
