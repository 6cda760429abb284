// Example: the same list under each color mode.
use arraylist::{ArrayList, CategoryColors, ColorMode, ListConfig, ListOptions};

fn main() {
    let config = ListConfig::default().with_animations_disabled(true);
    let mut list = ArrayList::new(ListOptions::monospace().with_config(config));
    list.enable("scaffold", Some("Scaffold"), Some("world"), 0);
    list.enable("sprint", Some("Sprint"), Some("movement"), 0);
    list.enable("nametags", Some("Nametags"), Some("visual"), 0);
    list.enable("timer", Some("Timer"), None, 0);

    for mode in ["rainbow", "categorized", "#33CCFF", "pastel"] {
        match mode.parse::<ColorMode>() {
            Ok(mode) => list.set_color_mode(mode),
            Err(err) => {
                println!("{mode}: {err}");
                continue;
            }
        }
        println!("{mode}:");
        for item in list.items() {
            let color = item.color.map(|c| c.to_string()).unwrap_or_default();
            println!("  {:<10} {color}", item.text);
        }
    }

    let custom = CategoryColors::parse([("world", "#0F0"), ("movement", "#123456")]);
    match custom {
        Ok(table) => {
            list.set_color_mode(ColorMode::Categorized);
            list.set_category_colors(table);
            println!("custom table: {:?}", list.snapshot().items);
        }
        Err(err) => println!("bad table: {err}"),
    }
}
