// Example: enable a few features, drive the frame loop, print the list.
use arraylist::{ArrayList, ListOptions, Placement};

fn main() {
    let mut list = ArrayList::new(ListOptions::monospace());

    list.enable("killaura", Some("Killaura"), Some("combat"), 0);
    list.enable("fly", Some("Fly"), Some("movement"), 0);
    list.enable("esp", Some("ESP"), Some("visual"), 0);

    let mut now_ms = 0u64;
    while now_ms <= 240 {
        list.tick(now_ms);
        now_ms += 16;
    }
    print(&list);

    list.disable("fly", now_ms);
    println!("after disable: order={:?}", list.order());
    for _ in 0..15 {
        now_ms += 16;
        list.tick(now_ms);
    }
    print(&list);

    list.set_placement(Placement::Bottom);
    println!("bottom placement: order={:?}", list.order());
}

fn print(list: &ArrayList) {
    println!("offset={:.3}", list.clock().offset());
    list.for_each_item(|item| {
        let color = item.color.map(|c| c.to_string()).unwrap_or_default();
        println!("  {:<10} {:?} {color}", item.text, item.transition);
    });
}
