//! Headless demo: mounts a picker, replays a scripted pointer session and
//! prints every color the picker reports.
//!
//! Usage: `huepick-demo [config.json]`

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use huepick::{ColorPicker, PickerConfig, PickerOptions, Rgb};
use huepick_ui::{Bounds, Event, Point, Renderer, Size, Widget};
use web_time::Instant;

fn load_config() -> Result<PickerConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(PickerConfig::from_json(&json)?)
        }
        None => Ok(PickerConfig::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(config: &PickerConfig) {
    // RUST_LOG overrides the configured level
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level.to_level_filter());
    builder.parse_default_env();
    let _ = builder.try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    #[cfg(not(target_arch = "wasm32"))]
    init_logging(&config);

    let emitted: Rc<RefCell<Vec<Rgb>>> = Rc::default();
    let sink = Rc::clone(&emitted);
    let mut picker = ColorPicker::new(
        PickerOptions::from(&config).on_changed(move |color| sink.borrow_mut().push(color)),
    )?;

    let size = picker.layout(Size::new(1024.0, 768.0));
    let bounds = Bounds::from_origin(Point::zero(), size);
    let [saturation, value] = picker.slider_bounds(bounds);
    let center = bounds.center();
    let radius = picker.ring().ring_radius(bounds);
    log::info!("Picker laid out at {}x{}", size.width, size.height);

    // Sweep the ring a quarter turn, then drag both sliders to the middle
    let mut script = vec![Event::press(center.x + radius, center.y)];
    for step in 1..=8 {
        let theta = std::f32::consts::FRAC_PI_2 * step as f32 / 8.0;
        script.push(Event::move_to(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        ));
    }
    script.push(Event::release(center.x, center.y + radius));
    for track in [saturation, value] {
        let y = track.center().y;
        script.push(Event::press(track.x + track.width, y));
        script.push(Event::move_to(track.center().x, y));
        script.push(Event::release(track.center().x, y));
    }

    let mut now = Instant::now();
    let mut renderer = Renderer::new();
    for event in &script {
        picker.on_event(event, bounds);
        now += Duration::from_millis(16);
        while picker.tick(now) {
            now += Duration::from_millis(16);
        }
        if picker.take_redraw() {
            renderer.clear();
            picker.draw(&mut renderer, bounds);
        }
    }

    for color in emitted.borrow().iter() {
        println!("{}", color);
    }
    println!(
        "final {} after {} changes ({} draw commands per frame)",
        picker.color(),
        emitted.borrow().len(),
        renderer.commands().len()
    );
    Ok(())
}
