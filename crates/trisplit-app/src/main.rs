// trisplit — headless host for the three-pane sizing engine.
// Loads settings, replays a pointer/command script against the engine and
// prints the layout after every step.

mod host;
mod script;
mod settings;

use std::path::Path;

use host::Host;
use script::Step;

// ──────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────

fn main() {
    env_logger::init();

    let Some(script_path) = std::env::args().nth(1) else {
        eprintln!("usage: trisplit <script.json>");
        std::process::exit(2);
    };

    if let Err(e) = run(Path::new(&script_path)) {
        log::error!("{}", e);
        eprintln!("trisplit: {}", e);
        std::process::exit(1);
    }
}

fn run(script_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    let script = script::load_script(script_path)?;
    log::info!(
        "replaying {} steps at {}x{}",
        script.steps.len(),
        script.viewport.width,
        script.viewport.height
    );

    let mut host = Host::new(settings.layout, script.viewport.into());
    println!("{:>4}  {:<28} {}", 0, "start", host.status_line());

    for (i, step) in script.steps.iter().enumerate() {
        host.apply(*step);
        println!("{:>4}  {:<28} {}", i + 1, format!("{:?}", step), host.status_line());
    }

    if host.is_captured() {
        log::warn!("script ended mid-drag; disposing session");
        host.apply(Step::Dispose);
    }
    log::info!("final extents {:?}", host.model().extents());
    Ok(())
}
