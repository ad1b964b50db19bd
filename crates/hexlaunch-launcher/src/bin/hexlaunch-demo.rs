//! Hexlaunch demo
//!
//! Lays out a set of demo apps, mutates the collection the way a UI would and
//! prints the resulting layout as JSON.

use std::env;

use hexlaunch_launcher::{CollectionChange, Launcher, LauncherConfig, LauncherItem};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ICONS: [&str; 8] = [
    "mail.png", "maps.png", "music.png", "clock.png", "notes.png", "photos.png", "camera.png",
    "files.png",
];

#[derive(Debug, Clone, PartialEq)]
struct DemoApp {
    id: usize,
    icon: &'static str,
}

impl DemoApp {
    fn new(id: usize) -> Self {
        Self {
            id,
            icon: ICONS[id % ICONS.len()],
        }
    }
}

impl LauncherItem for DemoApp {
    fn icon(&self) -> &str {
        self.icon
    }

    fn invoke(&self) {
        tracing::info!(id = self.id, icon = self.icon, "app launched");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexlaunch=info,hexlaunch_launcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let item_count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(19);

    let config = LauncherConfig::from_env()?;
    tracing::info!(item_count, hex_size = config.hex_size, "assembling launcher");

    let mut launcher = Launcher::with_items(config, (0..item_count).map(DemoApp::new))?;

    // Drop the third app and add a new one; it lands in the freed hex.
    if item_count > 2 {
        launcher.apply(CollectionChange::Removed(vec![DemoApp::new(2)]))?;
    }
    let events = launcher.apply(CollectionChange::Added(vec![DemoApp::new(item_count)]))?;
    for event in &events {
        tracing::info!(?event, "layout changed");
    }

    // Fling partway toward the east and let it settle.
    let (width, _) = hexlaunch_launcher::topology::hex_dimensions(config.hex_size);
    launcher.pan_to(-1.6 * width, 0.4 * width);
    if let Some(target) = launcher.snap() {
        tracing::info!(hex = %target.hex, dx = target.dx, dy = target.dy, "snapped");
        launcher.invoke(target.hex)?;
    }
    tracing::info!(limit = launcher.kinetic_scroll_limit(), "kinetic scroll limit");

    println!("{}", launcher.snapshot().to_json()?);

    Ok(())
}
