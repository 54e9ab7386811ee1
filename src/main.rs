// src/main.rs v2
//! Button Panel - touchscreen button grid for framebuffer displays

use button_panel::config::PanelConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run windowed for desktop development instead of full-screen framebuffer
    #[arg(long)]
    dev: bool,
}

#[cfg(not(all(unix, not(target_os = "macos"), feature = "gui")))]
fn main() {
    eprintln!("Error: This application requires the 'gui' feature.");
    eprintln!("Build with: cargo build --features gui");
    std::process::exit(1);
}

#[cfg(all(unix, not(target_os = "macos"), feature = "gui"))]
fn main() -> button_panel::Result<()> {
    use button_panel::display::backend::BackendPlan;
    use button_panel::display::{gui::PanelDisplay, DisplayMode};

    let cli = Cli::parse();

    // Load configuration
    let config = PanelConfig::load().unwrap_or_default();

    // Configure the display backend before the toolkit initializes
    let requested = DisplayMode::from_dev_flag(cli.dev);
    let plan = BackendPlan::prepare(requested, &config);
    plan.apply();

    match plan.mode() {
        DisplayMode::Framebuffer => println!("Running in framebuffer mode"),
        DisplayMode::Windowed => println!("Running in development mode"),
    }

    // Hand control to the GUI event loop
    PanelDisplay::new().run(plan.mode(), &config)
}
