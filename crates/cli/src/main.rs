//! gled CLI: Logitech G102/G203 mouse LED control.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use gled_core::device::UsbTransport;
use gled_core::lighting::{startup_effect_packet, Effect, Packet};
use gled_core::params::{Brightness, Color, Rate, Toggle};
use gled_core::transport::apply_packet;

#[derive(Parser)]
#[command(
    name = "gled",
    version,
    about = "Logitech G102/G203 mouse LED control"
)]
struct Cli {
    /// libusb debug level.
    #[arg(long, global = true, default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=3))]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solid color mode.
    Solid {
        /// RRGGBB or RGB hex value, e.g. FF0000 for red.
        color: String,
    },
    /// Cycle through all colors.
    Cycle {
        /// Milliseconds per cycle, 100-60000.
        rate: String,
        /// Percentage, 1-100.
        brightness: String,
    },
    /// Single color breathing.
    Breathe {
        /// RRGGBB or RGB hex value.
        color: String,
        /// Milliseconds per breath, 100-60000.
        rate: String,
        /// Percentage, 1-100.
        brightness: String,
    },
    /// Enable or disable the startup effect.
    Intro {
        /// on or off.
        toggle: String,
    },
}

/// Validate arguments and build the wire packet plus a confirmation line.
///
/// Pure — runs to completion or fails before any USB activity.
fn build_packet(command: &Commands) -> gled_core::error::Result<(Packet, String)> {
    match command {
        Commands::Solid { color } => {
            let color = Color::from_hex(color)?;
            Ok((
                Effect::Solid(color).encode(),
                format!("Solid color set to {color}"),
            ))
        }
        Commands::Cycle { rate, brightness } => {
            let rate = Rate::from_arg(Some(rate.as_str()))?;
            let brightness = Brightness::from_arg(Some(brightness.as_str()))?;
            Ok((
                Effect::Cycle { rate, brightness }.encode(),
                format!(
                    "Color cycle set ({} ms, {}% brightness)",
                    rate.as_ms(),
                    brightness.as_percent()
                ),
            ))
        }
        Commands::Breathe {
            color,
            rate,
            brightness,
        } => {
            let color = Color::from_hex(color)?;
            let rate = Rate::from_arg(Some(rate.as_str()))?;
            let brightness = Brightness::from_arg(Some(brightness.as_str()))?;
            Ok((
                Effect::Breathe {
                    color,
                    rate,
                    brightness,
                }
                .encode(),
                format!(
                    "Breathing set to {color} ({} ms, {}% brightness)",
                    rate.as_ms(),
                    brightness.as_percent()
                ),
            ))
        }
        Commands::Intro { toggle } => {
            let toggle = Toggle::from_arg(toggle)?;
            Ok((
                startup_effect_packet(toggle),
                format!("Startup effect turned {}", toggle.label()),
            ))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (packet, confirmation) = match build_packet(&cli.command) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(2);
        }
    };

    let transport = UsbTransport::open(cli.debug)?;
    apply_packet(&transport, &packet)?;

    println!("{confirmation}");
    Ok(())
}
