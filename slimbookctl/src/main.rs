//! Command-line interface for slimbook

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use slimbook::{BacklightController, DeviceInfo, Identity, Model, RgbColor, SysfsPaths};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "slimbookctl")]
#[command(version = slimbook::VERSION)]
#[command(about = "Slimbook control tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read sysfs and procfs below this directory instead of /
    #[arg(long, env = "SLIMBOOK_ROOT", global = true)]
    root: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display Slimbook model information
    Info {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the keyboard backlight colour as RRGGBB
    GetKbdBacklight,

    /// Set the keyboard backlight colour
    SetKbdBacklight {
        /// Colour as hex RRGGBB, optionally prefixed with # or 0x
        color: RgbColor,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match &cli.root {
        Some(root) => SysfsPaths::under(root),
        None => SysfsPaths::default(),
    };
    log::debug!("using {:?}", paths);

    match &cli.command {
        Commands::Info { format } => {
            let info = Identity::with_paths(paths).info();
            let printed = match format {
                OutputFormat::Text => {
                    print_device_info_text(&info);
                    Ok(())
                }
                OutputFormat::Json => print_device_info_json(&info),
            };
            if let Err(e) = printed {
                eprintln!("Error: {:#}", e);
                return ExitCode::FAILURE;
            }
        }

        Commands::GetKbdBacklight => match BacklightController::with_paths(paths).get(Model::UNKNOWN) {
            Ok(color) => println!("{}", color),
            Err(e) => {
                eprintln!("Failed to retrieve keyboard backlight: {}", e);
                return exit_status(e.errno());
            }
        },

        Commands::SetKbdBacklight { color } => {
            if let Err(e) = BacklightController::with_paths(paths).set(Model::UNKNOWN, *color) {
                eprintln!("Failed to set keyboard backlight: {}", e);
                return exit_status(e.errno());
            }
        }
    }

    ExitCode::SUCCESS
}

fn exit_status(errno: i32) -> ExitCode {
    ExitCode::from(u8::try_from(errno).unwrap_or(1))
}

fn print_device_info_text(info: &DeviceInfo) {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "unknown".to_string());

    println!("product: {}", show(&info.product_name));
    println!("vendor: {}", show(&info.board_vendor));
    println!("serial: {}", show(&info.product_serial));
    println!("bios version: {}", show(&info.bios_version));
    println!("ec firmware: {}", show(&info.ec_firmware_release));
    println!("model: {}", info.model);
    println!("platform: {} (0x{:04x})", info.platform, info.platform.raw());
    println!("module loaded: {}", if info.module_loaded { "yes" } else { "no" });
}

fn print_device_info_json(info: &DeviceInfo) -> anyhow::Result<()> {
    let json = info.to_json()?;
    println!("{}", json);
    Ok(())
}
