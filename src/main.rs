use bvac::armour::ArmourType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate an armour distribution for a vehicle
    Calc {
        /// Vehicle tonnage to spend on armour
        #[arg(value_name = "TONS")]
        tonnage: f64,

        /// Armour type to price the tonnage with
        #[arg(short, long, value_enum, default_value = "standard")]
        armour: ArmourType,

        /// Round each facing to a multiple of five (Front rounds up)
        #[arg(short, long)]
        round_each: bool,

        /// Drop the turret and spread its share over the other facings
        #[arg(short = 't', long)]
        remove_turret: bool,

        /// Write the distribution as CSV (default file: armour_distribution.csv)
        #[arg(
            long,
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = "armour_distribution.csv"
        )]
        csv: Option<PathBuf>,
    },
    /// List armour types and their point yields (default if no subcommand)
    Types,
    /// Set the colour theme used for reports
    Theme {
        /// Palette to store in settings
        #[arg(value_enum)]
        mode: ThemeMode,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeMode {
    /// Bright palette for dark terminals
    Dark,
    /// Restrained palette for light terminals
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "bvac")]
#[command(about = "BattleTech vehicle armour calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Types);

    match command {
        Commands::Calc {
            tonnage,
            armour,
            round_each,
            remove_turret,
            csv,
        } => {
            if let Err(e) = bvac::armour::validate_tonnage(tonnage) {
                eprintln!("Input error: {}", e);
                std::process::exit(EXIT_INPUT);
            }

            let total_points = armour.total_points(tonnage);

            if cli.verbose {
                eprintln!(
                    "{} tons of {} buys {} points",
                    tonnage,
                    armour.name(),
                    total_points
                );
                eprintln!("Share table:");
                for (facing, share) in bvac::allocation::share_table(remove_turret) {
                    eprintln!("  {}: {:.5}", facing.label(), share);
                }
            }

            let allocation = bvac::allocation::allocate(total_points, round_each, remove_turret);

            if cli.verbose {
                eprintln!(
                    "Allocated {} points across {} facings ({} unabsorbed)",
                    allocation.total(),
                    allocation.points.len(),
                    allocation.excess
                );
            }

            // A broken settings file should not block a calculation
            let settings = match bvac::settings::load_settings(&bvac::settings::get_settings_path())
            {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Settings error: {} (using defaults)", e);
                    bvac::settings::Settings::new()
                }
            };

            let theme = bvac::theme::Theme::from_dark_mode(settings.dark_mode);
            let use_colors = bvac::output::should_use_colors();

            println!(
                "{}",
                bvac::output::format_report(
                    &allocation,
                    armour,
                    tonnage,
                    total_points,
                    use_colors,
                    &theme
                )
            );
            println!();
            println!(
                "{}",
                bvac::output::format_diagram(&allocation, use_colors, &theme)
            );

            if let Some(path) = csv {
                let contents = bvac::output::format_csv(&allocation, armour);
                if let Err(e) = std::fs::write(&path, contents) {
                    eprintln!("Failed to write CSV to {}: {}", path.display(), e);
                    std::process::exit(EXIT_IO);
                }
                println!("Armour distribution saved to '{}'", path.display());
            }
        }
        Commands::Types => {
            let settings = match bvac::settings::load_settings(&bvac::settings::get_settings_path())
            {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Settings error: {} (using defaults)", e);
                    bvac::settings::Settings::new()
                }
            };

            let theme = bvac::theme::Theme::from_dark_mode(settings.dark_mode);
            let use_colors = bvac::output::should_use_colors();

            println!("{}", bvac::output::format_types_table(use_colors, &theme));
        }
        Commands::Theme { mode } => {
            let settings_path = bvac::settings::get_settings_path();

            if cli.verbose {
                eprintln!("Settings file: {}", settings_path.display());
            }

            let mut settings = match bvac::settings::load_settings(&settings_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Settings error: {}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            settings.dark_mode = matches!(mode, ThemeMode::Dark);

            if let Err(e) = bvac::settings::save_settings(&settings_path, &settings) {
                eprintln!("Failed to save settings: {}", e);
                std::process::exit(EXIT_IO);
            }

            let name = match mode {
                ThemeMode::Dark => "dark",
                ThemeMode::Light => "light",
            };
            println!("Theme set to {}", name);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
