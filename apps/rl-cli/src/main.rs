use clap::{Args, Parser, Subcommand, ValueEnum};
use rl_app::{
    AppError, AppResult, ComputeOptions, ProjectReport, RoomReport, compute_project, compute_room,
    list_rooms, load_project, plausibility_issues,
};
use rl_engine::{HeatLoss, HeatLossBreakdown};
use rl_project::schema::RoomDef;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rl-cli")]
#[command(about = "RoomLoad CLI - steady-state design heat loss of rooms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project file and resolve every room
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// List rooms in a project
    Rooms {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Compute the heat loss of one or all rooms in a project
    Compute {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Only compute this room
        #[arg(long)]
        room: Option<String>,
        /// Show the breakdown for every room
        #[arg(long)]
        detail: bool,
        /// Refuse implausible inputs instead of computing them
        #[arg(long)]
        strict: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute a single room given on the command line
    Room {
        #[command(flatten)]
        room: RoomArgs,
        /// Show the breakdown instead of the total only
        #[arg(long)]
        detail: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Args)]
struct RoomArgs {
    /// Floor area in m²
    #[arg(long)]
    floor_area: f64,
    /// Exterior wall U-value in W/(m²·K)
    #[arg(long)]
    uw: f64,
    /// Roof U-value in W/(m²·K)
    #[arg(long)]
    uroof: f64,
    /// Ground floor U-value in W/(m²·K)
    #[arg(long)]
    uground: f64,
    /// Ventilation system: C (exhaust only) or D (balanced with heat recovery)
    #[arg(long)]
    v_system: String,
    /// Air permeability at 50 Pa in m³/(h·m²)
    #[arg(long, default_value_t = 6.0)]
    v50: f64,
    /// Indoor design temperature in °C
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    t_in: f64,
    /// Outdoor design temperature in °C
    #[arg(long, default_value_t = -7.0, allow_negative_numbers = true)]
    t_out: f64,
    /// Neighbouring space temperature in °C
    #[arg(long, default_value_t = 18.0, allow_negative_numbers = true)]
    neighbour_t: f64,
    /// U-value toward neighbouring zones in W/(m²·K)
    #[arg(long, default_value_t = 1.0)]
    un: f64,
    /// Leakage infiltration ratio applied to v50
    #[arg(long, default_value_t = 0.2)]
    lir: f64,
    /// fromFloorArea or fromExposedPerimeter
    #[arg(long, default_value = "fromFloorArea")]
    heat_loss_area_estimation: String,
    /// simple or NBN-D-50-001
    #[arg(long, default_value = "simple")]
    ventilation_calculation_method: String,
    /// Exposed perimeter in m
    #[arg(long, default_value_t = 0.0)]
    exposed_perimeter: f64,
    /// Perimeter toward neighbours in m
    #[arg(long, default_value_t = 0.0)]
    neighbour_perimeter: f64,
    #[arg(long)]
    on_ground: bool,
    #[arg(long)]
    under_roof: bool,
    #[arg(long)]
    add_neighbour_losses: bool,
    /// Room function for the NBN-D-50-001 method
    #[arg(long)]
    room_type: Option<String>,
    /// Wall height in m
    #[arg(long, default_value_t = 2.7)]
    wall_height: f64,
}

impl RoomArgs {
    fn into_room_def(self, detail: bool) -> RoomDef {
        let mut room = RoomDef::new(
            "cli",
            self.floor_area,
            self.uw,
            self.uroof,
            self.uground,
            self.v_system,
        );
        room.v50 = self.v50;
        room.t_in = self.t_in;
        room.t_out = self.t_out;
        room.neighbour_t = self.neighbour_t;
        room.u_n = self.un;
        room.lir = self.lir;
        room.heat_loss_area_estimation = self.heat_loss_area_estimation;
        room.ventilation_calculation_method = self.ventilation_calculation_method;
        room.exposed_perimeter = self.exposed_perimeter;
        room.neighbour_perimeter = self.neighbour_perimeter;
        room.on_ground = self.on_ground;
        room.under_roof = self.under_roof;
        room.add_neighbour_losses = self.add_neighbour_losses;
        room.room_type = self.room_type;
        room.wall_height = self.wall_height;
        room.return_detail = detail;
        room
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so JSON/YAML on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Rooms { project_path } => cmd_rooms(&project_path),
        Commands::Compute {
            project_path,
            room,
            detail,
            strict,
            format,
        } => {
            let options = ComputeOptions {
                room,
                force_detail: detail,
                strict,
            };
            cmd_compute(&project_path, &options, format)
        }
        Commands::Room {
            room,
            detail,
            format,
        } => cmd_room(room.into_room_def(detail), format),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = load_project(project_path)?;
    rl_project::resolve_rooms(&project)?;

    let issues = plausibility_issues(&project);
    for issue in &issues {
        println!("  warning: {}", issue);
    }
    println!(
        "✓ Project is valid ({} rooms, {} warnings)",
        project.rooms.len(),
        issues.len()
    );
    Ok(())
}

fn cmd_rooms(project_path: &Path) -> AppResult<()> {
    let project = load_project(project_path)?;
    let rooms = list_rooms(&project);

    if rooms.is_empty() {
        println!("No rooms found in project");
    } else {
        println!("Rooms in project:");
        for room in rooms {
            println!(
                "  {} - {} ({:.1} m², {}{})",
                room.id,
                room.name,
                room.floor_area_m2,
                room.ventilation_method,
                room.room_type
                    .map(|t| format!(", {}", t))
                    .unwrap_or_default()
            );
        }
    }
    Ok(())
}

fn cmd_compute(project_path: &Path, options: &ComputeOptions, format: OutputFormat) -> AppResult<()> {
    let project = load_project(project_path)?;
    let report = compute_project(&project, options)?;

    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Yaml => print_yaml(&report)?,
    }
    Ok(())
}

fn cmd_room(room: RoomDef, format: OutputFormat) -> AppResult<()> {
    let heat_loss = compute_room(&room)?;

    match format {
        OutputFormat::Text => print_heat_loss(&heat_loss, ""),
        OutputFormat::Json => print_json(&heat_loss)?,
        OutputFormat::Yaml => print_yaml(&heat_loss)?,
    }
    Ok(())
}

fn print_report(report: &ProjectReport) {
    println!("Project: {}", report.name);
    for room in &report.rooms {
        print_room(room);
    }
    println!("Total: {:.1} W", report.total_heat_loss.value);
}

fn print_room(room: &RoomReport) {
    match &room.name {
        Some(name) => println!("  {} ({})", room.id, name),
        None => println!("  {}", room.id),
    }
    print_heat_loss(&room.heat_loss, "    ");
}

fn print_heat_loss(heat_loss: &HeatLoss, indent: &str) {
    match heat_loss {
        HeatLoss::Total(total) => println!("{indent}Heat loss: {:.1} W", total.value),
        HeatLoss::Detailed(breakdown) => print_breakdown(breakdown, indent),
    }
}

fn print_breakdown(b: &HeatLossBreakdown, indent: &str) {
    println!("{indent}Transmission: {:>9.1} W", b.transmission.value);
    println!("{indent}Ventilation:  {:>9.1} W", b.ventilation.value);
    println!("{indent}Infiltration: {:>9.1} W", b.infiltration.value);
    println!("{indent}Neighbours:   {:>9.1} W", b.neighbour.value);
    println!("{indent}Total:        {:>9.1} W", b.total.value);
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let content =
        serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))?;
    println!("{}", content);
    Ok(())
}

fn print_yaml<T: Serialize>(value: &T) -> AppResult<()> {
    let content = serde_yaml::to_string(value).map_err(|e| AppError::Output(e.to_string()))?;
    print!("{}", content);
    Ok(())
}
