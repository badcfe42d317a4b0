use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kundali_base::{
    ChartError, ObservationSet, Rashi, deg_to_dms, demo_navamsha_observations,
    demo_rashi_observations, parse_navamsa_response, parse_planets_response,
};
use kundali_chart::{
    ChartKind, ChartPlan, EmptyMarker, LabelKind, LayoutConfig, SvgSurface, render_chart,
    sign_to_house,
};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "kundali", about = "Rashi and Navamsha chart renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the birth (Rashi) chart from /planets API output
    Rashi(ChartArgs),
    /// Render the Navamsha (D9) chart from /navamsa-chart-info API output
    Navamsha(ChartArgs),
    /// Planetary positions table from /planets API output
    Positions {
        /// API response JSON file (`-` for stdin)
        #[arg(long, required_unless_present = "demo")]
        input: Option<PathBuf>,
        /// Use the built-in demonstration chart
        #[arg(long)]
        demo: bool,
    },
    /// House occupied by a sign for a given Ascendant sign
    House {
        /// Ascendant sign number (1-12)
        #[arg(long)]
        ascendant: u8,
        /// Sign number (1-12)
        sign: u8,
    },
}

#[derive(Args)]
struct ChartArgs {
    /// API response JSON file (`-` for stdin)
    #[arg(long, required_unless_present = "demo")]
    input: Option<PathBuf>,
    /// Use the built-in demonstration chart
    #[arg(long)]
    demo: bool,
    /// Fail instead of falling back to demonstration data on bad input
    #[arg(long)]
    strict: bool,
    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    format: OutputFormat,
    /// TOML file with layout overrides
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write output here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
    Text,
}

/// Layout settings read from a TOML file; unset fields keep the chart's
/// preset.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct LayoutOverrides {
    line_spacing: Option<f64>,
    show_degrees: Option<bool>,
    show_signs: Option<bool>,
    suppress_repeated_signs: Option<bool>,
    empty_marker: Option<EmptyMarker>,
}

impl LayoutOverrides {
    fn apply(&self, mut config: LayoutConfig) -> LayoutConfig {
        if let Some(v) = self.line_spacing {
            config.line_spacing = v;
        }
        if let Some(v) = self.show_degrees {
            config.show_degrees = v;
        }
        if let Some(v) = self.show_signs {
            config.show_signs = v;
        }
        if let Some(v) = self.suppress_repeated_signs {
            config.suppress_repeated_signs = v;
        }
        if let Some(v) = self.empty_marker {
            config.empty_marker = v;
        }
        config
    }
}

fn load_layout(kind: ChartKind, path: Option<&Path>) -> LayoutConfig {
    let preset = kind.default_config();
    let Some(path) = path else {
        return preset;
    };
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read config {}: {e}", path.display());
        std::process::exit(1);
    });
    let overrides: LayoutOverrides = toml::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid config {}: {e}", path.display());
        std::process::exit(1);
    });
    overrides.apply(preset)
}

fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("stdin: {e}"))?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
}

fn parse_for(kind: ChartKind, body: &str) -> Result<ObservationSet, ChartError> {
    match kind {
        ChartKind::Rashi => parse_planets_response(body),
        ChartKind::Navamsha => parse_navamsa_response(body),
    }
}

fn demo_for(kind: ChartKind) -> ObservationSet {
    match kind {
        ChartKind::Rashi => demo_rashi_observations(),
        ChartKind::Navamsha => demo_navamsha_observations(),
    }
}

/// Observations for `kind`, falling back to the demonstration chart when
/// the input is unusable and `strict` is off.
fn load_observations(kind: ChartKind, input: Option<&Path>, demo: bool, strict: bool) -> ObservationSet {
    let path = match input {
        Some(p) if !demo => p,
        _ => return demo_for(kind),
    };
    let parsed = read_input(path).and_then(|body| parse_for(kind, &body).map_err(|e| e.to_string()));
    match parsed {
        Ok(set) => set.into_canonical_order(),
        Err(e) if strict => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            log::warn!("{e}; using demonstration data");
            demo_for(kind)
        }
    }
}

fn format_text(plan: &ChartPlan) -> String {
    let mut out = format!(
        "{} chart, Ascendant {} ({})\n",
        plan.kind.name(),
        plan.ascendant.name(),
        plan.ascendant.number()
    );
    for h in &plan.houses {
        let texts: Vec<String> = h
            .labels
            .iter()
            .map(|l| match (l.kind, l.retrograde) {
                (LabelKind::Planet, true) => format!("{} [R]", l.text),
                _ => l.text.clone(),
            })
            .collect();
        let _ = writeln!(
            out,
            "House {:>2}  {:<10} {}",
            h.house,
            h.sign.name(),
            texts.join(", ")
        );
    }
    for house in &plan.skipped_houses {
        let _ = writeln!(out, "House {house:>2}  (no geometry)");
    }
    out
}

fn format_positions(set: &ObservationSet) -> String {
    let mut out = String::new();
    for obs in set {
        let position = obs
            .degrees_in_rashi
            .map(|d| deg_to_dms(d).to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<10} {:>2} {:<12} {:<10} {:<12}{}",
            obs.point.english_name(),
            obs.rashi.number(),
            obs.rashi.western_name(),
            obs.rashi.name(),
            position,
            if obs.is_retrograde { " ℞ Retrograde" } else { "" }
        );
    }
    out
}

fn write_output(output: Option<&Path>, content: &str) {
    match output {
        Some(path) => std::fs::write(path, content).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => print!("{content}"),
    }
}

fn run_chart(kind: ChartKind, args: &ChartArgs) {
    let config = load_layout(kind, args.config.as_deref());
    let set = load_observations(kind, args.input.as_deref(), args.demo, args.strict);

    let mut surface = SvgSurface::new();
    let plan = match render_chart(&mut surface, kind, &set, &config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let content = match args.format {
        OutputFormat::Svg => match surface.to_svg() {
            Ok(svg) => svg,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        OutputFormat::Json => match serde_json::to_string_pretty(&plan) {
            Ok(json) => json + "\n",
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        OutputFormat::Text => format_text(&plan),
    };
    write_output(args.output.as_deref(), &content);
}

fn require_rashi(number: u8) -> Rashi {
    Rashi::from_number(number).unwrap_or_else(|| {
        eprintln!("Invalid sign number: {number} (1-12)");
        std::process::exit(1);
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi(args) => run_chart(ChartKind::Rashi, &args),
        Commands::Navamsha(args) => run_chart(ChartKind::Navamsha, &args),

        Commands::Positions { input, demo } => {
            let set = load_observations(ChartKind::Rashi, input.as_deref(), demo, true);
            print!("{}", format_positions(&set));
        }

        Commands::House { ascendant, sign } => {
            let asc = require_rashi(ascendant);
            let sign = require_rashi(sign);
            println!(
                "{} ({}) with {} ({}) rising: house {}",
                sign.name(),
                sign.number(),
                asc.name(),
                asc.number(),
                sign_to_house(asc, sign)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_chart::{NorthIndianLayout, plan_chart};

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chart_subcommand() {
        let cli = Cli::try_parse_from(["kundali", "navamsha", "--demo", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Navamsha(args) => {
                assert!(args.demo);
                assert!(args.format == OutputFormat::Json);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn chart_requires_input_or_demo() {
        assert!(Cli::try_parse_from(["kundali", "rashi"]).is_err());
    }

    #[test]
    fn overrides_keep_unset_preset_fields() {
        let o: LayoutOverrides = toml::from_str("empty_marker = \"house_number\"").unwrap();
        let cfg = o.apply(ChartKind::Navamsha.default_config());
        assert_eq!(cfg.empty_marker, EmptyMarker::HouseNumber);
        assert!(!cfg.show_degrees);
        assert_eq!(cfg.line_spacing, 22.0);
    }

    #[test]
    fn overrides_reject_unknown_keys() {
        assert!(toml::from_str::<LayoutOverrides>("spacing = 3").is_err());
    }

    #[test]
    fn demo_flag_wins_over_input() {
        let set = load_observations(ChartKind::Rashi, Some(Path::new("missing.json")), true, true);
        assert_eq!(set, demo_rashi_observations());
    }

    #[test]
    fn unreadable_input_falls_back_to_demo() {
        let set = load_observations(
            ChartKind::Navamsha,
            Some(Path::new("/nonexistent/kundali.json")),
            false,
            false,
        );
        assert_eq!(set, demo_navamsha_observations());
    }

    #[test]
    fn text_output_lists_every_house() {
        let set = demo_rashi_observations();
        let plan = plan_chart(ChartKind::Rashi, &set, &NorthIndianLayout, &LayoutConfig::rashi()).unwrap();
        let text = format_text(&plan);
        assert!(text.starts_with("Rashi chart, Ascendant Dhanu (9)"));
        assert_eq!(text.lines().count(), 13);
        assert!(text.contains("House  8  Karka      Su 25° (4), Ve 5°"));
        assert!(text.contains("Ju 14° (12) [R]"));
    }

    #[test]
    fn positions_table_has_dms() {
        let text = format_positions(&demo_rashi_observations());
        let sun = text.lines().find(|l| l.starts_with("Sun")).unwrap();
        assert!(sun.contains("Cancer"));
        assert!(sun.contains("24°36'28\""));
        assert!(text.lines().find(|l| l.starts_with("Jupiter")).unwrap().contains("℞"));
    }
}
