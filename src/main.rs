use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tree_export::{to_html, Exporter, Format, ProfileParser, ProfileSet, TreeParser, DEFAULT_PROFILE};

const PROFILES_FILE: &str = "profiles.json";

fn command() -> Command {
    Command::new("tree-export")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a tree of items and collections as JSON, XML or DOT")
        .arg(
            Arg::new("input")
                .help("Tree JSON file, or - for standard input")
                .required_unless_present("list-profiles")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["json", "xml", "dot"])
                .default_value("json")
                .help("Output format"),
        )
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .default_value(DEFAULT_PROFILE)
                .help("Profile to render with; unknown names fall back to the default"),
        )
        .arg(
            Arg::new("colorized")
                .short('c')
                .long("colorized")
                .action(ArgAction::SetTrue)
                .help("Wrap fragments in colorization markers"),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .action(ArgAction::SetTrue)
                .help("Emit HTML with <span> markup (implies --colorized)"),
        )
        .arg(
            Arg::new("profiles")
                .long("profiles")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Additional profile definitions (JSON)"),
        )
        .arg(
            Arg::new("list-profiles")
                .long("list-profiles")
                .action(ArgAction::SetTrue)
                .help("Print the available profiles for every format and exit"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// An explicit --profiles wins; otherwise pick up the user's config file if
// there is one.
fn profile_path(matches: &ArgMatches) -> Option<PathBuf> {
    if let Some(path) = matches.get_one::<PathBuf>("profiles") {
        return Some(path.clone());
    }

    let candidate = dirs::config_dir()?.join("tree-export").join(PROFILES_FILE);
    if candidate.is_file() {
        debug!(path = %candidate.display(), "found user profiles");
        Some(candidate)
    } else {
        None
    }
}

fn load_profiles(path: Option<&Path>) -> Result<ProfileSet> {
    let mut profiles = ProfileSet::builtin();
    if let Some(path) = path {
        info!("Loading profiles from {}", path.display());
        let file = ProfileParser::parse_path(path)?;
        if file.is_empty() {
            warn!("No profiles defined in {}", path.display());
        }
        profiles.merge(file);
    }
    Ok(profiles)
}

fn list_profiles(profiles: &ProfileSet) {
    for format in Format::ALL {
        let names: Vec<&str> = profiles.registry(format).names().collect();
        println!("{}: {}", format, names.join(", "));
    }
}

fn main() -> Result<()> {
    let matches = command().get_matches();
    init_logging(matches.get_flag("verbose"));

    let profiles = load_profiles(profile_path(&matches).as_deref())?;

    if matches.get_flag("list-profiles") {
        list_profiles(&profiles);
        return Ok(());
    }

    let Some(input) = matches.get_one::<String>("input") else {
        anyhow::bail!("No input tree given");
    };
    let format: Format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json")
        .parse()?;
    let profile = matches
        .get_one::<String>("profile")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PROFILE);
    let html = matches.get_flag("html");
    let colorized = html || matches.get_flag("colorized");

    info!("Rendering {} as {} with profile {}", input, format, profile);
    let tree = TreeParser::parse_path(Path::new(input))?;
    let exporter = Exporter::with_profiles(tree, profiles);

    let output = exporter.render(format, profile, colorized);
    if html {
        println!("{}", to_html(&output));
    } else {
        println!("{}", output);
    }

    Ok(())
}
