use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use pacsite_engine::{
    BuildOptions, DEFAULT_MASTER_NAME, build_site, load_site_config, render_applet_script,
    render_nav_bar,
};
use pacsite_types::SiteConfig;
use pacsite_util::current_page;
use tracing::debug;

/// Environment variable naming a default site config file.
const CONFIG_PATH_ENV: &str = "PACSITE_CONFIG";

fn main() -> Result<()> {
    init_tracing();
    let matches = build_cli().get_matches();
    let (command, sub) = matches
        .subcommand()
        .context("expected a subcommand: nav, applet or build")?;
    let site = resolve_site_config(sub)?;

    match command {
        "nav" => {
            let page = sub.get_one::<String>("page").context("missing page argument")?;
            println!("{}", render_nav_bar(&site.navbar, current_page(page)));
        }
        "applet" => {
            let script = render_applet_script(
                &site.applet,
                sub.get_flag("debug-times"),
                sub.get_flag("with-loader"),
            );
            println!("{script}");
        }
        "build" => run_build(&site, sub)?,
        other => anyhow::bail!("unknown subcommand: {other}"),
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_cli() -> Command {
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .global(true)
        .action(ArgAction::Set)
        .help(
            "Site config file (YAML or JSON); defaults to $PACSITE_CONFIG, \
             then the built-in Pac Defence site",
        );

    Command::new("pacsite")
        .about("Pac Defence website helper")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(config_arg)
        .subcommand(
            Command::new("nav")
                .about("Print the navigation bar for a page")
                .arg(
                    Arg::new("page")
                        .required(true)
                        .action(ArgAction::Set)
                        .help("Page address or file name; only the text after the last '/' counts"),
                ),
        )
        .subcommand(
            Command::new("applet")
                .about("Print the script that launches the applet")
                .arg(
                    Arg::new("debug-times")
                        .long("debug-times")
                        .action(ArgAction::SetTrue)
                        .help("Launch the applet with DebugTimes enabled"),
                )
                .arg(
                    Arg::new("with-loader")
                        .long("with-loader")
                        .action(ArgAction::SetTrue)
                        .help("Prepend the deployJava.js loader tag"),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Generate x.html from master.html and every x.part.html")
                .arg(
                    Arg::new("dir")
                        .action(ArgAction::Set)
                        .default_value(".")
                        .help("Directory holding the templates"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .action(ArgAction::Set)
                        .help("Write pages here instead of the template directory"),
                )
                .arg(
                    Arg::new("master")
                        .long("master")
                        .action(ArgAction::Set)
                        .default_value(DEFAULT_MASTER_NAME)
                        .help("File name of the shared master page"),
                ),
        )
}

fn resolve_site_config(matches: &ArgMatches) -> Result<SiteConfig> {
    let path = matches
        .get_one::<String>("config")
        .cloned()
        .or_else(|| {
            std::env::var(CONFIG_PATH_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
        });

    match path {
        Some(path) => {
            debug!(path = %path, "loading site config");
            load_site_config(&path)
                .with_context(|| format!("failed to load site config from {path}"))
        }
        None => Ok(SiteConfig::pac_defence()),
    }
}

fn run_build(site: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    let options = build_options(matches)?;
    let report = build_site(&options, site).with_context(|| {
        format!("failed to build site in {}", options.source_dir.display())
    })?;
    for path in &report.written {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        println!("Wrote {name}");
    }
    Ok(())
}

fn build_options(matches: &ArgMatches) -> Result<BuildOptions> {
    let dir = matches.get_one::<String>("dir").context("missing template directory")?;
    let master = matches.get_one::<String>("master").context("missing master name")?;
    let mut options = BuildOptions::new(PathBuf::from(dir)).with_master_name(master.clone());
    if let Some(out) = matches.get_one::<String>("out") {
        options = options.with_output_dir(out);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn nav_requires_a_page() {
        let result = build_cli().try_get_matches_from(["pacsite", "nav"]);
        assert!(result.is_err());
    }

    #[test]
    fn build_defaults_to_current_dir_and_master_html() {
        let matches = build_cli()
            .try_get_matches_from(["pacsite", "build"])
            .expect("parse args");
        let (_, sub) = matches.subcommand().expect("build subcommand");
        let options = build_options(sub).expect("build options");
        assert_eq!(options.source_dir, PathBuf::from("."));
        assert_eq!(options.master_name, "master.html");
        assert!(options.output_dir.is_none());
    }

    #[test]
    fn build_accepts_out_and_master() {
        let matches = build_cli()
            .try_get_matches_from([
                "pacsite", "build", "website", "--out", "public", "--master", "base.html",
            ])
            .expect("parse args");
        let (_, sub) = matches.subcommand().expect("build subcommand");
        let options = build_options(sub).expect("build options");
        assert_eq!(options.source_dir, PathBuf::from("website"));
        assert_eq!(options.output_dir, Some(PathBuf::from("public")));
        assert_eq!(options.master_name, "base.html");
    }

    fn write_config(dir: &std::path::Path, label: &str) -> PathBuf {
        let config_path = dir.join(format!("{label}.yaml"));
        let content = format!("navbar:\n  entries:\n    - {{ path: home.html, label: {label} }}\n");
        std::fs::write(&config_path, content).unwrap();
        config_path
    }

    fn nav_matches(extra: &[&str]) -> ArgMatches {
        let args = ["pacsite", "nav", "home.html"].iter().chain(extra).copied();
        build_cli().try_get_matches_from(args).expect("parse args")
    }

    fn resolve(matches: &ArgMatches) -> Result<SiteConfig> {
        let (_, sub) = matches.subcommand().expect("subcommand");
        resolve_site_config(sub)
    }

    #[test]
    fn config_flag_loads_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), "Home");

        let matches = nav_matches(&["--config", config_path.to_str().unwrap()]);
        let site = resolve(&matches).expect("load config");
        assert_eq!(site.navbar.entries()[0].label, "Home");
    }

    #[test]
    fn config_env_var_loads_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = write_config(temp_dir.path(), "FromEnv");

        temp_env::with_var(CONFIG_PATH_ENV, Some(&config_path), || {
            let site = resolve(&nav_matches(&[])).expect("load config");
            assert_eq!(site.navbar.entries()[0].label, "FromEnv");
        });
    }

    #[test]
    fn blank_config_env_var_falls_back_to_built_in_site() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
            let site = resolve(&nav_matches(&[])).expect("built-in config");
            assert_eq!(site, SiteConfig::pac_defence());
        });
    }

    #[test]
    fn missing_config_env_var_uses_built_in_site() {
        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let site = resolve(&nav_matches(&[])).expect("built-in config");
            assert_eq!(site, SiteConfig::pac_defence());
        });
    }

    #[test]
    fn config_flag_takes_precedence_over_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let env_path = write_config(temp_dir.path(), "FromEnv");
        let flag_path = write_config(temp_dir.path(), "FromFlag");

        temp_env::with_var(CONFIG_PATH_ENV, Some(&env_path), || {
            let matches = nav_matches(&["-c", flag_path.to_str().unwrap()]);
            let site = resolve(&matches).expect("load config");
            assert_eq!(site.navbar.entries()[0].label, "FromFlag");
        });
    }

    #[test]
    fn invalid_config_is_reported_with_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("site.yaml");
        std::fs::write(&config_path, "navbar:\n  entries: []\n").unwrap();

        let matches = build_cli()
            .try_get_matches_from(["pacsite", "applet", "-c", config_path.to_str().unwrap()])
            .expect("parse args");
        let err = resolve(&matches).unwrap_err();
        assert!(format!("{err:#}").contains("at least one entry"), "{err:#}");
    }
}
