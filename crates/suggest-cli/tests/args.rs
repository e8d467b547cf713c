use clap::Parser;
use suggest_cli::args::{CliArgs, Commands};

#[test]
fn search_with_negative_longitude() {
    let args = CliArgs::try_parse_from([
        "suggest",
        "search",
        "Lond",
        "--latitude",
        "43.70011",
        "--longitude",
        "-79.4163",
        "-n",
        "3",
    ])
    .unwrap();

    match args.command {
        Commands::Search {
            query,
            latitude,
            longitude,
            limit,
            json,
        } => {
            assert_eq!(query, "Lond");
            assert_eq!(latitude.as_deref(), Some("43.70011"));
            assert_eq!(longitude.as_deref(), Some("-79.4163"));
            assert_eq!(limit, 3);
            assert!(!json);
        }
        other => panic!("parsed as {other:?}"),
    }
}

#[test]
fn search_defaults() {
    let args = CliArgs::try_parse_from(["suggest", "search", "Mont"]).unwrap();
    match args.command {
        Commands::Search {
            latitude, limit, ..
        } => {
            assert_eq!(latitude, None);
            assert_eq!(limit, 10);
        }
        other => panic!("parsed as {other:?}"),
    }
    assert_eq!(args.verbose, 0);
}

#[test]
fn global_flags_after_subcommand() {
    let args =
        CliArgs::try_parse_from(["suggest", "stats", "--input", "cities.tsv", "-vv"]).unwrap();
    assert_eq!(args.input.as_deref(), Some(std::path::Path::new("cities.tsv")));
    assert_eq!(args.verbose, 2);
    assert!(matches!(args.command, Commands::Stats));
}

#[test]
fn build_needs_an_output() {
    assert!(CliArgs::try_parse_from(["suggest", "build"]).is_err());
}
