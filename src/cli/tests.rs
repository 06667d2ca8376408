//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "asyncapi-readme-gen",
        "generate",
        "--spec",
        "asyncapi.yaml",
        "--output",
        "out",
        "--force",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            spec,
            output,
            force,
            dry_run,
        } => {
            assert_eq!(spec.to_string_lossy(), "asyncapi.yaml");
            assert_eq!(output.unwrap().to_string_lossy(), "out");
            assert!(force);
            assert!(!dry_run);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_print_command_parses() {
    let cli = Cli::try_parse_from(["asyncapi-readme-gen", "print", "--spec", "asyncapi.json"])
        .unwrap();

    match cli.command {
        Commands::Print { spec } => {
            assert_eq!(spec.to_string_lossy(), "asyncapi.json");
        }
        _ => panic!("Expected Print command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec![
            "asyncapi-readme-gen",
            "generate",
            "--spec",
            "asyncapi.yaml",
        ],
        vec![
            "asyncapi-readme-gen",
            "generate",
            "--spec",
            "asyncapi.yaml",
            "--dry-run",
        ],
        vec!["asyncapi-readme-gen", "print", "--spec", "asyncapi.yaml"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {:?}", args);
    }
}

#[test]
fn test_spec_argument_is_required() {
    assert!(Cli::try_parse_from(["asyncapi-readme-gen", "generate"]).is_err());
    assert!(Cli::try_parse_from(["asyncapi-readme-gen", "print"]).is_err());
}
