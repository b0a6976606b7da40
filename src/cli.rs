use clap::Parser;
use std::path::PathBuf;

/// Generate SystemVerilog interfaces from plain-text port lists
#[derive(Parser, Debug)]
#[command(name = "sv-ifgen")]
#[command(version)]
#[command(
    about = "Generate SystemVerilog interfaces with clocking blocks and modports from plain-text port lists",
    long_about = None
)]
pub struct Args {
    /// Path to the port description (one declaration per line, e.g. `logic [7:0] data; o`)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub input: Option<PathBuf>,

    /// Path to a YAML config file (defaults to ./sv-ifgen.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the generated .sv file is written into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Use the configured block names and skews without asking
    #[arg(short = 'y', long)]
    pub defaults: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "sv-ifgen",
            "-i",
            "ports.txt",
            "-c",
            "custom.yml",
            "-o",
            "out",
            "-y",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("ports.txt")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.defaults);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = Args::try_parse_from([
            "sv-ifgen",
            "--input",
            "ports.txt",
            "--output-dir",
            "gen",
            "--defaults",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("ports.txt")));
        assert_eq!(args.output_dir, PathBuf::from("gen"));
        assert!(args.defaults);
    }

    #[test]
    fn test_input_is_optional_for_the_parser() {
        let args = Args::try_parse_from(["sv-ifgen"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.defaults);
    }

    #[test]
    fn test_bare_input_flag_has_no_value() {
        let args = Args::try_parse_from(["sv-ifgen", "-i"]).unwrap();
        assert!(args.input.is_none());

        let args = Args::try_parse_from(["sv-ifgen", "-y", "--input"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.defaults);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["sv-ifgen", "--format", "json"]).is_err());
    }
}
