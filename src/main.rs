use anyhow::{bail, Context};
use clap::{Args as ClapArgs, Parser, Subcommand};
use fuzzyrank::{Error, MethodRegistry, Scorer, SearchConfig, SearchOptions};
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank candidate strings against a query with weighted fuzzy matching
#[derive(Parser, Debug)]
#[command(name = "fuzzyrank")]
#[command(about = "Weighted fuzzy string ranking", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank candidates read from a file or stdin
    Search {
        /// Search term
        query: String,

        /// JSON array of strings/objects, or one candidate per line (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Score a single candidate against the query
    Score {
        /// Search term
        query: String,

        /// Candidate text
        candidate: String,

        /// Print the per-method breakdown
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct OptionArgs {
    /// JSON options file (results, minScore, caseSensitive, labelField, methods)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of results, 0 for all
    #[arg(short, long)]
    results: Option<usize>,

    /// Minimum score a result must reach
    #[arg(long)]
    min_score: Option<f64>,

    /// Match case exactly
    #[arg(long)]
    case_sensitive: bool,

    /// Attribute of object candidates holding the searchable text
    #[arg(long)]
    label_field: Option<String>,

    /// Method as NAME or NAME:WEIGHT, repeatable (replaces the configured methods)
    #[arg(short, long = "method")]
    methods: Vec<String>,
}

impl OptionArgs {
    fn into_config(self) -> anyhow::Result<SearchConfig> {
        let mut options = match &self.config {
            Some(path) => SearchOptions::from_file(path)
                .with_context(|| format!("failed to load options from {:?}", path))?,
            None => SearchOptions::default(),
        };

        if self.results.is_some() {
            options.results = self.results;
        }
        if self.min_score.is_some() {
            options.min_score = self.min_score;
        }
        if self.case_sensitive {
            options.case_sensitive = Some(true);
        }
        if self.label_field.is_some() {
            options.label_field = self.label_field;
        }
        if !self.methods.is_empty() {
            let methods = self
                .methods
                .iter()
                .map(|spec| parse_method_spec(spec.as_str()))
                .collect::<anyhow::Result<Vec<_>>>()?;
            options.methods = Some(methods);
        }

        Ok(options.into_config(&MethodRegistry::new())?)
    }
}

/// `NAME` or `NAME:WEIGHT` to a JSON method entry
fn parse_method_spec(spec: &str) -> anyhow::Result<Value> {
    match spec.split_once(':') {
        None => Ok(json!(spec)),
        Some((name, weight)) => {
            let weight: f64 = weight
                .parse()
                .with_context(|| format!("invalid weight in method '{}'", spec))?;
            if name.is_empty() {
                bail!("missing method name in '{}'", spec);
            }
            // JSON has no NaN or infinity, so reject before building the entry
            if !weight.is_finite() {
                return Err(Error::InvalidWeight {
                    method: name.to_string(),
                    weight,
                }
                .into());
            }
            Ok(json!({ "name": name, "weight": weight }))
        }
    }
}

/// JSON array input, or one candidate per non-empty line
fn parse_candidates(raw: &str) -> anyhow::Result<Vec<Value>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        let candidates: Vec<Value> =
            serde_json::from_str(trimmed).context("input is not a valid JSON array")?;
        return Ok(candidates);
    }

    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect())
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Search {
            query,
            input,
            options,
        } => {
            let config = options.into_config()?;
            let raw = read_input(input.as_ref())?;
            let candidates = parse_candidates(&raw)?;
            info!("Loaded {} candidates", candidates.len());
            debug!("Methods: {:?}", config.methods());

            let results = Scorer::new(config).search(&query, &candidates)?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Score {
            query,
            candidate,
            explain,
            options,
        } => {
            let scorer = Scorer::new(options.into_config()?);
            if explain {
                let breakdown = scorer.explain(&query, &candidate);
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                println!("{}", scorer.score(&query, &candidate));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_spec() {
        assert_eq!(parse_method_spec("jaccard").unwrap(), json!("jaccard"));
        assert_eq!(
            parse_method_spec("jaro-winkler:1.5").unwrap(),
            json!({"name": "jaro-winkler", "weight": 1.5})
        );
        assert!(parse_method_spec("jaccard:heavy").is_err());
        assert!(parse_method_spec(":2").is_err());
    }

    #[test]
    fn test_parse_method_spec_non_finite_weight() {
        for spec in ["jaccard:NaN", "jaccard:inf", "jaro-winkler:-inf"] {
            let err = parse_method_spec(spec).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<Error>(), Some(Error::InvalidWeight { .. })),
                "{} was accepted",
                spec
            );
        }

        let args = OptionArgs {
            config: None,
            results: None,
            min_score: None,
            case_sensitive: false,
            label_field: None,
            methods: vec!["jaccard:NaN".to_string()],
        };
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_option_args_nan_min_score() {
        let args = OptionArgs {
            config: None,
            results: None,
            min_score: Some(f64::NAN),
            case_sensitive: false,
            label_field: None,
            methods: Vec::new(),
        };
        let err = args.into_config().unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidMinScore(_))));
    }

    #[test]
    fn test_parse_candidates_lines() {
        let candidates = parse_candidates("Identical\n\nDental\n  \ndentist\n").unwrap();
        assert_eq!(candidates, vec![json!("Identical"), json!("Dental"), json!("dentist")]);
    }

    #[test]
    fn test_parse_candidates_json() {
        let candidates =
            parse_candidates(r#"  [{"label": "Mars Bar", "id": "mars"}, "Chocolate"]"#).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1], json!("Chocolate"));

        assert!(parse_candidates("[not json").is_err());
    }

    #[test]
    fn test_option_args_override_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"results": 5, "labelField": "name"}"#).unwrap();

        let args = OptionArgs {
            config: Some(file.path().to_path_buf()),
            results: Some(2),
            min_score: None,
            case_sensitive: true,
            label_field: None,
            methods: vec!["jaccard:2".to_string()],
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.result_limit(), 2);
        assert_eq!(config.label_field(), "name");
        assert!(config.case_sensitive());
        assert_eq!(config.methods().len(), 1);
        assert_eq!(config.methods()[0].weight(), 2.0);
    }
}
