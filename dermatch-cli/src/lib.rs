//! Command-line interface for Dermatch's offline tooling.
//!
//! Two subcommands cover the library surface: `analyze` turns a
//! questionnaire answers file into a skin profile with routine advice, and
//! `recommend` ranks a JSON product catalog for a profile, a free-text
//! query, or both. Paths can come from CLI flags, configuration files, or
//! environment variables.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, io::Write, sync::Arc};
use thiserror::Error;

use dermatch_core::{MemoryProductStore, Product, ProductId, UserProfile};
use dermatch_recommend::{RecommendError, RecommendationRequest, Recommender};
use dermatch_scorer::{ProfileAnalyzer, RawAnswers, care_advice, usage_timeline};

const ARG_ANSWERS: &str = "answers";
const ARG_CATALOG: &str = "catalog";
const ENV_ANALYZE_ANSWERS: &str = "DERMATCH_CMDS_ANALYZE_ANSWERS";
const ENV_RECOMMEND_CATALOG: &str = "DERMATCH_CMDS_RECOMMEND_CATALOG";

/// Run the Dermatch CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => emit(&run_analyze(args)?),
        Command::Recommend(args) => emit(&run_recommend(args)?),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<AnalyzeReport, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    config.execute()
}

fn run_recommend(args: RecommendArgs) -> Result<Vec<MatchRow>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    config.execute()
}

fn emit<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    handle.write_all(b"\n")?;
    Ok(())
}

fn read_json<T>(path: &Utf8Path) -> Result<T, CliError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseInput {
        path: path.to_owned(),
        source,
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "dermatch",
    about = "Offline skin profiling and product ranking utilities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify questionnaire answers into a skin profile.
    Analyze(AnalyzeArgs),
    /// Rank a product catalog for a profile and/or a search query.
    Recommend(RecommendArgs),
}

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Classify questionnaire answers into a skin profile")]
#[ortho_config(prefix = "DERMATCH")]
struct AnalyzeArgs {
    /// Path to the questionnaire answers file (JSON).
    #[arg(long = ARG_ANSWERS, value_name = "path")]
    #[serde(default)]
    answers: Option<Utf8PathBuf>,
}

impl AnalyzeArgs {
    fn into_config(self) -> Result<AnalyzeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AnalyzeConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AnalyzeConfig {
    answers: Utf8PathBuf,
}

impl AnalyzeConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.answers, ARG_ANSWERS)
    }

    fn execute(&self) -> Result<AnalyzeReport, CliError> {
        let answers: RawAnswers = read_json(&self.answers)?;
        let profile = ProfileAnalyzer.analyze(&answers);
        let advice = care_advice(&profile);
        Ok(AnalyzeReport { profile, advice })
    }
}

impl TryFrom<AnalyzeArgs> for AnalyzeConfig {
    type Error = CliError;

    fn try_from(args: AnalyzeArgs) -> Result<Self, Self::Error> {
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_ANALYZE_ANSWERS,
        })?;
        Ok(Self { answers })
    }
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Rank a product catalog for a profile and/or a search query")]
#[ortho_config(prefix = "DERMATCH")]
struct RecommendArgs {
    /// Path to the product catalog file (JSON array).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    catalog: Option<Utf8PathBuf>,
    /// Optional questionnaire answers file used to derive a profile.
    #[arg(long = ARG_ANSWERS, value_name = "path")]
    #[serde(default)]
    answers: Option<Utf8PathBuf>,
    /// Optional free-text search query.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    query: Option<String>,
    /// Maximum number of results to report.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    limit: Option<usize>,
    /// Keep zero-score products in the report.
    #[arg(long)]
    #[serde(default)]
    include_unscored: bool,
}

impl RecommendArgs {
    fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RecommendConfig {
    catalog: Utf8PathBuf,
    answers: Option<Utf8PathBuf>,
    query: Option<String>,
    limit: Option<usize>,
    include_unscored: bool,
}

impl RecommendConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(answers) = &self.answers {
            require_existing(answers, ARG_ANSWERS)?;
        }
        Ok(())
    }

    fn execute(&self) -> Result<Vec<MatchRow>, CliError> {
        let products: Vec<Product> = read_json(&self.catalog)?;
        let request = self.build_request()?;
        let recommender =
            Recommender::new(MemoryProductStore::with_products(products.iter().cloned()));
        let ranked = recommender.recommend(&request)?;

        let by_id: HashMap<&str, &Product> =
            products.iter().map(|p| (p.id.as_str(), p)).collect();
        Ok(ranked
            .into_iter()
            .map(|entry| {
                let product = by_id.get(entry.product_id.as_str()).copied();
                MatchRow {
                    name: product.map(|p| p.name.clone()).unwrap_or_default(),
                    usage_timeline: product.map(usage_timeline).unwrap_or_default(),
                    id: entry.product_id,
                    score: entry.score,
                    reasons: entry.reasons,
                    predicted_results: entry.predicted_results,
                }
            })
            .collect())
    }

    fn build_request(&self) -> Result<RecommendationRequest, CliError> {
        let mut request = RecommendationRequest::new();
        if let Some(path) = &self.answers {
            let answers: RawAnswers = read_json(path)?;
            request = request.with_profile(ProfileAnalyzer.analyze(&answers));
        }
        if let Some(query) = &self.query {
            request = request.with_query(query.as_str());
        }
        if let Some(limit) = self.limit {
            request = request.with_limit(limit);
        }
        if self.include_unscored {
            request = request.with_unscored();
        }
        Ok(request)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        Ok(Self {
            catalog,
            answers: args.answers,
            query: args.query,
            limit: args.limit,
            include_unscored: args.include_unscored,
        })
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_owned(),
        })
    }
}

/// Report emitted by the `analyze` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeReport {
    /// Finalised skin profile.
    pub profile: UserProfile,
    /// Routine guidance derived from the profile.
    pub advice: Vec<String>,
}

/// One ranked catalog entry in the `recommend` report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    /// Catalog identifier of the matched product.
    pub id: ProductId,
    /// Display name looked up from the catalog.
    pub name: String,
    /// Final match score on the 0-100 scale.
    pub score: f32,
    /// Human-readable match explanations.
    pub reasons: Vec<String>,
    /// Expected outcomes for the matched product.
    pub predicted_results: Vec<String>,
    /// Usage cadence guidance for the matched product.
    pub usage_timeline: String,
}

/// Errors emitted by the Dermatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// An input file could not be read.
    #[error("failed to read {path}")]
    ReadInput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An input file contained malformed JSON.
    #[error("failed to parse {path}")]
    ParseInput {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The ranking run itself failed.
    #[error(transparent)]
    Recommendation(#[from] RecommendError),
    /// The report could not be serialised.
    #[error("failed to write report")]
    WriteReport(#[from] serde_json::Error),
    /// The report could not be flushed to stdout.
    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
