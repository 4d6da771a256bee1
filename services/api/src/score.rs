use crate::infra::file_backed_service;
use clap::{Args, ValueEnum};
use pattern_scoring::assessments::learning::Algorithm;
use pattern_scoring::assessments::{
    AssessmentReceipt, AssessmentRequest, AssessmentService, InMemoryResultStore,
    ResultRepository,
};
use pattern_scoring::config::AppConfig;
use pattern_scoring::error::AppError;
use pattern_scoring::telemetry::{self, LogTarget};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AlgorithmArg {
    Basic,
    Weighted,
    Advanced,
    Cognitive,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON request document: `{ "answers": [...], "behaviorData": {...}, ... }`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Scoring variant; overrides any `algorithm` field in the document
    #[arg(long, value_enum)]
    pub(crate) algorithm: Option<AlgorithmArg>,
    /// Store the result (and profile, when a userId is given) in the data directory
    #[arg(long)]
    pub(crate) persist: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogTarget::Stderr)?;

    let receipt = if args.persist {
        score_file(&file_backed_service(&config)?, &args.input, args.algorithm)?
    } else {
        let service = AssessmentService::new(
            Arc::new(InMemoryResultStore::with_history_limit(
                config.storage.history_limit,
            )),
            config.scoring.default_algorithm,
        );
        score_file(&service, &args.input, args.algorithm)?
    };

    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

pub(crate) fn score_file<R>(
    service: &AssessmentService<R>,
    input: &Path,
    algorithm: Option<AlgorithmArg>,
) -> Result<AssessmentReceipt, AppError>
where
    R: ResultRepository + 'static,
{
    let raw = fs::read(input)?;
    let mut request: AssessmentRequest = serde_json::from_slice(&raw)?;

    let receipt = match algorithm {
        Some(AlgorithmArg::Cognitive) => service.submit_cognitive(request)?,
        Some(other) => {
            request.algorithm = Some(learning_algorithm(other).as_str().to_string());
            service.submit_learning_style(request)?
        }
        None if request
            .algorithm
            .as_deref()
            .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("cognitive")) =>
        {
            service.submit_cognitive(request)?
        }
        None => service.submit_learning_style(request)?,
    };
    Ok(receipt)
}

fn learning_algorithm(arg: AlgorithmArg) -> Algorithm {
    match arg {
        AlgorithmArg::Basic => Algorithm::Basic,
        AlgorithmArg::Advanced => Algorithm::Advanced,
        AlgorithmArg::Weighted | AlgorithmArg::Cognitive => Algorithm::Weighted,
    }
}
