use std::fmt::Write as _;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use risk_engine::error::AppError;
use risk_engine::questionnaire::{
    validate, QuestionnaireAnswer, ScoringEngine, ScoringResult, ValidationError,
};

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Path to a JSON file containing the questionnaire submission
    #[arg(long, conflicts_with = "json")]
    pub(crate) file: Option<PathBuf>,
    /// Inline JSON submission (reads stdin when neither flag is given)
    #[arg(long)]
    pub(crate) json: Option<String>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = match (args.file, args.json) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(inline)) => inline,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let payload: Value = serde_json::from_str(&raw).map_err(|err| {
        ValidationError::malformed_body(format!("submission is not valid JSON: {err}."))
    })?;

    let answer = validate(&payload)?;
    let result = ScoringEngine::new().score(&answer);

    print!("{}", render_submission(&answer));
    print!("{}", render_result(&result));
    Ok(())
}

/// Echo the validated answers with their codebook labels so the operator can
/// confirm what was scored.
fn render_submission(answer: &QuestionnaireAnswer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Submission");
    let _ = writeln!(out, "  interest       {}", answer.crypto_interest.label());
    let _ = writeln!(
        out,
        "  allocation     {}",
        answer.net_worth_allocation.label()
    );
    let _ = writeln!(out, "  horizon        {}", answer.holding_period.label());
    let _ = writeln!(
        out,
        "  crash plan     {}",
        answer.reaction_to_50pct_drop.label()
    );
    let _ = writeln!(out, "  pain threshold {}", answer.drawdown_pain.label());
    let _ = writeln!(
        out,
        "  return target  {}",
        answer.expected_annual_return.label()
    );

    if answer.themes.is_empty() {
        let _ = writeln!(out, "  themes         (none)");
    } else {
        for theme in &answer.themes {
            let _ = writeln!(out, "  theme          {}", theme.label());
        }
    }

    out
}

fn render_result(result: &ScoringResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nProfile: {} (score {}/100, confidence {:.2})",
        result.profile.label(),
        result.score,
        result.confidence
    );
    let _ = writeln!(out, "Breakdown");
    for component in &result.components {
        let _ = writeln!(
            out,
            "  {:<16}{:>3}  {}",
            component.factor.key(),
            component.points,
            component.reason
        );
    }
    out
}
