//! Mle command: fit a line to generated data.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use nearfit_mle::{fit_line, generate_data};

use crate::cli::MleArgs;
use crate::config::NearfitConfig;

/// Run the line-fit demonstration.
pub fn run(args: MleArgs, config: &NearfitConfig) -> Result<()> {
    let _cmd = info_span!("mle").entered();
    let n = args.n.unwrap_or(config.mle.n);
    let seed = args.seed.unwrap_or(config.mle.seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let sample = generate_data(n, &mut rng);
    info!(n, seed, "generated data");

    let fit = fit_line(&sample.x, &sample.y).context("line fit failed")?;
    let variance = fit.residual_variance(&sample.x, &sample.y);
    let log_likelihood = fit.log_likelihood(&sample.x, &sample.y);

    println!("intercept: {:.6}", fit.intercept());
    println!("slope: {:.6}", fit.slope());
    println!("variance of error: {variance:.6}");
    println!("log-likelihood: {log_likelihood:.6}");
    Ok(())
}
