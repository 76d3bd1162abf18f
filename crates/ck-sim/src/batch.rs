//! Independent replications of the same scenario.
//!
//! Each run owns its floor, queue, statistics and random source, so runs
//! share nothing and may execute on separate threads.  With the `parallel`
//! feature the configurations are spread over Rayon's thread pool; results
//! always come back in input order.

use ck_core::{CheckoutConfig, SimRandom};

use crate::{NoopObserver, SimBuilder, SimResult, Summary};

/// Run one simulation per configuration with a [`SimRandom`] seeded from
/// each config's `seed`.
pub fn run_batch(configs: &[CheckoutConfig]) -> Vec<SimResult<Summary>> {
    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(run_one).collect()
    }
}

/// One copy of `base` per seed.
pub fn with_seeds(base: &CheckoutConfig, seeds: impl IntoIterator<Item = u64>) -> Vec<CheckoutConfig> {
    seeds
        .into_iter()
        .map(|seed| CheckoutConfig { seed, ..base.clone() })
        .collect()
}

fn run_one(config: &CheckoutConfig) -> SimResult<Summary> {
    let rng = SimRandom::from_config(config)?;
    let mut sim = SimBuilder::new(config.clone(), rng).build()?;
    sim.run(&mut NoopObserver)
}
