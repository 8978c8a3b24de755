// ABOUTME: Sequential runner executing scenarios in ascending rank order
// ABOUTME: Builds a fresh session before each scenario and tears it down afterwards

use std::collections::BTreeSet;
use std::time::Instant;

use ideacenter_client::{Config, CredentialResolver, Credentials, SessionFactory};
use tracing::{error, info, warn};

use crate::context::SuiteContext;
use crate::error::{SuiteError, SuiteResult};
use crate::report::{ScenarioOutcome, SuiteReport};
use crate::scenario::Scenario;
use crate::scenarios::default_sequence;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Restrict the run to these ranks; `None` runs everything
    pub only: Option<BTreeSet<u32>>,
    /// Stop after the first failure and mark the rest as skipped
    pub fail_fast: bool,
}

pub struct SuiteRunner {
    scenarios: Vec<Box<dyn Scenario>>,
    options: RunOptions,
}

impl SuiteRunner {
    /// Sort scenarios by rank. Duplicate ranks are rejected.
    pub fn new(mut scenarios: Vec<Box<dyn Scenario>>) -> SuiteResult<Self> {
        scenarios.sort_by_key(|s| s.rank());

        for pair in scenarios.windows(2) {
            if pair[0].rank() == pair[1].rank() {
                return Err(SuiteError::DuplicateRank {
                    rank: pair[0].rank(),
                    first: pair[0].name(),
                    second: pair[1].name(),
                });
            }
        }

        Ok(Self {
            scenarios,
            options: RunOptions::default(),
        })
    }

    /// Runner over the built-in sequence
    pub fn with_default_sequence() -> SuiteResult<Self> {
        Self::new(default_sequence())
    }

    pub fn with_options(mut self, options: RunOptions) -> SuiteResult<Self> {
        if let Some(only) = &options.only {
            for rank in only {
                if !self.scenarios.iter().any(|s| s.rank() == *rank) {
                    return Err(SuiteError::UnknownRank(*rank));
                }
            }
        }
        self.options = options;
        Ok(self)
    }

    /// Scenarios in execution order
    pub fn scenarios(&self) -> impl Iterator<Item = &dyn Scenario> {
        self.scenarios.iter().map(|s| &**s)
    }

    fn is_selected(&self, rank: u32) -> bool {
        self.options
            .only
            .as_ref()
            .map_or(true, |only| only.contains(&rank))
    }

    /// Resolve credentials once, then run every selected scenario.
    ///
    /// A credential failure aborts before any scenario runs.
    pub async fn run_with_config(&self, config: &Config) -> SuiteResult<SuiteReport> {
        let token = resolve_token(config, &config.credentials()).await?;
        let factory = SessionFactory::from_config(config, token);
        Ok(self.run(&factory).await)
    }

    /// Run the selected scenarios strictly in rank order
    pub async fn run(&self, factory: &SessionFactory) -> SuiteReport {
        let mut ctx = SuiteContext::new();
        let mut report = SuiteReport::default();
        let mut halted = false;

        for scenario in self.scenarios().filter(|s| self.is_selected(s.rank())) {
            let (rank, name) = (scenario.rank(), scenario.name());

            if halted {
                report.push(ScenarioOutcome::skipped(rank, name));
                continue;
            }

            info!("[{}] {} - starting", rank, name);
            let started = Instant::now();

            let result = match factory.create() {
                Ok(session) => {
                    let result = scenario.run(&session, &mut ctx).await;
                    session.close();
                    if factory.open_sessions() > 0 {
                        warn!("[{}] {} - session still open after teardown", rank, name);
                    }
                    result
                }
                Err(e) => Err(e.into()),
            };

            let elapsed = started.elapsed();
            match result {
                Ok(()) => {
                    info!("[{}] {} - passed in {:?}", rank, name, elapsed);
                    report.push(ScenarioOutcome::passed(rank, name, elapsed));
                }
                Err(e) => {
                    if e.is_missing_prerequisite() {
                        warn!("[{}] {} - not attempted: {}", rank, name, e);
                    } else {
                        error!("[{}] {} - failed: {}", rank, name, e);
                    }
                    report.push(ScenarioOutcome::failed(rank, name, e.to_string(), elapsed));
                    if self.options.fail_fast {
                        warn!("Fail-fast enabled; skipping remaining scenarios");
                        halted = true;
                    }
                }
            }
        }

        info!(
            "Run finished: {} passed, {} failed, {} skipped",
            report.passed(),
            report.failed(),
            report.skipped()
        );
        report
    }
}

/// Resolve the bearer token for `config`
pub async fn resolve_token(config: &Config, credentials: &Credentials) -> SuiteResult<String> {
    let resolver = CredentialResolver::from_config(config)?;
    Ok(resolver.resolve(credentials).await?)
}
