// src/dispatch.rs
// =============================================================================
// Launches the enabled extractors and waits for all of them.
//
// How it works:
// 1. One tokio task per enabled extractor (at most three)
// 2. Each task owns its client, body and output file; nothing is shared
//    except the read-only Config behind an Arc
// 3. Each task prints its own success line or diagnostic when it finishes
// 4. join_all waits for every task; a failed or panicked task never
//    affects the others
//
// There are no timeouts here: if one extractor hangs, the run hangs.
// =============================================================================

use std::sync::Arc;

use anyhow::{anyhow, Result};
use futures::future::join_all;

use crate::config::{Config, ExtractorKind};
use crate::extract::{self, Extraction};

/// How one extractor ended
#[derive(Debug)]
pub struct UnitOutcome {
    pub kind: ExtractorKind,
    pub result: Result<Extraction>,
}

impl UnitOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs every extractor in `config.extractors` in parallel.
/// Returns one outcome per extractor, in the configured order.
pub async fn run_all(config: Arc<Config>) -> Vec<UnitOutcome> {
    let kinds = config.extractors.clone();

    let handles = kinds.iter().map(|&kind| {
        let config = Arc::clone(&config);
        tokio::spawn(async move {
            log::info!("starting {} extractor", kind);
            let result = extract::run_extractor(kind, &config.target).await;
            report(&result);
            result
        })
    });

    let joined = join_all(handles).await;

    kinds
        .into_iter()
        .zip(joined)
        .map(|(kind, joined)| {
            let result = match joined {
                Ok(result) => result,
                Err(e) => {
                    // The task never reached report(), so print here
                    let err = anyhow!("{} extractor stopped unexpectedly: {}", kind, e);
                    println!("{}", err);
                    Err(err)
                }
            };
            UnitOutcome { kind, result }
        })
        .collect()
}

/// Prints the one-line success message or diagnostic for a finished extractor
fn report(result: &Result<Extraction>) {
    match result {
        Ok(extraction) => {
            log::info!("{} extractor wrote {} entries", extraction.kind, extraction.count);
            println!("{}", extraction);
        }
        Err(e) => println!("{:#}", e),
    }
}

/// Exit code for a finished run. Failures only count with `strict`.
pub fn exit_code(outcomes: &[UnitOutcome], strict: bool) -> i32 {
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        log::warn!("{} of {} extractor(s) failed", failed, outcomes.len());
    }

    if strict && failed > 0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Target;
    use httpmock::Method::GET;
    use httpmock::MockServer;

    fn config_for(url: String, prefix: String, extractors: Vec<ExtractorKind>) -> Arc<Config> {
        Arc::new(Config {
            target: Target::new(url, prefix),
            extractors,
            strict: false,
            verbosity: 0,
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 3)]
    async fn test_failure_does_not_affect_other_extractors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/robots.txt");
                then.status(200).body("Disallow: /secret");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sitemap.xml");
                then.status(404);
            })
            .await;
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().into_owned();
        let config = config_for(
            server.base_url(),
            prefix,
            vec![ExtractorKind::Robots, ExtractorKind::Sitemap],
        );

        let outcomes = run_all(config).await;

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].kind, ExtractorKind::Robots);
        assert!(outcomes[0].is_ok());
        assert_eq!(outcomes[1].kind, ExtractorKind::Sitemap);
        assert!(!outcomes[1].is_ok());

        let robots = std::fs::read_to_string(dir.path().join("run_robots.txt")).unwrap();
        assert_eq!(robots, format!("{}/secret\n", server.base_url()));
        assert!(!dir.path().join("run_sitemap.txt").exists());

        assert_eq!(exit_code(&outcomes, false), 0);
        assert_eq!(exit_code(&outcomes, true), 1);
    }

    #[tokio::test]
    async fn test_no_extractors_no_requests() {
        let server = MockServer::start_async().await;
        let any = server
            .mock_async(|when, then| {
                when.method(GET);
                then.status(200);
            })
            .await;
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run").to_string_lossy().into_owned();

        let outcomes = run_all(config_for(server.base_url(), prefix, Vec::new())).await;

        assert!(outcomes.is_empty());
        assert_eq!(any.hits_async().await, 0);
        assert_eq!(exit_code(&outcomes, true), 0);
    }
}
