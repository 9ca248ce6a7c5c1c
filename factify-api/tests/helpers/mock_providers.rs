//! Scripted provider implementations for router-level tests

use async_trait::async_trait;
use factify_api::models::{Source, VerdictStatus};
use factify_api::providers::{
    AiAssessment, AnalysisProvider, FactCheckProvider, FactCheckReport, ProviderError,
    ProviderSet, SourceDiscovery,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Number of adapter calls across a provider set
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub enum Script<T> {
    Reply(Result<T, ProviderError>),
    Panic(&'static str),
}

impl<T: Clone> Script<T> {
    fn run(&self) -> Result<T, ProviderError> {
        match self {
            Script::Reply(result) => result.clone(),
            Script::Panic(msg) => panic!("{}", msg),
        }
    }
}

pub struct ScriptedAnalysis {
    pub script: Script<AiAssessment>,
    pub calls: CallCounter,
}

#[async_trait]
impl AnalysisProvider for ScriptedAnalysis {
    fn name(&self) -> &'static str {
        "ScriptedAI"
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(1)
    }

    async fn analyze(&self, _text: &str, _context: Option<&str>) -> Result<AiAssessment, ProviderError> {
        self.calls.hit();
        self.script.run()
    }
}

pub struct ScriptedDatabase {
    pub script: Script<FactCheckReport>,
    pub calls: CallCounter,
}

#[async_trait]
impl FactCheckProvider for ScriptedDatabase {
    fn name(&self) -> &'static str {
        "ScriptedDatabase"
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(1)
    }

    async fn search(&self, _text: &str) -> Result<FactCheckReport, ProviderError> {
        self.calls.hit();
        self.script.run()
    }
}

pub struct ScriptedDiscovery {
    pub script: Script<Vec<Source>>,
    pub calls: CallCounter,
}

#[async_trait]
impl SourceDiscovery for ScriptedDiscovery {
    fn name(&self) -> &'static str {
        "ScriptedDiscovery"
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(1)
    }

    async fn discover(&self, _text: &str, _limit: usize) -> Result<Vec<Source>, ProviderError> {
        self.calls.hit();
        self.script.run()
    }
}

pub fn assessment(status: VerdictStatus, text: &str) -> AiAssessment {
    AiAssessment {
        status,
        confidence: 0.7,
        assessment: text.to_string(),
        key_claims: vec![],
        red_flags: vec![],
        verification_suggestions: vec![],
        reasoning: None,
    }
}

pub fn source(title: &str, score: Option<f64>) -> Source {
    Source {
        title: title.to_string(),
        url: format!("https://{}.example/", title.to_lowercase()),
        credibility_score: score,
    }
}

/// Provider set from one script per slot, sharing a call counter
pub fn scripted_set(
    analysis: Script<AiAssessment>,
    databases: Vec<Script<FactCheckReport>>,
    discovery: Script<Vec<Source>>,
) -> (ProviderSet, CallCounter) {
    let calls = CallCounter::default();
    let set = ProviderSet {
        analysis: Arc::new(ScriptedAnalysis {
            script: analysis,
            calls: calls.clone(),
        }),
        fact_checkers: databases
            .into_iter()
            .map(|script| {
                Arc::new(ScriptedDatabase {
                    script,
                    calls: calls.clone(),
                }) as Arc<dyn FactCheckProvider>
            })
            .collect(),
        discovery: Arc::new(ScriptedDiscovery {
            script: discovery,
            calls: calls.clone(),
        }),
    };
    (set, calls)
}

/// Every slot fails
pub fn failing_set() -> (ProviderSet, CallCounter) {
    scripted_set(
        Script::Reply(Err(ProviderError::NotConfigured)),
        vec![
            Script::Reply(Err(ProviderError::Status(503))),
            Script::Reply(Err(ProviderError::NotImplemented)),
        ],
        Script::Reply(Err(ProviderError::Timeout(Duration::from_secs(1)))),
    )
}
