use std::sync::{mpsc, Arc};
use std::thread;

use jobsearch_core::{ApplicationTarget, Contact, Effect, JobRecord, Msg, SearchHits};
use jobsearch_engine::{
    EngineError, EngineEvent, EngineEvents, EngineHandle, GatewaySettings, JobHit, SearchOutput,
};
use search_logging::{search_error, search_info, search_warn};

use super::app::AppEvent;
use super::clipboard::Clipboard;

/// Executes core effects and feeds their outcomes back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Arc<dyn Clipboard>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        settings: GatewaySettings,
        clipboard: Arc<dyn Clipboard>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        let runner = Self {
            engine,
            clipboard,
            event_tx,
        };
        runner.spawn_event_loop(events);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Search { request_id, query } => {
                    search_info!("Search request_id={} query={:?}", request_id, query);
                    self.engine.search(request_id, query);
                }
                Effect::CopyToClipboard { email } => self.copy(email),
                Effect::ScheduleCopyAckExpiry { token, after } => {
                    let event_tx = self.event_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = event_tx.send(AppEvent::Core(Msg::CopyAckExpired { token }));
                    });
                }
            }
        }
    }

    fn copy(&self, email: String) {
        let clipboard = self.clipboard.clone();
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            let result = clipboard.copy(&email).map_err(|err| {
                search_error!("Failed to copy email: {}", err);
                err.to_string()
            });
            let _ = event_tx.send(AppEvent::Core(Msg::CopyFinished { email, result }));
        });
    }

    fn spawn_event_loop(&self, events: EngineEvents) {
        let event_tx = self.event_tx.clone();
        thread::spawn(move || {
            while let Some(event) = events.recv() {
                let msg = match event {
                    EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
                        request_id,
                        result: result.map(map_output).map_err(|err| {
                            search_warn!("Search {} failed: {}", request_id, err);
                            err.to_string()
                        }),
                    },
                };
                if event_tx.send(AppEvent::Core(msg)).is_err() {
                    break;
                }
            }
        });
    }
}

fn map_output(output: SearchOutput) -> SearchHits {
    SearchHits {
        items: output.hits.into_iter().map(map_hit).collect(),
        total_count: output.total,
    }
}

fn map_hit(hit: JobHit) -> JobRecord {
    let details = hit.application_details.clone().unwrap_or_default();
    JobRecord {
        application_target: ApplicationTarget::from_parts(
            details.url.as_deref(),
            details.email.as_deref(),
            details.other.as_deref(),
        ),
        employer_name: hit.employer_name().map(ToOwned::to_owned),
        workplace_municipality: hit.municipality().map(ToOwned::to_owned),
        contacts: hit
            .contacts()
            .iter()
            .map(|contact| Contact {
                name: contact.name.clone(),
                email: contact.email.clone(),
                telephone: contact.telephone.clone(),
            })
            .collect(),
        description_html: hit.description_html().map(ToOwned::to_owned),
        publication_date: hit.publication_date,
        headline: hit.headline.unwrap_or_default(),
        id: hit.id,
    }
}
