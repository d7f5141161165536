//! Form controller for the roadmap generator.
//!
//! Holds the form's in-memory state and drives one handler call per
//! submission. Each submission takes a generation token; a response that
//! arrives after a newer submission has started is discarded, so the state
//! always reflects the most recent request.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::api::{RoadmapApi, RoadmapReply, RoadmapRequest};
use crate::notice::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub topic: String,
    pub current_knowledge: String,
    pub roadmap: Option<String>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Completed(Notice),
    /// A newer submission started before this one resolved.
    Superseded,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            SubmitOutcome::Completed(notice) => Some(notice),
            SubmitOutcome::Superseded => None,
        }
    }
}

pub struct FormController<A> {
    api: A,
    state: RwLock<FormState>,
    generation: AtomicU64,
}

impl<A: RoadmapApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(FormState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn set_topic(&self, topic: impl Into<String>) {
        self.state.write().await.topic = topic.into();
    }

    pub async fn set_current_knowledge(&self, knowledge: impl Into<String>) {
        self.state.write().await.current_knowledge = knowledge.into();
    }

    pub async fn state(&self) -> FormState {
        self.state.read().await.clone()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (request, token) = {
            let mut state = self.state.write().await;

            if state.topic.trim().is_empty() {
                log::debug!("Submit rejected: empty topic");
                return SubmitOutcome::Completed(Notice::topic_required());
            }

            state.is_loading = true;
            state.roadmap = None;
            let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

            let request = RoadmapRequest {
                topic: state.topic.clone(),
                current_knowledge: state.current_knowledge.clone(),
            };
            (request, token)
        };

        log::debug!("Submitting roadmap request #{} for '{}'", token, request.topic);
        let result = self.api.generate(&request).await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != token {
            log::debug!("Discarding stale response for request #{}", token);
            return SubmitOutcome::Superseded;
        }

        state.is_loading = false;

        let notice = match result {
            Ok(RoadmapReply::Roadmap(roadmap)) => {
                state.roadmap = Some(roadmap);
                Notice::roadmap_ready()
            }
            Ok(RoadmapReply::Rejected(message)) => Notice::failure(message),
            Err(e) => {
                log::error!("Error generating roadmap: {}", e);
                Notice::generic_failure()
            }
        };

        SubmitOutcome::Completed(notice)
    }
}
