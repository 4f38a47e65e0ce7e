//! Assist panel: simulated lookups, suggested replies and resources

use std::time::Duration;

use tracing::debug;

use crate::config::Timings;
use crate::input_utils::TextInput;

use super::effect::{Effect, TaskId, Timer};

/// Questions offered before anything was asked
pub const SUGGESTED_QUESTIONS: [&str; 2] = [
    "How do I handle this refund exception request?",
    "What's our policy on refunds after 60 days?",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    pub link: String,
}

impl Resource {
    fn new(title: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistResponse {
    pub summary: String,
    pub suggestions: Vec<String>,
    pub resources: Vec<Resource>,
}

/// Produces assist content; the panel handles timing and state
pub trait Responder: Send {
    fn respond(&self, query: &str) -> AssistResponse;

    /// Hint shown after the agent sent one of the suggestions
    fn follow_up(&self) -> AssistResponse;
}

/// Canned responses keyed on refund/return questions
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedResponder;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Responder for ScriptedResponder {
    fn respond(&self, query: &str) -> AssistResponse {
        let lowered = query.to_lowercase();
        if lowered.contains("refund") || lowered.contains("return") {
            AssistResponse {
                summary: "Based on this conversation, the customer is asking about a refund for an order \
                    placed over 60 days ago. Here's what you can do:"
                    .to_string(),
                suggestions: strings(&[
                    "I understand your situation. While our policy is 60 days, I can make an exception in this case.",
                    "I'll need your order number to process this exception refund.",
                    "Could you confirm the item is still in its original packaging?",
                ]),
                resources: vec![
                    Resource::new("Refund Policy", "#refund-policy"),
                    Resource::new("Exception Handling", "#exceptions"),
                ],
            }
        } else {
            AssistResponse {
                summary: format!("Here's information about \"{}\":", query),
                suggestions: strings(&[
                    "I'd be happy to explain our policy on that.",
                    "Let me check the details for you.",
                    "I can help you with that request.",
                ]),
                resources: vec![
                    Resource::new("Help Center Article", "#help-center"),
                    Resource::new("Customer Support Guide", "#support-guide"),
                ],
            }
        }
    }

    fn follow_up(&self) -> AssistResponse {
        AssistResponse {
            summary: "The customer might ask about processing time. Here's what you can say:".to_string(),
            suggestions: strings(&[
                "The refund should appear on your statement within 3-5 business days.",
                "Is there anything else I can help you with today?",
                "Would you like me to send you an email confirmation of this refund request?",
            ]),
            resources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistTab {
    #[default]
    Copilot,
    Details,
}

/// Requests the assist panel makes of the layout controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistEvent {
    SendSuggestion(String),
    Close,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AssistOutcome {
    pub effects: Vec<Effect>,
    pub event: Option<AssistEvent>,
}

pub struct AssistPanel {
    responder: Box<dyn Responder>,
    lookup_latency: Duration,
    follow_up_latency: Duration,
    query: Option<String>,
    response: Option<AssistResponse>,
    pending: Option<TaskId>,
    pub input: TextInput,
    tab: AssistTab,
    cursor: usize,
}

impl AssistPanel {
    pub fn new(timings: &Timings, responder: Box<dyn Responder>) -> Self {
        Self {
            responder,
            lookup_latency: timings.assist_latency,
            follow_up_latency: timings.follow_up_latency,
            query: None,
            response: None,
            pending: None,
            input: TextInput::new(),
            tab: AssistTab::default(),
            cursor: 0,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn response(&self) -> Option<&AssistResponse> {
        self.response.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn tab(&self) -> AssistTab {
        self.tab
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            AssistTab::Copilot => AssistTab::Details,
            AssistTab::Details => AssistTab::Copilot,
        };
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Start a new lookup; restarts even when the query is unchanged
    pub fn submit(&mut self, query: &str) -> Vec<Effect> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut effects = self.cancel_pending();
        self.query = Some(query.to_string());
        self.response = None;
        self.tab = AssistTab::Copilot;
        self.cursor = 0;

        let (id, schedule) = Effect::schedule(
            self.lookup_latency,
            Timer::AssistLookup {
                query: query.to_string(),
            },
        );
        self.pending = Some(id);
        effects.push(schedule);

        debug!(task = %id, query, "assist lookup started");
        effects
    }

    /// Submit whatever is typed in the query box
    pub fn submit_input(&mut self) -> Vec<Effect> {
        if self.input.is_blank() {
            return Vec::new();
        }
        let query = self.input.take();
        self.submit(&query)
    }

    /// Hand a suggestion to the chat and schedule the follow-up hint
    pub fn send_suggestion(&mut self, suggestion: &str) -> AssistOutcome {
        let mut effects = self.cancel_pending();
        let (id, schedule) = Effect::schedule(self.follow_up_latency, Timer::AssistFollowUp);
        self.pending = Some(id);
        effects.push(schedule);

        AssistOutcome {
            effects,
            event: Some(AssistEvent::SendSuggestion(suggestion.to_string())),
        }
    }

    /// Rows the highlight cursor moves over
    pub fn items(&self) -> Vec<String> {
        match &self.response {
            Some(response) => response.suggestions.clone(),
            None if self.pending.is_none() => strings(&SUGGESTED_QUESTIONS),
            None => Vec::new(),
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items().len() {
            self.cursor += 1;
        }
    }

    /// Activate the highlighted row: ask a suggested question or send a suggestion
    pub fn activate(&mut self) -> AssistOutcome {
        let Some(item) = self.items().into_iter().nth(self.cursor) else {
            return AssistOutcome::default();
        };
        if self.response.is_some() {
            self.send_suggestion(&item)
        } else {
            AssistOutcome {
                effects: self.submit(&item),
                event: None,
            }
        }
    }

    /// Ask the controller to hide the panel; it resets the panel in response
    pub fn close(&self) -> AssistOutcome {
        AssistOutcome {
            effects: Vec::new(),
            event: Some(AssistEvent::Close),
        }
    }

    /// Drop the current response and go back to the suggested questions
    pub fn clear(&mut self) {
        self.response = None;
        self.cursor = 0;
    }

    /// Deliver a fired timer; returns false if the panel was not waiting on it
    pub fn on_timer(&mut self, id: TaskId, timer: &Timer) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        match timer {
            Timer::AssistLookup { query } => {
                self.response = Some(self.responder.respond(query));
            }
            Timer::AssistFollowUp => {
                let follow_up = self.responder.follow_up();
                let resources = self
                    .response
                    .take()
                    .map(|previous| previous.resources)
                    .unwrap_or_default();
                self.response = Some(AssistResponse {
                    resources,
                    ..follow_up
                });
            }
            Timer::CounterReply => return false,
        }
        self.cursor = 0;
        true
    }

    /// Forget everything and cancel pending work
    pub fn reset(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        self.query = None;
        self.response = None;
        self.input.clear();
        self.tab = AssistTab::default();
        self.cursor = 0;
        effects
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        self.pending.take().map(Effect::Cancel).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> AssistPanel {
        AssistPanel::new(&Timings::default(), Box::new(ScriptedResponder))
    }

    fn scheduled(effects: &[Effect]) -> (TaskId, Timer) {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Schedule { id, timer, .. } => Some((*id, timer.clone())),
                Effect::Cancel(_) => None,
            })
            .expect("no schedule effect")
    }

    fn run(panel: &mut AssistPanel, effects: &[Effect]) {
        let (id, timer) = scheduled(effects);
        assert!(panel.on_timer(id, &timer));
    }

    #[test]
    fn test_refund_keyword_any_case() {
        let responder = ScriptedResponder;
        for query in ["REFUND please", "Can I get a Refund?", "how do returns work"] {
            let response = responder.respond(query);
            assert_eq!(response.resources[0].title, "Refund Policy", "{query}");
            assert!(response.suggestions[1].contains("exception refund"));
        }
    }

    #[test]
    fn test_generic_bundle_quotes_query() {
        let response = ScriptedResponder.respond("Where is my parcel?");
        assert_eq!(response.summary, "Here's information about \"Where is my parcel?\":");
        assert_eq!(response.suggestions.len(), 3);
        assert_eq!(response.resources[1].link, "#support-guide");
    }

    #[test]
    fn test_submit_processes_then_responds() {
        let mut panel = panel();
        let effects = panel.submit("refund status");

        assert!(panel.is_processing());
        assert!(panel.response().is_none());
        assert!(matches!(
            &effects[0],
            Effect::Schedule { delay, .. } if *delay == Duration::from_millis(1500)
        ));

        run(&mut panel, &effects);
        assert!(!panel.is_processing());
        assert_eq!(panel.response().unwrap().resources[0].link, "#refund-policy");
    }

    #[test]
    fn test_blank_query_is_noop() {
        let mut panel = panel();
        assert!(panel.submit("  ").is_empty());
        assert!(!panel.is_processing());
        assert!(panel.query().is_none());
    }

    #[test]
    fn test_resubmitting_same_query_restarts_lookup() {
        let mut panel = panel();
        let first = panel.submit("pricing");
        run(&mut panel, &first);
        assert!(panel.response().is_some());

        let second = panel.submit("pricing");
        assert!(panel.is_processing());
        assert!(panel.response().is_none());
        let (second_id, _) = scheduled(&second);
        let (first_id, _) = scheduled(&first);
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_new_query_cancels_pending_lookup() {
        let mut panel = panel();
        let first = panel.submit("refund");
        let (first_id, first_timer) = scheduled(&first);

        let second = panel.submit("pricing");
        assert!(second.contains(&Effect::Cancel(first_id)));

        // The stale lookup must not overwrite the newer one
        assert!(!panel.on_timer(first_id, &first_timer));
        assert!(panel.is_processing());

        run(&mut panel, &second);
        assert!(panel.response().unwrap().summary.contains("pricing"));
    }

    #[test]
    fn test_send_suggestion_emits_and_follows_up() {
        let mut panel = panel();
        let effects = panel.submit("refund");
        run(&mut panel, &effects);

        let outcome = panel.send_suggestion("I'll need your order number");
        assert_eq!(
            outcome.event,
            Some(AssistEvent::SendSuggestion("I'll need your order number".to_string()))
        );
        assert!(panel.is_processing());
        // Previous response stays visible while the follow-up is pending
        assert!(panel.response().is_some());

        run(&mut panel, &outcome.effects);
        let response = panel.response().unwrap();
        assert!(response.summary.contains("processing time"));
        assert_eq!(response.resources[0].title, "Refund Policy");
    }

    #[test]
    fn test_activate_suggested_question_then_suggestion() {
        let mut panel = panel();
        assert_eq!(panel.items().len(), 2);
        panel.move_down();
        panel.move_down();
        assert_eq!(panel.cursor(), 1);

        let outcome = panel.activate();
        assert_eq!(outcome.event, None);
        assert_eq!(panel.query(), Some(SUGGESTED_QUESTIONS[1]));
        assert!(panel.items().is_empty());
        assert_eq!(panel.activate(), AssistOutcome::default());

        run(&mut panel, &outcome.effects);
        panel.move_down();
        let outcome = panel.activate();
        assert!(matches!(outcome.event, Some(AssistEvent::SendSuggestion(s)) if s.contains("order number")));
    }

    #[test]
    fn test_close_emits_event_without_touching_state() {
        let mut panel = panel();
        let effects = panel.submit("refund");
        let outcome = panel.close();
        assert_eq!(outcome.event, Some(AssistEvent::Close));
        assert!(outcome.effects.is_empty());
        // Cancellation is the controller's job once it handles the event
        assert!(panel.is_processing());
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_submit_input_takes_text() {
        let mut panel = panel();
        panel.input.insert_str("shipping times");
        let effects = panel.submit_input();
        assert_eq!(effects.len(), 1);
        assert_eq!(panel.input.value(), "");
        assert_eq!(panel.query(), Some("shipping times"));
    }

    #[test]
    fn test_submit_switches_to_copilot_tab() {
        let mut panel = panel();
        panel.toggle_tab();
        assert_eq!(panel.tab(), AssistTab::Details);
        panel.submit("refund");
        assert_eq!(panel.tab(), AssistTab::Copilot);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut panel = panel();
        let effects = panel.submit("refund");
        run(&mut panel, &effects);
        panel.clear();
        assert!(panel.response().is_none());
        assert_eq!(panel.items().len(), 2);

        let effects = panel.submit("again");
        let (id, _) = scheduled(&effects);
        assert_eq!(panel.reset(), vec![Effect::Cancel(id)]);
        assert!(!panel.is_processing());
        assert!(panel.query().is_none());
    }
}
