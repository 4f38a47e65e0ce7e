//! Chat view: the message thread of the active conversation

use std::time::Duration;

use tracing::debug;

use crate::input_utils::TextInput;
use crate::store::{seed_thread, Conversation, Message, Sender};

use super::effect::{Effect, TaskId, Timer};

pub const COUNTER_REPLY: &str = "Thank you! When can I expect the refund to be processed?";

const HELP: &str = r#"Commands:
  /close         Close the conversation
  /assist        Toggle the assist panel
  /star          Star or unstar
  /snooze        Snooze or unsnooze
  /call          Start a call
  /attach <kind> Attach an image, file, audio or video
  Alt+Up/Down    Select a customer message
  Esc            Clear the selection
  Ctrl+G         Ask assist about the selected message"#;

/// Requests the chat makes of the layout controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    AskAssist(String),
    Close,
    ToggleAssist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    File,
    Audio,
    Video,
}

impl AttachmentKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "image" => Some(AttachmentKind::Image),
            "file" => Some(AttachmentKind::File),
            "audio" => Some(AttachmentKind::Audio),
            "video" => Some(AttachmentKind::Video),
            _ => None,
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            AttachmentKind::Image => "image.jpg",
            AttachmentKind::File => "file.pdf",
            AttachmentKind::Audio => "audio.mp3",
            AttachmentKind::Video => "video.mp4",
        }
    }
}

/// Result of submitting the draft
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatOutcome {
    pub effects: Vec<Effect>,
    pub event: Option<ChatEvent>,
    pub status: Option<String>,
}

pub struct ChatView {
    conversation_id: String,
    user_name: String,
    messages: Vec<Message>,
    pub draft: TextInput,
    pending_reply: Option<TaskId>,
    selected: Option<String>,
    starred: bool,
    snoozed: bool,
    /// Lines scrolled up from the bottom
    pub scroll_offset: usize,
    reply_delay: Duration,
}

impl ChatView {
    pub fn new(conversation: &Conversation, reply_delay: Duration) -> Self {
        Self {
            conversation_id: conversation.id.clone(),
            user_name: conversation.user.name.clone(),
            messages: seed_thread(),
            draft: TextInput::new(),
            pending_reply: None,
            selected: None,
            starred: false,
            snoozed: false,
            scroll_offset: 0,
            reply_delay,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The customer is "typing" while a counter-reply is pending
    pub fn is_typing(&self) -> bool {
        self.pending_reply.is_some()
    }

    pub fn pending_reply(&self) -> Option<TaskId> {
        self.pending_reply
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_starred(&self) -> bool {
        self.starred
    }

    pub fn is_snoozed(&self) -> bool {
        self.snoozed
    }

    /// Append an outgoing agent message and schedule the customer's reply
    pub fn send(&mut self, text: &str) -> Vec<Effect> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        self.messages.push(Message::new(Sender::Agent, text));
        self.scroll_offset = 0;

        let mut effects = Vec::new();
        if let Some(previous) = self.pending_reply.take() {
            effects.push(Effect::Cancel(previous));
        }
        let (id, schedule) = Effect::schedule(self.reply_delay, Timer::CounterReply);
        self.pending_reply = Some(id);
        effects.push(schedule);

        debug!(conversation = %self.conversation_id, task = %id, "agent message sent");
        effects
    }

    /// Submit the draft as a message or a slash command
    pub fn submit_draft(&mut self) -> ChatOutcome {
        if self.draft.is_blank() {
            return ChatOutcome::default();
        }
        let input = self.draft.take();

        match input.strip_prefix('/') {
            Some(command) => self.run_command(command.trim()),
            None => ChatOutcome {
                effects: self.send(&input),
                ..Default::default()
            },
        }
    }

    fn run_command(&mut self, input: &str) -> ChatOutcome {
        let (command, args) = input.split_once(' ').unwrap_or((input, ""));
        let args = args.trim();
        let mut outcome = ChatOutcome::default();

        match command {
            "close" => outcome.event = Some(ChatEvent::Close),
            "assist" => outcome.event = Some(ChatEvent::ToggleAssist),
            "star" => {
                self.toggle_star();
                outcome.status = Some(if self.starred { "Starred" } else { "Unstarred" }.to_string());
            }
            "snooze" => {
                self.toggle_snooze();
                outcome.status = Some(if self.snoozed { "Snoozed" } else { "Unsnoozed" }.to_string());
            }
            "call" => self.call(),
            "attach" => match AttachmentKind::parse(args) {
                Some(kind) => self.attach(kind),
                None => {
                    outcome.status = Some("Usage: /attach image|file|audio|video".to_string());
                }
            },
            "help" => self.messages.push(Message::new(Sender::System, HELP)),
            _ => outcome.status = Some(format!("Unknown command: /{}", command)),
        }
        outcome
    }

    /// Deliver a fired timer; returns false if this view was not waiting on it
    pub fn on_timer(&mut self, id: TaskId) -> bool {
        if self.pending_reply != Some(id) {
            return false;
        }
        self.pending_reply = None;
        self.messages.push(Message::new(Sender::User, COUNTER_REPLY));
        self.scroll_offset = 0;
        true
    }

    /// Cancel pending work before the view is dropped
    pub fn teardown(&mut self) -> Vec<Effect> {
        self.pending_reply.take().map(Effect::Cancel).into_iter().collect()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Walk backwards through customer messages; other senders are not selectable
    pub fn select_previous(&mut self) {
        let ids = self.user_message_ids();
        let next = match self.selected_index(&ids) {
            Some(0) => None,
            Some(i) => Some(i - 1),
            None => ids.len().checked_sub(1),
        };
        self.selected = next.map(|i| ids[i].clone());
    }

    pub fn select_next(&mut self) {
        let ids = self.user_message_ids();
        let next = match self.selected_index(&ids) {
            Some(i) if i + 1 < ids.len() => Some(i + 1),
            _ => None,
        };
        self.selected = next.map(|i| ids[i].clone());
    }

    fn user_message_ids(&self) -> Vec<String> {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .map(|m| m.id.clone())
            .collect()
    }

    fn selected_index(&self, ids: &[String]) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        ids.iter().position(|id| id == selected)
    }

    /// Ask assist about the selected message, clearing the selection
    pub fn ask_assist(&mut self) -> Option<ChatEvent> {
        let selected = self.selected.take()?;
        self.messages
            .iter()
            .find(|m| m.id == selected)
            .map(|m| ChatEvent::AskAssist(m.content.clone()))
    }

    pub fn toggle_star(&mut self) {
        self.starred = !self.starred;
    }

    pub fn toggle_snooze(&mut self) {
        self.snoozed = !self.snoozed;
    }

    pub fn call(&mut self) {
        self.messages.push(Message::new(
            Sender::System,
            format!("Call initiated with {}", self.user_name),
        ));
    }

    pub fn attach(&mut self, kind: AttachmentKind) {
        self.messages.push(Message::new(
            Sender::Agent,
            format!("Attached {}", kind.file_name()),
        ));
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ConversationStore;

    const DELAY: Duration = Duration::from_millis(3000);

    fn chat() -> ChatView {
        let store = ConversationStore::sample().unwrap();
        ChatView::new(store.get("1").unwrap(), DELAY)
    }

    fn scheduled(effects: &[Effect]) -> TaskId {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Schedule { id, .. } => Some(*id),
                Effect::Cancel(_) => None,
            })
            .expect("no schedule effect")
    }

    #[test]
    fn test_starts_from_seed_thread() {
        let chat = chat();
        assert_eq!(chat.messages().len(), 4);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_blank_send_is_noop() {
        let mut chat = chat();
        assert!(chat.send("").is_empty());
        assert!(chat.send("   \t ").is_empty());
        assert_eq!(chat.messages().len(), 4);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_send_schedules_one_counter_reply() {
        let mut chat = chat();
        let effects = chat.send("Let me check");

        assert_eq!(chat.messages().len(), 5);
        assert_eq!(chat.messages()[4].sender, Sender::Agent);
        assert_eq!(chat.messages()[4].content, "Let me check");
        assert!(chat.is_typing());

        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::Schedule { delay, timer: Timer::CounterReply, .. } if *delay == DELAY
        ));

        let id = scheduled(&effects);
        assert!(chat.on_timer(id));
        assert_eq!(chat.messages().len(), 6);
        assert_eq!(chat.messages()[5].sender, Sender::User);
        assert_eq!(chat.messages()[5].content, COUNTER_REPLY);
        assert!(!chat.is_typing());

        // A second delivery of the same timer is ignored
        assert!(!chat.on_timer(id));
        assert_eq!(chat.messages().len(), 6);
    }

    #[test]
    fn test_resend_replaces_pending_reply() {
        let mut chat = chat();
        let first = scheduled(&chat.send("one"));
        let effects = chat.send("two");

        assert!(effects.contains(&Effect::Cancel(first)));
        let second = scheduled(&effects);
        assert!(!chat.on_timer(first));
        assert!(chat.on_timer(second));
        assert_eq!(chat.messages().len(), 7);
    }

    #[test]
    fn test_teardown_cancels_pending_reply() {
        let mut chat = chat();
        let id = scheduled(&chat.send("hello"));
        assert_eq!(chat.teardown(), vec![Effect::Cancel(id)]);
        assert!(chat.teardown().is_empty());
        assert!(!chat.on_timer(id));
    }

    #[test]
    fn test_submit_draft_sends_text() {
        let mut chat = chat();
        chat.draft.insert_str("Sure thing");
        let outcome = chat.submit_draft();
        assert_eq!(outcome.effects.len(), 1);
        assert_eq!(chat.messages().last().unwrap().content, "Sure thing");
        assert_eq!(chat.draft.value(), "");
    }

    #[test]
    fn test_blank_draft_is_kept() {
        let mut chat = chat();
        chat.draft.insert_str("  ");
        assert_eq!(chat.submit_draft(), ChatOutcome::default());
        assert_eq!(chat.draft.value(), "  ");
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn test_slash_commands() {
        let mut chat = chat();

        chat.draft.insert_str("/close");
        assert_eq!(chat.submit_draft().event, Some(ChatEvent::Close));

        chat.draft.insert_str("/assist");
        assert_eq!(chat.submit_draft().event, Some(ChatEvent::ToggleAssist));

        chat.draft.insert_str("/star");
        assert_eq!(chat.submit_draft().status.as_deref(), Some("Starred"));
        assert!(chat.is_starred());

        chat.draft.insert_str("/snooze");
        chat.submit_draft();
        assert!(chat.is_snoozed());

        chat.draft.insert_str("/call");
        chat.submit_draft();
        let last = chat.messages().last().unwrap();
        assert_eq!(last.sender, Sender::System);
        assert_eq!(last.content, "Call initiated with Luis");

        chat.draft.insert_str("/attach video");
        chat.submit_draft();
        assert_eq!(chat.messages().last().unwrap().content, "Attached video.mp4");

        chat.draft.insert_str("/attach sticker");
        assert!(chat.submit_draft().status.unwrap().starts_with("Usage"));

        chat.draft.insert_str("/dance");
        assert_eq!(chat.submit_draft().status.as_deref(), Some("Unknown command: /dance"));

        // Commands never schedule a counter-reply
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_only_user_messages_are_selectable() {
        let mut chat = chat();
        let mut seen = Vec::new();
        chat.select_previous();
        while let Some(id) = chat.selected() {
            seen.push(id.to_string());
            chat.select_previous();
        }
        assert!(!seen.is_empty());
        for id in &seen {
            let message = chat.messages().iter().find(|m| &m.id == id).unwrap();
            assert_eq!(message.sender, Sender::User);
        }

        chat.select_previous();
        assert!(chat.selected().is_some());
        chat.clear_selection();
        assert_eq!(chat.selected(), None);
    }

    #[test]
    fn test_ask_assist_uses_selected_message() {
        let mut chat = chat();
        assert_eq!(chat.ask_assist(), None);

        chat.select_previous();
        assert_eq!(chat.selected(), Some("4"));
        let event = chat.ask_assist();
        assert_eq!(
            event,
            Some(ChatEvent::AskAssist(
                "I placed the order over 60 days ago 😔. Could you make an exception, please?".to_string()
            ))
        );
        assert_eq!(chat.selected(), None);
    }

    #[test]
    fn test_selection_walks_user_messages() {
        let mut chat = chat();
        let id = scheduled(&chat.send("hi"));
        chat.on_timer(id);
        let reply_id = chat.messages().last().unwrap().id.clone();

        chat.select_previous();
        assert_eq!(chat.selected(), Some(reply_id.as_str()));
        chat.select_previous();
        assert_eq!(chat.selected(), Some("4"));
        chat.select_previous();
        assert_eq!(chat.selected(), None);

        chat.select_next();
        assert_eq!(chat.selected(), None);
        chat.select_previous();
        chat.select_previous();
        assert_eq!(chat.selected(), Some("4"));
        chat.select_next();
        assert_eq!(chat.selected(), Some(reply_id.as_str()));
        chat.select_next();
        assert_eq!(chat.selected(), None);
    }
}
