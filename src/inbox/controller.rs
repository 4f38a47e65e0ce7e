//! Layout controller: owns the active conversation and panel visibility,
//! and routes every cross-panel request.
//!
//! Views never talk to each other directly. The chat and assist panel hand
//! their requests back as [`ChatEvent`]/[`AssistEvent`], which convert into
//! [`Command`]s dispatched here. Every command returns the timer [`Effect`]s
//! the runtime has to carry out.

use tracing::debug;

use crate::config::Timings;
use crate::store::{Conversation, ConversationStore};
use crate::viewport::LayoutMode;

use super::assist::{AssistEvent, AssistPanel, Responder, ScriptedResponder};
use super::chat::{ChatEvent, ChatView};
use super::effect::{Effect, TaskId, Timer};
use super::list::ConversationList;

/// The panel shown when only one fits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    List,
    Chat,
    Assist,
}

/// What a rendered slot actually contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    List,
    Chat,
    /// Placeholder for a closed chat, offering to reopen it
    Closed,
    /// Placeholder when nothing is selected
    NoSelection,
    Assist,
}

/// Panels to draw, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub layout: LayoutMode,
    pub panels: Vec<PanelView>,
}

impl RenderPlan {
    pub fn contains(&self, view: PanelView) -> bool {
        self.panels.contains(&view)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectConversation(String),
    CloseConversation,
    ReopenConversation,
    ToggleAssist,
    CloseAssist,
    AskAssist(String),
    SendSuggestion(String),
    /// Return to the list on narrow layouts
    Back,
    SetLayout(LayoutMode),
    TimerFired { id: TaskId, timer: Timer },
}

impl From<ChatEvent> for Command {
    fn from(event: ChatEvent) -> Self {
        match event {
            ChatEvent::AskAssist(text) => Command::AskAssist(text),
            ChatEvent::Close => Command::CloseConversation,
            ChatEvent::ToggleAssist => Command::ToggleAssist,
        }
    }
}

impl From<AssistEvent> for Command {
    fn from(event: AssistEvent) -> Self {
        match event {
            AssistEvent::SendSuggestion(text) => Command::SendSuggestion(text),
            AssistEvent::Close => Command::CloseAssist,
        }
    }
}

pub struct LayoutController {
    store: ConversationStore,
    timings: Timings,
    list: ConversationList,
    /// Present iff a conversation is active and its chat is open
    chat: Option<ChatView>,
    assist: AssistPanel,
    active: Option<String>,
    chat_closed: bool,
    assist_visible: bool,
    focused: Panel,
    layout: LayoutMode,
    bootstrapped: bool,
}

impl LayoutController {
    pub fn new(store: ConversationStore, timings: Timings, layout: LayoutMode) -> Self {
        Self::with_responder(store, timings, layout, Box::new(ScriptedResponder))
    }

    pub fn with_responder(
        store: ConversationStore,
        timings: Timings,
        layout: LayoutMode,
        responder: Box<dyn Responder>,
    ) -> Self {
        Self {
            assist: AssistPanel::new(&timings, responder),
            store,
            timings,
            list: ConversationList::new(),
            chat: None,
            active: None,
            chat_closed: false,
            assist_visible: true,
            focused: Panel::List,
            layout,
            bootstrapped: false,
        }
    }

    /// One-time selection of the first conversation; focus stays put
    pub fn bootstrap(&mut self) {
        if self.bootstrapped || self.active.is_some() {
            return;
        }
        let Some(first) = self.store.first() else {
            return;
        };
        let id = first.id.clone();
        self.bootstrapped = true;
        debug!(conversation = %id, "bootstrapping first conversation");
        // No chat exists yet, so activation cannot produce cancellations
        let _ = self.activate(&id);
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        debug!(?command, layout = %self.layout, focused = ?self.focused, "dispatch");
        match command {
            Command::SelectConversation(id) => self.select_conversation(&id),
            Command::CloseConversation => self.close_conversation(),
            Command::ReopenConversation => self.reopen_conversation(),
            Command::ToggleAssist => self.toggle_assist(),
            Command::CloseAssist => self.close_assist(),
            Command::AskAssist(text) => self.ask_assist(&text),
            Command::SendSuggestion(text) => self.send_suggestion(&text),
            Command::Back => {
                if self.layout.is_narrow() {
                    self.focused = Panel::List;
                }
                Vec::new()
            }
            Command::SetLayout(layout) => {
                if layout != self.layout {
                    debug!(from = %self.layout, to = %layout, "layout changed");
                    self.layout = layout;
                }
                Vec::new()
            }
            Command::TimerFired { id, timer } => {
                self.timer_fired(id, &timer);
                Vec::new()
            }
        }
    }

    fn select_conversation(&mut self, id: &str) -> Vec<Effect> {
        if self.store.get(id).is_none() {
            debug!(conversation = id, "ignoring unknown conversation");
            return Vec::new();
        }
        self.bootstrapped = true;
        let effects = self.activate(id);
        if self.layout.is_narrow() {
            self.focused = Panel::Chat;
        }
        effects
    }

    /// Make `id` active with an open chat, keeping the chat if it is already showing `id`
    fn activate(&mut self, id: &str) -> Vec<Effect> {
        let keep = !self.chat_closed
            && self
                .chat
                .as_ref()
                .is_some_and(|chat| chat.conversation_id() == id);

        let mut effects = Vec::new();
        if !keep {
            effects.extend(self.teardown_chat());
            if let Some(conversation) = self.store.get(id) {
                self.chat = Some(ChatView::new(conversation, self.timings.reply_delay));
            }
        }
        self.active = Some(id.to_string());
        self.chat_closed = false;
        self.list.highlight(id, &self.store);
        effects
    }

    fn close_conversation(&mut self) -> Vec<Effect> {
        if self.active.is_none() {
            return Vec::new();
        }
        self.chat_closed = true;
        if self.layout.is_narrow() {
            self.focused = Panel::List;
        }
        self.teardown_chat()
    }

    fn reopen_conversation(&mut self) -> Vec<Effect> {
        let Some(id) = self.active.clone() else {
            return Vec::new();
        };
        let effects = self.activate(&id);
        if self.layout.is_narrow() {
            self.focused = Panel::Chat;
        }
        effects
    }

    fn toggle_assist(&mut self) -> Vec<Effect> {
        if self.layout.is_narrow() {
            if self.focused == Panel::Assist {
                self.focused = Panel::Chat;
            } else {
                self.focused = Panel::Assist;
                self.assist_visible = true;
            }
            return Vec::new();
        }

        self.assist_visible = !self.assist_visible;
        if self.assist_visible {
            Vec::new()
        } else {
            self.assist.reset()
        }
    }

    fn close_assist(&mut self) -> Vec<Effect> {
        self.assist_visible = false;
        if self.layout.is_narrow() && self.focused == Panel::Assist {
            self.focused = Panel::Chat;
        }
        self.assist.reset()
    }

    fn ask_assist(&mut self, text: &str) -> Vec<Effect> {
        if self.active.is_none() || text.trim().is_empty() {
            return Vec::new();
        }
        self.assist_visible = true;
        if self.layout.is_narrow() {
            self.focused = Panel::Assist;
        }
        self.assist.submit(text)
    }

    fn send_suggestion(&mut self, text: &str) -> Vec<Effect> {
        match self.chat.as_mut() {
            Some(chat) => chat.send(text),
            None => Vec::new(),
        }
    }

    fn timer_fired(&mut self, id: TaskId, timer: &Timer) {
        let delivered = match timer {
            Timer::CounterReply => self.chat.as_mut().is_some_and(|chat| chat.on_timer(id)),
            Timer::AssistLookup { .. } | Timer::AssistFollowUp => self.assist.on_timer(id, timer),
        };
        if !delivered {
            debug!(task = %id, ?timer, "dropping stale timer");
        }
    }

    fn teardown_chat(&mut self) -> Vec<Effect> {
        self.chat
            .take()
            .map(|mut chat| chat.teardown())
            .unwrap_or_default()
    }

    /// Which panels to draw; a pure function of the current state
    pub fn render_plan(&self) -> RenderPlan {
        let center = match (&self.active, self.chat_closed) {
            (None, _) => PanelView::NoSelection,
            (Some(_), true) => PanelView::Closed,
            (Some(_), false) => PanelView::Chat,
        };

        let panels = match self.layout {
            LayoutMode::Wide => {
                let mut panels = vec![PanelView::List, center];
                if self.assist_visible && self.active.is_some() {
                    panels.push(PanelView::Assist);
                }
                panels
            }
            LayoutMode::Narrow => {
                let view = match (&self.active, self.focused) {
                    (None, _) | (Some(_), Panel::List) => PanelView::List,
                    (Some(_), Panel::Chat) => center,
                    (Some(_), Panel::Assist) => PanelView::Assist,
                };
                vec![view]
            }
        };

        RenderPlan {
            layout: self.layout,
            panels,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.active.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn is_chat_closed(&self) -> bool {
        self.chat_closed
    }

    pub fn is_assist_visible(&self) -> bool {
        self.assist_visible
    }

    pub fn focused(&self) -> Panel {
        self.focused
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn list(&self) -> &ConversationList {
        &self.list
    }

    pub fn chat(&self) -> Option<&ChatView> {
        self.chat.as_ref()
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatView> {
        self.chat.as_mut()
    }

    pub fn assist(&self) -> &AssistPanel {
        &self.assist
    }

    pub fn assist_mut(&mut self) -> &mut AssistPanel {
        &mut self.assist
    }

    /// Borrow the list together with the store it filters
    pub fn list_and_store(&mut self) -> (&mut ConversationList, &ConversationStore) {
        (&mut self.list, &self.store)
    }
}
