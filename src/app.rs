//! Main application state and event loop

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::{
    config::Config,
    inbox::{Command, Effect, LayoutController, Panel, PanelView, TaskId, Timer},
    input_utils::TextInput,
    scheduler::Scheduler,
    store::ConversationStore,
    ui::{self, RenderState},
    viewport::ViewportPolicy,
};

/// Messages that can be sent to the app from background tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A scheduled timer elapsed
    TimerFired { id: TaskId, timer: Timer },
}

/// Which side of the layout a view occupies
fn slot(view: PanelView) -> Panel {
    match view {
        PanelView::List => Panel::List,
        PanelView::Chat | PanelView::Closed | PanelView::NoSelection => Panel::Chat,
        PanelView::Assist => Panel::Assist,
    }
}

/// Apply a readline-style editing key; false if the key is not an editing key
fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => input.delete_word_backward(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => input.delete_to_start(),
        (KeyModifiers::CONTROL, KeyCode::Char('k')) => input.delete_to_end(),
        (KeyModifiers::ALT, KeyCode::Left) => input.move_word_left(),
        (KeyModifiers::ALT, KeyCode::Right) => input.move_word_right(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert(c),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) => input.move_right(),
        (_, KeyCode::Home) => input.move_home(),
        (_, KeyCode::End) => input.move_end(),
        _ => return false,
    }
    true
}

/// Application state
pub struct App<B: Backend> {
    /// Terminal handle
    terminal: Terminal<B>,
    /// Inbox state
    controller: LayoutController,
    /// Runs timer effects
    scheduler: Scheduler,
    /// Maps terminal width to a layout mode
    viewport: ViewportPolicy,
    /// App message receiver
    message_rx: mpsc::Receiver<AppMessage>,
    /// Keyboard focus on wide layouts
    focus: Panel,
    /// Should quit
    should_quit: bool,
    /// Status message
    status_message: Option<String>,
}

impl App<CrosstermBackend<Stdout>> {
    pub fn new(config: Config, store: ConversationStore) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, config, store)
    }

    /// Main event loop
    pub async fn run(&mut self) -> Result<()> {
        self.controller.bootstrap();

        loop {
            // Draw UI
            self.draw()?;

            // Handle events with timeout
            tokio::select! {
                // Check for terminal events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    while event::poll(Duration::from_millis(0))? {
                        self.handle_event(event::read()?);
                    }
                }

                // Check for app messages
                Some(msg) = self.message_rx.recv() => {
                    self.handle_app_message(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Cleanup
        self.cleanup()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.scheduler.cancel_all();

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        info!("terminal restored");
        Ok(())
    }
}

impl<B: Backend> App<B> {
    pub fn with_terminal(terminal: Terminal<B>, config: Config, store: ConversationStore) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::channel(100);
        let layout = config.viewport.classify(terminal.size()?.width);
        info!(%layout, conversations = store.len(), "starting inbox");

        Ok(Self {
            terminal,
            controller: LayoutController::new(store, config.timings, layout),
            scheduler: Scheduler::new(message_tx),
            viewport: config.viewport,
            message_rx,
            focus: Panel::List,
            should_quit: false,
            status_message: None,
        })
    }

    fn draw(&mut self) -> Result<()> {
        let plan = self.controller.render_plan();
        let state = RenderState {
            controller: &self.controller,
            focus: self.focused_view(),
            plan,
            status_message: self.status_message.as_deref(),
        };

        self.terminal.draw(|frame| {
            ui::draw(frame, &state);
        })?;
        Ok(())
    }

    /// The rendered panel that receives keys
    fn focused_view(&self) -> PanelView {
        let plan = self.controller.render_plan();
        if plan.layout.is_narrow() {
            return plan.panels[0];
        }
        plan.panels
            .iter()
            .copied()
            .find(|view| slot(*view) == self.focus)
            .unwrap_or(PanelView::List)
    }

    /// Move keyboard focus across the visible panels (wide layouts only)
    fn cycle_focus(&mut self, forward: bool) {
        let plan = self.controller.render_plan();
        if plan.layout.is_narrow() {
            return;
        }
        let slots: Vec<Panel> = plan.panels.iter().map(|view| slot(*view)).collect();
        let current = slots.iter().position(|s| *s == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % slots.len()
        } else {
            (current + slots.len() - 1) % slots.len()
        };
        self.focus = slots[next];
    }

    fn dispatch(&mut self, command: Command) {
        let effects = self.controller.dispatch(command);
        self.scheduler.apply(effects);
        trace!(
            focused = ?self.controller.focused(),
            pending = self.scheduler.pending(),
            "command applied"
        );
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        self.scheduler.apply(effects);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Resize(width, _) => {
                let layout = self.viewport.classify(width);
                self.dispatch(Command::SetLayout(layout));
            }
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.dispatch(Command::ToggleAssist);
            }
            (_, KeyCode::Tab) => self.cycle_focus(true),
            (_, KeyCode::BackTab) => self.cycle_focus(false),
            _ => match self.focused_view() {
                PanelView::List => self.handle_list_key(key),
                PanelView::Chat => self.handle_chat_key(key),
                PanelView::Closed => self.handle_closed_key(key),
                PanelView::NoSelection => {}
                PanelView::Assist => self.handle_assist_key(key),
            },
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let text = text.replace(['\r', '\n'], " ");
        match self.focused_view() {
            PanelView::List => {
                let (list, store) = self.controller.list_and_store();
                list.search.insert_str(&text);
                list.search_changed(store);
            }
            PanelView::Chat => {
                if let Some(chat) = self.controller.chat_mut() {
                    chat.draft.insert_str(&text);
                }
            }
            PanelView::Assist => self.controller.assist_mut().input.insert_str(&text),
            PanelView::Closed | PanelView::NoSelection => {}
        }
    }

    fn back(&mut self) {
        self.dispatch(Command::Back);
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let (list, store) = self.controller.list_and_store();
        match key.code {
            KeyCode::Up => list.move_up(),
            KeyCode::Down => list.move_down(store),
            KeyCode::Left if key.modifiers.is_empty() => list.previous_filter(store),
            KeyCode::Right if key.modifiers.is_empty() => list.next_filter(store),
            KeyCode::Enter => {
                if let Some(id) = list.highlighted(store) {
                    self.dispatch(Command::SelectConversation(id));
                    self.focus = Panel::Chat;
                }
            }
            KeyCode::Esc => {
                list.search.clear();
                list.search_changed(store);
            }
            _ => {
                if edit_text(&mut list.search, key) {
                    list.search_changed(store);
                }
            }
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        let Some(chat) = self.controller.chat_mut() else {
            return;
        };

        match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => {
                let outcome = chat.submit_draft();
                if outcome.status.is_some() {
                    self.status_message = outcome.status;
                }
                self.apply(outcome.effects);
                if let Some(event) = outcome.event {
                    self.dispatch(event.into());
                }
            }
            (KeyModifiers::ALT, KeyCode::Up) => chat.select_previous(),
            (KeyModifiers::ALT, KeyCode::Down) => chat.select_next(),
            (KeyModifiers::CONTROL, KeyCode::Char('g')) => match chat.ask_assist() {
                Some(event) => {
                    self.dispatch(event.into());
                    self.focus = Panel::Assist;
                }
                None => {
                    self.status_message = Some("Select a customer message first (Alt+Up)".to_string());
                }
            },
            (_, KeyCode::PageUp) => chat.scroll_up(10),
            (_, KeyCode::PageDown) => chat.scroll_down(10),
            (_, KeyCode::Esc) => {
                if chat.selected().is_some() {
                    chat.clear_selection();
                } else {
                    self.back();
                }
            }
            _ => {
                edit_text(&mut chat.draft, key);
            }
        }
    }

    fn handle_closed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.dispatch(Command::ReopenConversation),
            KeyCode::Esc => self.back(),
            _ => {}
        }
    }

    fn handle_assist_key(&mut self, key: KeyEvent) {
        let assist = self.controller.assist_mut();
        match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => {
                if assist.input.is_blank() {
                    let outcome = assist.activate();
                    self.apply(outcome.effects);
                    if let Some(event) = outcome.event {
                        self.dispatch(event.into());
                    }
                } else {
                    let effects = assist.submit_input();
                    self.apply(effects);
                }
            }
            (_, KeyCode::Up) => assist.move_up(),
            (_, KeyCode::Down) => assist.move_down(),
            (KeyModifiers::CONTROL, KeyCode::Char('l')) => assist.clear(),
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => assist.toggle_tab(),
            (_, KeyCode::Esc) => {
                let outcome = assist.close();
                self.apply(outcome.effects);
                if let Some(event) = outcome.event {
                    self.dispatch(event.into());
                }
                self.focus = Panel::Chat;
            }
            _ => {
                edit_text(&mut assist.input, key);
            }
        }
    }

    fn handle_app_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::TimerFired { id, timer } => {
                if self.scheduler.complete(id) {
                    self.dispatch(Command::TimerFired { id, timer });
                } else {
                    debug!(task = %id, "ignoring cancelled timer");
                }
            }
        }
    }
}
