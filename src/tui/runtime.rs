use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::element::FocusId;
use crate::tui::renderer::{Action, FocusRegistry};
use crate::tui::{App, Command, InteractionRegistry, Renderer, Subscription, Theme};
use crate::view::link;

/// The runtime manages app lifecycle, event routing, and command execution
pub struct Runtime<A: App> {
    /// Current app state
    state: A::State,

    theme: Theme,

    /// Interaction registry for mouse events
    registry: InteractionRegistry<A::Msg>,

    /// Focus registry for keyboard focus
    focus_registry: FocusRegistry<A::Msg>,

    /// Currently focused element ID
    focused_id: Option<FocusId>,

    /// Keyboard subscriptions
    key_subscriptions: HashMap<KeyCode, A::Msg>,

    /// Pending async commands
    pending_async: Vec<Pin<Box<dyn Future<Output = A::Msg> + Send>>>,

    quit_requested: bool,
}

impl<A: App> Runtime<A> {
    pub fn new(params: A::InitParams, theme: Theme) -> Self {
        let (state, init_command) = A::init(params);

        let mut runtime = Self {
            state,
            theme,
            registry: InteractionRegistry::new(),
            focus_registry: FocusRegistry::new(),
            focused_id: None,
            key_subscriptions: HashMap::new(),
            pending_async: Vec::new(),
            quit_requested: false,
        };

        runtime.update_subscriptions();
        runtime.execute_command(init_command);
        runtime
    }

    /// Get a reference to the app's state
    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &InteractionRegistry<A::Msg> {
        &self.registry
    }

    pub fn focused_id(&self) -> Option<&FocusId> {
        self.focused_id.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_async.is_empty()
    }

    pub fn title(&self) -> &'static str {
        A::title()
    }

    /// Deliver a message as if it came from the UI
    pub fn dispatch(&mut self, msg: A::Msg) {
        let command = A::update(&mut self.state, msg);
        self.execute_command(command);
        self.update_subscriptions();
    }

    /// Route an activated link through the app's single link dispatcher
    fn follow(&mut self, raw: &link::RawLink) {
        let Some(target) = link::route(raw) else {
            return;
        };
        log::debug!("Following link {}", target.marker());
        let command = A::follow_link(&mut self.state, target);
        self.execute_command(command);
        self.update_subscriptions();
    }

    fn activate(&mut self, action: Action<A::Msg>) {
        match action {
            Action::Message(msg) => self.dispatch(msg),
            Action::Link(raw) => self.follow(&raw),
        }
    }

    /// Focus the next element (Tab)
    pub fn focus_next(&mut self) {
        let focusable_ids = self.focus_registry.focusable_ids_in_active_layer();
        if focusable_ids.is_empty() {
            return;
        }

        let next_id = match &self.focused_id {
            Some(current_id) => match focusable_ids.iter().position(|id| id == current_id) {
                Some(pos) => focusable_ids[(pos + 1) % focusable_ids.len()].clone(),
                None => focusable_ids[0].clone(),
            },
            None => focusable_ids[0].clone(),
        };
        self.focused_id = Some(next_id);
    }

    /// Focus the previous element (Shift-Tab)
    pub fn focus_previous(&mut self) {
        let focusable_ids = self.focus_registry.focusable_ids_in_active_layer();
        let Some(last) = focusable_ids.last() else {
            return;
        };

        let prev_id = match &self.focused_id {
            Some(current_id) => match focusable_ids.iter().position(|id| id == current_id) {
                Some(0) => last.clone(),
                Some(pos) => focusable_ids[pos - 1].clone(),
                None => focusable_ids[0].clone(),
            },
            None => last.clone(),
        };
        self.focused_id = Some(prev_id);
    }

    /// Poll pending async commands and process completed ones
    pub fn poll_async(&mut self) -> Result<()> {
        // Create a dummy waker; the event loop polls again every frame
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut completed = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending_async.len());

        for mut future in self.pending_async.drain(..) {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(msg) => completed.push(msg),
                Poll::Pending => still_pending.push(future),
            }
        }
        self.pending_async = still_pending;

        for msg in completed {
            self.dispatch(msg);
        }

        Ok(())
    }

    /// Update subscriptions based on current state
    fn update_subscriptions(&mut self) {
        self.key_subscriptions.clear();
        for sub in A::subscriptions(&self.state) {
            match sub {
                Subscription::Keyboard { key, msg, .. } => {
                    self.key_subscriptions.insert(key, msg);
                }
            }
        }
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(!self.quit_requested);
        }

        match key_event.code {
            KeyCode::Tab if !key_event.modifiers.contains(KeyModifiers::SHIFT) => self.focus_next(),
            KeyCode::BackTab | KeyCode::Tab => self.focus_previous(),
            KeyCode::Enter => {
                let action = self
                    .focused_id
                    .as_ref()
                    .and_then(|id| self.focus_registry.find_in_active_layer(id))
                    .and_then(|focusable| focusable.action.clone());
                match action {
                    Some(action) => self.activate(action),
                    None => self.dispatch_key(KeyCode::Enter),
                }
            }
            KeyCode::Esc => {
                // Blur first, then let the app close whatever is open
                self.focused_id = None;
                self.dispatch_key(KeyCode::Esc);
            }
            code => self.dispatch_key(code),
        }

        Ok(!self.quit_requested)
    }

    fn dispatch_key(&mut self, code: KeyCode) {
        if let Some(msg) = self.key_subscriptions.get(&code).cloned() {
            log::debug!("Key {:?} -> {:?}", code, msg);
            self.dispatch(msg);
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        let (x, y) = (mouse_event.column, mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.focused_id = self.focus_registry.find_at_position(x, y);
                if let Some(action) = self.registry.find_click(x, y) {
                    self.activate(action);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let down = mouse_event.kind == MouseEventKind::ScrollDown;
                if let Some(msg) = self.registry.find_scroll(x, y, down) {
                    self.dispatch(msg);
                }
            }
            _ => {}
        }
        Ok(!self.quit_requested)
    }

    /// Simulate a left click at a screen position
    pub fn click(&mut self, x: u16, y: u16) -> Result<bool> {
        self.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Simulate a mouse wheel turn at a screen position
    pub fn wheel(&mut self, x: u16, y: u16, down: bool) -> Result<bool> {
        self.handle_mouse(MouseEvent {
            kind: if down {
                MouseEventKind::ScrollDown
            } else {
                MouseEventKind::ScrollUp
            },
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Execute a command
    fn execute_command(&mut self, command: Command<A::Msg>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd);
                }
            }
            Command::Perform(future) => self.pending_async.push(future),
            Command::ClearFocus => self.focused_id = None,
            Command::Quit => self.quit_requested = true,
        }
    }

    /// Render the current app
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.render_to_area(frame, area);
    }

    /// Render the app to a specific area
    pub fn render_to_area(&mut self, frame: &mut Frame, area: Rect) {
        // Clear registries for this frame
        self.registry.clear();
        self.focus_registry.clear();

        let view = A::view(&self.state, &self.theme);

        let area = match A::status(&self.state, &self.theme) {
            Some(line) if area.height > 1 => {
                let status_area = Rect {
                    y: area.y + area.height - 1,
                    height: 1,
                    ..area
                };
                frame.render_widget(Paragraph::new(line), status_area);
                Rect {
                    height: area.height - 1,
                    ..area
                }
            }
            _ => area,
        };

        Renderer::render(
            frame,
            &self.theme,
            &mut self.registry,
            &mut self.focus_registry,
            self.focused_id.as_ref(),
            &view,
            area,
        );

        // Element removed while focused, clear focus
        if let Some(focused_id) = &self.focused_id {
            if !self.focus_registry.contains(focused_id) {
                self.focused_id = None;
            }
        }
    }
}
