use crate::api::{ApiCommand, ApiCommandSender, ApiEvent};
use crate::ui::mvi::Reducer;
use crate::ui::panel::{PanelIntent, PanelReducer, PanelState};
use std::time::{Duration, Instant};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Settings panel state (MVI pattern).
    panel: PanelState,
    /// Channel to the API worker. `None` when no credential was resolved.
    api_sender: Option<ApiCommandSender>,
    last_api_error: Option<String>,
    notice_ttl: Duration,
    notice_shown_at: Option<Instant>,
}

impl App {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            should_quit: false,
            panel: PanelState::default(),
            api_sender: None,
            last_api_error: None,
            notice_ttl,
            notice_shown_at: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_sender = Some(sender);
    }

    pub fn last_api_error(&self) -> Option<&str> {
        self.last_api_error.as_deref()
    }

    /// Start the panel: fetch settings, or show the no-credential state
    /// without touching the network.
    pub fn mount(&mut self) {
        if self.api_sender.is_none() {
            tracing::warn!("No admin key resolved, skipping settings fetch");
            self.dispatch(PanelIntent::CredentialMissing);
            return;
        }
        self.dispatch(PanelIntent::Refresh);
        if !self.send_command(ApiCommand::Fetch) {
            let message = self
                .last_api_error
                .clone()
                .unwrap_or_else(|| "API worker unavailable".to_string());
            self.dispatch(PanelIntent::LoadFailed { message });
        }
    }

    /// Start the panel when a key was resolved but no client could be built.
    pub fn mount_without_client(&mut self, message: String) {
        tracing::error!("Settings client unavailable: {}", message);
        self.dispatch(PanelIntent::ClientUnavailable { message });
    }

    /// Re-fetch from read mode.
    pub fn refresh(&mut self) {
        if self.api_sender.is_none() || self.panel.is_editing() || self.panel.is_loading() {
            return;
        }
        self.dispatch(PanelIntent::Refresh);
        if self.panel.is_loading() && !self.send_command(ApiCommand::Fetch) {
            let message = self
                .last_api_error
                .clone()
                .unwrap_or_else(|| "API worker unavailable".to_string());
            self.dispatch(PanelIntent::LoadFailed { message });
        }
    }

    /// Submit the edit buffer. Does nothing while a save is pending.
    pub fn save(&mut self) {
        if !self.panel.is_editing() || self.panel.is_saving() {
            return;
        }
        self.dispatch(PanelIntent::SaveRequested);

        let Some(values) = self
            .panel
            .ready()
            .and_then(|panel| panel.edit.as_ref())
            .map(|session| session.buffer.values().clone())
        else {
            return;
        };

        if !self.send_command(ApiCommand::Save { values }) {
            let message = self
                .last_api_error
                .clone()
                .unwrap_or_else(|| "API worker unavailable".to_string());
            self.dispatch(PanelIntent::SaveFailed { message });
        }
    }

    /// Feed a worker result into the panel.
    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Fetched(Ok(settings)) => {
                tracing::info!(fields = settings.field_count(), "Settings loaded");
                self.dispatch(PanelIntent::Loaded { settings });
            }
            ApiEvent::Fetched(Err(message)) => self.dispatch(PanelIntent::LoadFailed { message }),
            ApiEvent::Saved(Ok(values)) => self.dispatch(PanelIntent::Saved { values }),
            ApiEvent::Saved(Err(message)) => self.dispatch(PanelIntent::SaveFailed { message }),
        }
    }

    /// Expire the transient notice.
    pub fn on_tick(&mut self) {
        let expired = self
            .notice_shown_at
            .is_some_and(|shown| shown.elapsed() >= self.notice_ttl);
        if expired {
            self.dispatch(PanelIntent::DismissNotice);
        }
    }

    /// Dispatch an intent to the panel reducer.
    ///
    /// Restarts the notice timer whenever the notice changes.
    pub fn dispatch(&mut self, intent: PanelIntent) {
        let before = self.panel.notice().cloned();
        dispatch_mvi!(self, panel, PanelReducer, intent);
        let after = self.panel.notice();
        if after.is_none() {
            self.notice_shown_at = None;
        } else if after != before.as_ref() {
            self.notice_shown_at = Some(Instant::now());
        }
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.api_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_api_error = None;
                true
            }
            Err(err) => {
                tracing::error!("API command send failed: {}", err);
                self.last_api_error = Some(format!("API send failed: {}", err));
                false
            }
        }
    }
}
