mod rows;

pub(crate) use rows::{RowBook, RowError, RowMode};

use crate::api::RecordsClient;
use crate::config::PageConfig;
use crate::models::RecordId;
use leptos::prelude::*;
use leptos_dom::helpers::set_timeout;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr)]
pub(crate) enum NoticeTone {
    #[strum(serialize = "text-bg-success")]
    Success,
    #[strum(serialize = "text-bg-danger")]
    Danger,
}

/// A toast rendered by the page overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notice {
    pub id: u64,
    pub tone: NoticeTone,
    pub message: String,
}

/// What happens when the user accepts a confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ConfirmAction {
    DeleteRecord(RecordId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ConfirmRequest {
    pub message: String,
    pub action: ConfirmAction,
}

#[derive(Clone)]
pub(crate) struct PageState {
    pub config: PageConfig,
    pub client: RecordsClient,

    /// Per-row mode and in-flight guard.
    pub rows: RwSignal<RowBook>,

    pub notices: RwSignal<Vec<Notice>>,
    next_notice_id: RwSignal<u64>,

    /// At most one confirmation is open at a time.
    pub pending_confirm: RwSignal<Option<ConfirmRequest>>,
}

impl PageState {
    pub fn new(config: PageConfig) -> Self {
        Self {
            client: RecordsClient::new(config.clone()),
            config,
            rows: RwSignal::new(RowBook::new()),
            notices: RwSignal::new(vec![]),
            next_notice_id: RwSignal::new(1),
            pending_confirm: RwSignal::new(None),
        }
    }

    /// Shows a toast and schedules its removal after the alert lifetime.
    pub fn push_notice(&self, tone: NoticeTone, message: impl Into<String>) -> u64 {
        let id = self.next_notice_id.get_untracked();
        self.next_notice_id.set(id + 1);

        self.notices.update(|list| {
            list.push(Notice {
                id,
                tone,
                message: message.into(),
            })
        });

        let notices = self.notices;
        set_timeout(
            move || notices.update(|list| list.retain(|n| n.id != id)),
            Duration::from_millis(self.config.alert_dismiss_ms as u64),
        );

        id
    }

    /// Opens the confirmation dialog. Returns false if one is already open.
    pub fn request_confirm(&self, message: impl Into<String>, action: ConfirmAction) -> bool {
        if self.pending_confirm.get_untracked().is_some() {
            return false;
        }
        self.pending_confirm.set(Some(ConfirmRequest {
            message: message.into(),
            action,
        }));
        true
    }

    /// Closes the dialog and hands back what it was asking about.
    pub fn take_confirm(&self) -> Option<ConfirmRequest> {
        let req = self.pending_confirm.get_untracked();
        if req.is_some() {
            self.pending_confirm.set(None);
        }
        req
    }
}

#[derive(Clone)]
pub(crate) struct PageContext(pub PageState);
