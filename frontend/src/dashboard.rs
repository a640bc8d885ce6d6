//! View model for the administration dashboard.
//!
//! [`DashboardState`] holds everything the screen renders. [`DashboardController`]
//! owns it behind a `RefCell` and runs the two store calls, never holding a borrow
//! across an await.

use std::cell::{Ref, RefCell};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use yew::Callback;

use crate::editor::PaymentEditor;
use crate::error::{StoreError, ValidationError};
use crate::filter::{FilterCriteria, StatusFilter};
use crate::model::{Payment, PaymentId, PaymentMethod};
use crate::notify::Notifier;
use crate::store::PaymentStore;
use crate::summary::Summary;

pub const FETCH_FAILED: &str = "Gagal memuat data pembayaran";
pub const UPDATE_FAILED: &str = "Gagal memproses pembayaran";
pub const PAYMENT_PROCESSED: &str = "Pembayaran berhasil diproses!";

/// Issued per fetch. Results older than the last applied fetch are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    payments: Vec<Payment>,
    summary: Summary,
    criteria: FilterCriteria,
    editor: PaymentEditor,
    issued: u64,
    applied: u64,
}

impl DashboardState {
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn editor(&self) -> &PaymentEditor {
        &self.editor
    }

    pub fn visible<Tz: TimeZone>(&self, tz: &Tz) -> Vec<&Payment> {
        self.criteria.apply(&self.payments, tz)
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Replaces the list and re-derives the aggregates.
    ///
    /// A result is applied when its ticket is newer than the last applied one, even if a
    /// later fetch is still outstanding. Returns false when an already applied newer
    /// result makes this one stale.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, payments: Vec<Payment>) -> bool {
        if ticket.0 <= self.applied {
            tracing::warn!(
                ticket = ticket.0,
                applied = self.applied,
                "dropping out-of-order payment list"
            );
            return false;
        }
        self.applied = ticket.0;
        self.summary = Summary::from_payments(&payments);
        self.payments = payments;
        true
    }

    /// Stages the editor on a listed pending payment, unless a submission is in flight.
    pub fn open_editor(&mut self, id: &PaymentId) -> bool {
        if self.editor.is_submitting() {
            return false;
        }
        match self.payments.iter().find(|payment| &payment.id == id) {
            Some(payment) if payment.is_pending() => self.editor.open(payment.clone()),
            _ => false,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Completed,
    Rejected(ValidationError),
    Failed(StoreError),
}

pub struct DashboardController<S, N> {
    store: S,
    notifier: N,
    state: RefCell<DashboardState>,
    on_change: Callback<()>,
}

impl<S: PaymentStore, N: Notifier> DashboardController<S, N> {
    pub fn new(store: S, notifier: N, on_change: Callback<()>) -> Self {
        DashboardController {
            store,
            notifier,
            state: RefCell::new(DashboardState::default()),
            on_change,
        }
    }

    pub fn state(&self) -> Ref<'_, DashboardState> {
        self.state.borrow()
    }

    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let out = f(&mut self.state.borrow_mut());
        self.on_change.emit(());
        out
    }

    /// Fetches the full list. A failure leaves the current list and aggregates untouched.
    pub async fn refresh(&self) -> bool {
        let ticket = self.state.borrow_mut().begin_fetch();
        tracing::debug!(ticket = ticket.0, "fetching payments");

        match self.store.list_payments().await {
            Ok(payments) => {
                let count = payments.len();
                let applied = self.update(|state| state.finish_fetch(ticket, payments));
                if applied {
                    let summary = self.state.borrow().summary();
                    tracing::info!(
                        count,
                        pending = summary.pending_count,
                        revenue = %summary.total_revenue,
                        "payments loaded"
                    );
                }
                applied
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching payments");
                self.notifier.error(FETCH_FAILED);
                false
            }
        }
    }

    pub fn open_editor(&self, id: &PaymentId) -> bool {
        let opened = self.update(|state| state.open_editor(id));
        if !opened {
            tracing::warn!(%id, "payment not opened: submission in flight, not pending or no longer listed");
        }
        opened
    }

    pub fn set_amount(&self, amount: String) {
        self.update(|state| state.editor.set_amount(amount));
    }

    pub fn set_method(&self, method: PaymentMethod) {
        self.update(|state| state.editor.set_method(method));
    }

    pub fn cancel_editor(&self) -> bool {
        self.update(|state| state.editor.cancel())
    }

    /// Completes the selected payment, then refetches everything on success.
    pub async fn submit(&self, now: DateTime<Utc>) -> SubmitOutcome {
        let submission = match self.update(|state| state.editor.begin_submit(now)) {
            Ok(submission) => submission,
            Err(err) => {
                tracing::warn!(error = %err, "payment form rejected");
                self.notifier.error(err.user_message());
                return SubmitOutcome::Rejected(err);
            }
        };

        match self
            .store
            .update_payment(&submission.id, &submission.update)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    id = %submission.id,
                    amount = %submission.update.amount,
                    method = submission.update.payment_method.as_str(),
                    "payment completed"
                );
                self.update(|state| state.editor.finish_submit(true));
                self.notifier.success(PAYMENT_PROCESSED);
                self.refresh().await;
                SubmitOutcome::Completed
            }
            Err(err) => {
                tracing::error!(id = %submission.id, error = %err, "error processing payment");
                self.update(|state| state.editor.finish_submit(false));
                self.notifier.error(UPDATE_FAILED);
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub fn set_search_name(&self, search_name: String) {
        self.update(|state| state.criteria.search_name = search_name);
    }

    pub fn set_status_filter(&self, status: StatusFilter) {
        self.update(|state| state.criteria.status = status);
    }

    pub fn set_start_date(&self, date: Option<NaiveDate>) {
        self.update(|state| state.criteria.start_date = date);
    }

    pub fn set_end_date(&self, date: Option<NaiveDate>) {
        self.update(|state| state.criteria.end_date = date);
    }

    pub fn clear_filters(&self) {
        self.update(|state| state.criteria.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::payment;
    use crate::model::PaymentStatus;

    #[test]
    fn stale_fetch_results_are_dropped() {
        let mut state = DashboardState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_fetch(second, vec![payment(2, PaymentStatus::Pending, 0, None)]));
        assert!(!state.finish_fetch(first, vec![]));
        assert_eq!(state.payments().len(), 1);
        assert_eq!(state.summary().pending_count, 1);
    }

    #[test]
    fn newest_landed_result_wins_while_later_fetch_is_outstanding() {
        let mut state = DashboardState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.finish_fetch(first, vec![payment(1, PaymentStatus::Pending, 0, None)]));
        assert_eq!(state.payments().len(), 1);

        assert!(state.finish_fetch(second, vec![]));
        assert!(state.payments().is_empty());
        assert!(!state.finish_fetch(first, vec![payment(1, PaymentStatus::Pending, 0, None)]));
    }

    #[test]
    fn editor_opens_only_on_listed_pending_payments() {
        let mut state = DashboardState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(
            ticket,
            vec![
                payment(1, PaymentStatus::Pending, 0, None),
                payment(2, PaymentStatus::Cancelled, 0, None),
            ],
        );

        assert!(!state.open_editor(&PaymentId::new("2")));
        assert!(!state.open_editor(&PaymentId::new("3")));
        assert!(!state.editor().is_open());
        assert!(state.open_editor(&PaymentId::new("1")));
        assert!(state.editor().is_open());
    }

    #[test]
    fn editor_stays_on_in_flight_payment() {
        let mut state = DashboardState::default();
        let ticket = state.begin_fetch();
        state.finish_fetch(
            ticket,
            vec![
                payment(1, PaymentStatus::Pending, 0, Some("Ani")),
                payment(2, PaymentStatus::Pending, 0, Some("Budi")),
            ],
        );

        assert!(state.open_editor(&PaymentId::new("1")));
        state.editor.set_amount("50000".to_string());
        state.editor.begin_submit(Utc::now()).unwrap();

        assert!(!state.open_editor(&PaymentId::new("2")));
        assert!(state.editor().is_submitting());

        state.editor.finish_submit(false);
        let editor = state.editor();
        assert_eq!(editor.selected().map(|p| p.id.clone()), Some(PaymentId::new("1")));
        assert_eq!(editor.form().amount, "50000");
    }
}
