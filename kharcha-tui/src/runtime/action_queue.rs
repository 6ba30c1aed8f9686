use kharcha_client::ReportPeriod;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work enqueued by key handlers and drained by the event loop. Fetching
/// actions carry the generation stamped when the user triggered them, so a
/// response from a superseded trigger is ignored.
#[derive(Debug, Clone)]
pub(super) enum Action {
    SubmitLogin,
    SubmitExpense,
    OpenExpenses {
        period: ReportPeriod,
        generation: u64,
    },
    GenerateReport {
        period: ReportPeriod,
        generation: u64,
    },
    Logout,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
