/// Which of the two pipeline emails a dispatch refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    /// Owner-facing alert about a new submission. Critical: a failed send
    /// aborts the pipeline.
    LeadNotification,
    /// Submitter-facing confirmation. Best effort: a failed send is logged
    /// and swallowed.
    ThankYou,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Failed(String),
}

/// Typed result of one send attempt. The two dispatches of a pipeline run are
/// independent; a failed thank-you does not invalidate a sent lead.
#[derive(Debug)]
pub struct EmailDispatch {
    pub kind: EmailKind,
    pub outcome: DispatchOutcome,
}

impl EmailDispatch {
    pub fn failed(&self) -> bool {
        matches!(self.outcome, DispatchOutcome::Failed(_))
    }
}

/// Rendered subject and HTML body, ready for the dispatcher.
#[derive(Debug, Clone)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}
