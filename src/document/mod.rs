//! Document review workflow.
//!
//! ```text
//!              publish              review_passed
//!   [Draft] -----------> [InReview] ------------> [Published]
//!      ^                     |
//!      +---review_failed-----+
//! ```
//!
//! Only a draft accepts writes. Every other (state, action) pair is
//! answered with a message and leaves both state and content untouched.

use crate::core::{Action, Reaction, StateHistory, Workflow};
use crate::effects::{Console, Context, Stdout};
use crate::snapshot::Snapshot;
use crate::state_enum;

state_enum! {
    pub enum DocumentState {
        Draft,
        InReview,
        Published,
    }
    final: [Published]
}

/// Actions a document accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentAction {
    /// Append text to the content.
    Write(String),
    ReviewPassed,
    ReviewFailed,
    /// Submit a draft for review.
    Publish,
}

impl Action for DocumentAction {
    fn name(&self) -> &str {
        match self {
            Self::Write(_) => "write",
            Self::ReviewPassed => "review_passed",
            Self::ReviewFailed => "review_failed",
            Self::Publish => "publish",
        }
    }
}

/// Transition table of the document workflow. The data is the content.
pub struct Review;

impl Workflow for Review {
    type State = DocumentState;
    type Action = DocumentAction;
    type Data = String;

    const NAME: &'static str = "document";

    fn initial_state() -> DocumentState {
        DocumentState::Draft
    }

    fn react(
        state: &DocumentState,
        action: &DocumentAction,
        content: &mut String,
    ) -> Reaction<DocumentState> {
        use DocumentAction as A;
        use DocumentState as S;

        match (state, action) {
            (S::Draft, A::Write(text)) => {
                content.push_str(text);
                Reaction::handled(format!("draft: appended {:?}", text))
            }
            (S::Draft, A::ReviewPassed) => Reaction::rejected(
                "draft: cannot pass review, the document must be submitted for review first",
            ),
            (S::Draft, A::ReviewFailed) => {
                Reaction::ignored("draft: failing a review is not applicable to a draft")
            }
            (S::Draft, A::Publish) => {
                Reaction::transition(S::InReview, "draft: submitted for review")
            }

            (S::InReview, A::Write(_)) => {
                Reaction::rejected("in review: cannot edit a document under review")
            }
            (S::InReview, A::ReviewPassed) => {
                Reaction::transition(S::Published, "in review: review passed, document published")
            }
            (S::InReview, A::ReviewFailed) => {
                Reaction::transition(S::Draft, "in review: review failed, back to draft")
            }
            (S::InReview, A::Publish) => Reaction::ignored(
                "in review: document is already in the review/publication process",
            ),

            (S::Published, A::Write(_)) => {
                Reaction::rejected("published: cannot edit a published document")
            }
            (S::Published, A::ReviewPassed) => {
                Reaction::ignored("published: document is already published")
            }
            (S::Published, A::ReviewFailed) => {
                Reaction::rejected("published: cannot fail review on a published document")
            }
            (S::Published, A::Publish) => {
                Reaction::ignored("published: document is already published")
            }
        }
    }
}

/// A document whose editing and review behavior follows its
/// [`DocumentState`].
///
/// # Example
///
/// ```rust
/// use statecraft::document::{Document, DocumentState};
/// use statecraft::effects::Transcript;
///
/// let mut doc = Document::with_console("AAA", Transcript::new());
/// doc.write(" BBB");
/// doc.publish();
/// doc.write(" CCC");
///
/// assert_eq!(doc.state(), DocumentState::InReview);
/// assert_eq!(doc.content(), "AAA BBB");
/// ```
pub struct Document<C: Console = Stdout> {
    context: Context<Review, C>,
}

impl Document<Stdout> {
    /// Create a draft with `content` that prints to standard output.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_console(content, Stdout)
    }
}

impl<C: Console> Document<C> {
    /// Create a draft with `content` writing to `console`.
    pub fn with_console(content: impl Into<String>, console: C) -> Self {
        Self {
            context: Context::with_console(content.into(), console),
        }
    }

    /// Append `text` while in draft; rejected otherwise.
    pub fn write(&mut self, text: impl Into<String>) {
        self.context.dispatch(DocumentAction::Write(text.into()));
    }

    /// Publish a document under review.
    pub fn review_passed(&mut self) {
        self.context.dispatch(DocumentAction::ReviewPassed);
    }

    /// Send a document under review back to draft.
    pub fn review_failed(&mut self) {
        self.context.dispatch(DocumentAction::ReviewFailed);
    }

    /// Submit for review while in draft; a no-op with a message otherwise.
    pub fn publish(&mut self) {
        self.context.dispatch(DocumentAction::Publish);
    }

    /// Move directly to `state` without a handler.
    pub fn transition_to(&mut self, state: DocumentState) {
        self.context.transition_to(state);
    }

    /// Current text of the document.
    pub fn content(&self) -> &str {
        self.context.data()
    }

    /// Current workflow state.
    pub fn state(&self) -> DocumentState {
        *self.context.current_state()
    }

    /// Name of the current workflow state.
    pub fn state_name(&self) -> &str {
        self.context.state_name()
    }

    /// Every workflow transition so far.
    pub fn history(&self) -> &StateHistory<DocumentState> {
        self.context.history()
    }

    /// Console the document prints to.
    pub fn console(&self) -> &C {
        self.context.console()
    }

    /// Capture the current state and history.
    pub fn snapshot(&self) -> Snapshot<DocumentState> {
        self.context.snapshot()
    }
}
