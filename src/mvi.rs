//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow: the view emits intents, a reducer computes the
//! next state snapshot, observers re-render from the published snapshot.
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect?) ──→ View
//!    ↑                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! Reducers here are pure: they never perform I/O or touch the clock.
//! Anything asynchronous (a simulated fetch, a timer) is described as an
//! `Effect` value returned alongside the new state; the controller that owns
//! the state schedules the effect and feeds its result back in as another
//! intent. This keeps every transition testable as a plain function call.

/// Marker trait for state snapshots.
///
/// A snapshot is an immutable value: transitions replace the whole snapshot
/// rather than mutating it in place, so concurrent observers always see a
/// consistent aggregate.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// An intent is a discrete action value: a user action (key press, menu
/// choice) or a system event (a completed fetch, a timer firing) that the
/// reducer consumes to produce the next snapshot.
pub trait Intent: Send + 'static {}

/// Pure state-transition function.
///
/// `reduce` is the only place transitions happen. It returns the next
/// snapshot plus an optional effect describing asynchronous work the owning
/// controller must schedule on behalf of this transition.
pub trait Reducer {
    /// The snapshot type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Asynchronous work requested by a transition.
    type Effect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
