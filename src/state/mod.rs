//! Application state machines
//!
//! - QuizInteractionEngine: selections, mode and score for one quiz
//! - GenerationSession: URL submission and quiz generation lifecycle
//! - HistoryBrowser: history list and stored-quiz lifecycle
//! - ViewRouter: active top-level tab
//!
//! None of these perform I/O. Operations that need the network return a
//! request descriptor carrying a [`RequestToken`]; the outcome is fed back
//! with the same token.

pub mod engine;
pub mod generation;
pub mod history;
pub mod request;
pub mod router;

pub use engine::{
    explanation_visible, option_disclosure, InteractionMode, OptionDisclosure,
    QuizInteractionEngine,
};
pub use generation::{GenerateRequest, GenerationFailure, GenerationSession, GenerationState};
pub use history::{DetailRequest, HistoryBrowser, HistoryState, ListRequest};
pub use request::{RequestGeneration, RequestToken};
pub use router::{Tab, ViewRouter};
