//! Report generation — orchestration loop, suggestion schema, sessions, and
//! the accordion view model.

pub mod accordion;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod session;
pub mod suggestion;
