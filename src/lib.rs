//! # agri-qa
//!
//! Natural-language question answering over Indian state agriculture and
//! rainfall data.
//!
//! A question is classified by ordered regex intent patterns, its states,
//! crops and years are pulled out by vocabulary matching, and an
//! [`AnswerGenerator`](answer::AnswerGenerator) builds a textual answer with
//! structured data and citations. The same [`QaSystem`] backs the HTTP API
//! and the interactive console.

pub mod answer;
pub mod config;
pub mod console;
pub mod data;
pub mod error;
pub mod http_server;
pub mod logging;
pub mod nlp;
pub mod qa;

pub use answer::{Answer, AnswerData};
pub use data::DataStore;
pub use error::{Error, Result};
pub use qa::QaSystem;
