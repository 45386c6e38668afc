//! OpenAI-compatible completion client.
//!
//! [`OpenAI`] implements the core [`Completion`](ocore::Completion)
//! trait over the chat completions HTTP API. Any service speaking the
//! same wire format works through a custom endpoint.

pub use http::{DEFAULT_ENDPOINT, OpenAI};
pub use request::Request;
pub use response::{Choice, ChoiceMessage, Response};
pub use reqwest::{self, Client};

mod http;
mod request;
mod response;
