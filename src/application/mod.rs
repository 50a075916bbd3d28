// Application layer: the session ledger and its user-facing error channel.
// Presentation code holds a `Ledger`, calls its operations with raw text
// input and renders the returned `Summary`.

pub mod error;
pub mod ledger;
pub mod notifier;

pub use error::*;
pub use ledger::*;
pub use notifier::*;
