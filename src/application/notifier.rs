use super::LedgerError;

/// Title shown with every user-facing warning.
pub const WARNING_TITLE: &str = "Warning";

/// Synchronous warning channel: show a message and return once the user
/// has acknowledged it.
pub trait Notifier {
    fn warn(&mut self, title: &str, message: &str);
}

/// Route a rejected operation to the warning channel.
/// Returns the successful value, or `None` after the user was warned.
pub fn report<T>(result: Result<T, LedgerError>, notifier: &mut dyn Notifier) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            notifier.warn(WARNING_TITLE, &err.to_string());
            None
        }
    }
}
