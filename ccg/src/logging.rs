use slog::{o, Drain};

pub trait Logger {
    fn logger(&mut self) -> &mut slog::Logger;
}

/// A logger writing plain records to standard error.
pub fn terminal_logger() -> slog::Logger {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    slog::Logger::root(drain, o!())
}

/// A logger that drops every record.
pub fn silent_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}
