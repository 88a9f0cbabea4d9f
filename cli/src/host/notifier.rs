use engine::host::Notifier;

/// Prints confirmations to stdout and errors to stderr, and logs both.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        log::info!("{message}");
        println!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
        eprintln!("Error: {message}");
    }
}
