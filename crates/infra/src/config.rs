use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Path to the file in which pending reminders are persisted
    pub reminder_file_path: PathBuf,
    /// How often the scheduler loop polls for due reminders
    pub poll_interval: Duration,
    /// Upper bound on a single delivery attempt. A gateway that stalls
    /// longer than this counts as a failed delivery.
    pub delivery_timeout: Duration,
    /// Webhook endpoint that receives due reminders. When unset, every
    /// recipient is unresolvable and deliveries fail.
    pub webhook_url: Option<String>,
    /// Shared key sent along with every webhook notification
    pub webhook_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let reminder_file_path = std::env::var("REMINDER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("reminders.json"));

        let poll_interval = Duration::from_secs(parse_secs_var("POLL_INTERVAL_SECS", 1));
        let delivery_timeout = Duration::from_secs(parse_secs_var("DELIVERY_TIMEOUT_SECS", 10));

        let webhook_url = std::env::var("WEBHOOK_URL").ok();
        let webhook_key = std::env::var("WEBHOOK_KEY").ok();

        Self {
            port,
            reminder_file_path,
            poll_interval,
            delivery_timeout,
            webhook_url,
            webhook_key,
        }
    }
}

fn parse_secs_var(name: &str, default: u64) -> u64 {
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            warn!(
                "The given {}: {} is not a valid number of seconds, falling back to the default: {}.",
                name, value, default
            );
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
