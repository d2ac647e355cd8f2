//! Alert message construction.

/// Subject line of every health alert.
pub const ALERT_SUBJECT: &str = "[ALERT CHECK HEALTH]";

/// A single alert, built per failure and discarded after publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

impl Alert {
    /// Build the alert for a failed endpoint.
    ///
    /// The body is `HEALTH >> FAIL (<name>)`, followed by ` - Status Code: <code>`
    /// and/or ` - Error: <error>` for whichever details are present.
    pub fn failure(name: &str, status_code: Option<u16>, error: Option<&str>) -> Self {
        Self {
            subject: ALERT_SUBJECT.to_string(),
            body: failure_line(name, status_code, error),
        }
    }
}

/// Render the `HEALTH >> FAIL` line shared by alerts and probe logs.
pub fn failure_line(name: &str, status_code: Option<u16>, error: Option<&str>) -> String {
    let mut line = format!("HEALTH >> FAIL ({name})");
    if let Some(code) = status_code {
        line.push_str(&format!(" - Status Code: {code}"));
    }
    if let Some(error) = error {
        line.push_str(&format!(" - Error: {error}"));
    }
    line
}
