use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::{Config, Credentials};
use crate::presence::{is_in_scheduled_window, ZoomPresenceQuery};
use crate::zoom::ZoomApiClient;

/// Prints the user's scheduled meetings, marking those whose scheduled
/// window contains the current time.
pub async fn handle_meetings_command() -> Result<()> {
    let config = Config::load()?;
    let credentials = Credentials::from_env()?;
    let client = ZoomApiClient::new(&credentials, &config.zoom)?;

    let user = client
        .find_user_by_email(&credentials.user_email)
        .await
        .context("Failed to resolve Zoom user")?;

    let query = ZoomPresenceQuery::new(client);
    let meetings = query.scheduled_meetings(&user).await?;

    if meetings.is_empty() {
        println!("No scheduled meetings for {}", user.email);
        return Ok(());
    }

    let now = Utc::now();
    for meeting in &meetings {
        let marker = if is_in_scheduled_window(meeting, now) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:>12}  {:<20}  {}",
            marker,
            meeting.id,
            meeting.start_time.as_deref().unwrap_or("-"),
            meeting.topic
        );
    }
    println!();
    println!("* scheduled window contains the current time");

    Ok(())
}
