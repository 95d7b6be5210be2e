use chrono::Utc;
use dotenvy::dotenv;

use evently_client::analytics::tickets_sold;
use evently_client::models::Role;
use evently_client::utils::pagination;
use evently_client::workflows::{admin, dashboard};
use evently_client::{ApiClient, Config, SessionStore};

const PAGE_SIZE: usize = 5;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let store = SessionStore::new(&config.session_file);

    let user = match store.require() {
        Ok(user) => user,
        Err(err) => {
            err.log();
            std::process::exit(1);
        }
    };

    tracing::info!(user = %user.id, role = ?user.role, "Session loaded");

    let client = ApiClient::new(&config, user.clone()).expect("Failed to build API client");

    let result = match user.role {
        Role::Attendee => show_attendee_dashboard(&client).await,
        Role::Organizer => show_organizer_analytics(&client).await,
        Role::Admin => show_admin_overview(&client).await,
    };

    if let Err(err) = result {
        err.log();
        std::process::exit(1);
    }
}

async fn show_attendee_dashboard(
    client: &ApiClient,
) -> Result<(), evently_client::AppError> {
    let snapshot = dashboard::attendee_dashboard(client, Utc::now()).await?;
    tracing::info!(
        upcoming = snapshot.upcoming.len(),
        booked = snapshot.booked.len(),
        notifications = snapshot.notifications.len(),
        "Dashboard loaded"
    );
    for event in &snapshot.upcoming {
        println!(
            "{} - {} at {} ({})",
            event.date.format("%Y-%m-%d"),
            event.title,
            event.venue,
            event.time
        );
    }
    Ok(())
}

async fn show_organizer_analytics(
    client: &ApiClient,
) -> Result<(), evently_client::AppError> {
    let analytics =
        evently_client::analytics::organizer_analytics(client, client.session().id).await?;
    for entry in &analytics {
        println!(
            "{}: rating {:.1}, {} tickets sold, {} attendees",
            entry.event.title,
            entry.average_rating,
            tickets_sold(&entry.event),
            entry.roster.len()
        );
    }
    let report = evently_client::report::build_report(&analytics);
    let mut stdout = std::io::stdout();
    evently_client::report::render_text(&report, &mut stdout)
        .map_err(evently_client::AppError::Io)?;
    Ok(())
}

async fn show_admin_overview(client: &ApiClient) -> Result<(), evently_client::AppError> {
    let organizers = admin::list_organizers(client).await?;
    let pages = pagination::page_count(organizers.len(), PAGE_SIZE);
    for organizer in pagination::paginate(&organizers, 1, PAGE_SIZE) {
        println!("{} ({})", organizer.full_name(), organizer.email);
    }
    if pages > 1 {
        println!("... page 1 of {pages}");
    }
    let overview = admin::all_events_overview(client).await?;
    tracing::info!(events = overview.len(), "All-events overview loaded");
    Ok(())
}
