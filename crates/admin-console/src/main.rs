use admin_api::{FormPayload, ReqwestGateway};
use admin_config::{AppConfig, SessionStore};
use admin_store::AdminStore;
use anyhow::{Context, Result};
use serde_json::Value;

mod logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let log_file = logger::init()?;

    log::info!("Starting admin-console, logging to {}", log_file.display());

    let mut config = AppConfig::load();
    if let Ok(api_url) = std::env::var("ADMIN_API_URL") {
        config = config.with_api_url(api_url);
    }

    let session = SessionStore::load().context("Failed to load session")?;
    if session.is_secure() && !config.is_https() {
        log::warn!(
            "Session is marked secure but {} is not https",
            config.api_url
        );
    }

    let gateway = ReqwestGateway::new(&config.api_url, &config.api_base);
    let store = AdminStore::new(gateway, session.clone());

    if session.token().is_none() {
        sign_in_from_env(&store, &session, &config).await?;
    }

    let check = store
        .check_session_token()
        .await
        .context("Could not reach the admin API")?;
    if !check.success() {
        session.clear()?;
        eprintln!(
            "Session rejected: {}",
            check.message().unwrap_or("no message")
        );
        return Ok(());
    }

    store.update_time();
    store.get_users_data(&[]).await;

    let state = store.state();
    let info = &state.common_info;
    println!("{}", state.current_time);
    println!(
        "courses: {} active, {} completed, {} rejected",
        info.courses.active_courses, info.courses.completed_courses, info.courses.rejected_courses
    );
    println!(
        "subscriptions: {} (PSY {}, Avocado {})",
        info.subs.all_subs, info.subs.psy, info.subs.avocado
    );
    println!(
        "users: {} (PSY {}, Avocado {})",
        info.users.all_users, info.users.psy, info.users.avocado
    );

    log::info!("Exiting admin-console");
    Ok(())
}

/// Sign in with ADMIN_LOGIN / ADMIN_PASSWORD and store the token
async fn sign_in_from_env(
    store: &AdminStore,
    session: &SessionStore,
    config: &AppConfig,
) -> Result<()> {
    let (Ok(login), Ok(password)) = (
        std::env::var("ADMIN_LOGIN"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        log::warn!("No session token and no ADMIN_LOGIN/ADMIN_PASSWORD set");
        return Ok(());
    };

    let credentials: FormPayload = [("login", login), ("password", password)]
        .into_iter()
        .collect();
    let response = store.sign_in(credentials).await.context("Sign-in failed")?;

    let token = response
        .data()
        .and_then(|data| data.get("session_token"))
        .and_then(Value::as_str);
    match token {
        Some(token) => {
            session.set_token(token, config.session_ttl_days, config.secure_session)?;
            log::info!("Signed in, session stored");
        }
        None => log::error!(
            "Sign-in rejected: {}",
            response.message().unwrap_or("no message")
        ),
    }
    Ok(())
}
