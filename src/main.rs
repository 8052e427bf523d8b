use actix_cors::Cors;
use actix_governor::Governor;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use diesel::SqliteConnection;
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use feedline::{
    api,
    config::AppConfig,
    models::{
        session::Session,
        user::{NewUser, User},
    },
    observability::{self, ObservabilityConfig},
    security, initialize_db_pool, DbPool, MIGRATIONS,
};
use std::io::{self, BufRead};

/// CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Create a new user interactively, then exit
    #[clap(long)]
    create_user: bool,
}

fn main() -> io::Result<()> {
    dotenv().ok();
    observability::init_logging(&ObservabilityConfig::from_env());

    let args = Args::parse();
    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let db_pool = initialize_db_pool(&config.db_path).map_err(io::Error::other)?;
    let mut conn = db_pool.get().map_err(io::Error::other)?;

    tracing::info!("Running database migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| io::Error::other(e.to_string()))?;

    if args.create_user {
        return cli_create_user(&mut conn);
    }

    match Session::cleanup_expired(&mut conn) {
        Ok(removed) => tracing::info!(removed, "Removed expired sessions"),
        Err(e) => tracing::warn!(error = %e, "Failed to clean up expired sessions"),
    }
    drop(conn);

    run_server(config, db_pool)
}

fn cli_create_user(conn: &mut SqliteConnection) -> io::Result<()> {
    println!("\nEnter user login email:");
    let mut email = String::new();
    io::stdin().lock().read_line(&mut email)?;
    let email = email.trim();

    if let Err(e) = security::validation::validate_email(email) {
        println!("{}", e);
        return Ok(());
    }

    println!("Enter password:");
    let password = rpassword::read_password()?;
    println!("Enter password again:");
    let password2 = rpassword::read_password()?;

    if password.trim() != password2.trim() {
        println!("Passwords do not match");
        return Ok(());
    }

    let new_user = NewUser {
        email: email.to_string(),
        password: password.trim().to_string(),
    };

    match User::create(conn, &new_user) {
        Ok(user) => println!("User created successfully (id={})", user.id),
        Err(e) => println!("Failed to create user: {:?}", e),
    }
    Ok(())
}

#[actix_web::main]
async fn run_server(config: AppConfig, db_pool: DbPool) -> io::Result<()> {
    let invalid_limits =
        || io::Error::new(io::ErrorKind::InvalidInput, "rate limits must be non-zero");
    let general_rate_limiter =
        security::create_rate_limiter(config.rate_limit_per_second, config.rate_limit_burst)
            .ok_or_else(invalid_limits)?;
    let auth_rate_limiter = security::create_auth_rate_limiter().ok_or_else(invalid_limits)?;

    tracing::info!(
        "Starting server at http://{}:{}",
        config.bind_address,
        config.port
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::new(
                middleware::TrailingSlash::Trim,
            ))
            .wrap(security::SecurityHeaders)
            .wrap(cors)
            .app_data(web::Data::new(db_pool.clone()))
            .service(api::health::routes()) // Health checks (no rate limiting)
            .service(api::session::login_resource().wrap(Governor::new(&auth_rate_limiter)))
            .service(
                web::scope("")
                    .wrap(Governor::new(&general_rate_limiter))
                    .configure(api::routes::configure),
            )
    })
    .workers(config.workers)
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
