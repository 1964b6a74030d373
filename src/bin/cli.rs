//! Citas CLI
//!
//! Command-line client for the clinic backend:
//! - Browse specialties, doctors and time slots
//! - Book an appointment
//! - List your appointments
//! - Open any client route through the session guard

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citas::api::{BackendStatus, HttpClient};
use citas::booking::{self, BookingForm, SubmitOutcome, TimeSlot};
use citas::config::{generate_default_config, Config, LoggingConfig};
use citas::dashboard::{DashboardView, Panel, BRAND};
use citas::listing::{self, ListingView};
use citas::login::{self, LoginForm, LoginOutcome};
use citas::routes::{resolve, Resolution, Route};
use citas::{BookingApi, Session, User};

#[derive(Parser)]
#[command(name = "citas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Book and review medical appointments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Account email
    #[arg(long, env = "CITAS_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "CITAS_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the backend is up
    Status,

    /// List specialties
    Specialties,

    /// List doctors of a specialty
    Doctors {
        /// Specialty id
        specialty_id: i64,
    },

    /// List bookable time slots
    Slots,

    /// Render a client route (/login, /dashboard, /nueva-cita, /mis-citas)
    Open {
        /// Route path
        #[arg(default_value = "/")]
        path: String,
    },

    /// Book an appointment
    Book {
        /// Specialty id
        #[arg(long)]
        specialty: i64,
        /// Doctor id
        #[arg(long)]
        doctor: i64,
        /// Date (YYYY-MM-DD), tomorrow at the earliest
        #[arg(long)]
        date: NaiveDate,
        /// Time slot (HH:MM)
        #[arg(long)]
        time: TimeSlot,
        /// Reason for the visit
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// List my appointments
    List,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken config file is fatal rather than silently replaced by defaults
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);

    let api = HttpClient::new(&config.api)?;
    let today = chrono::Local::now().date_naive();
    let has_credentials = cli.email.is_some() || cli.password.is_some();
    let credentials = LoginForm::new(
        cli.email.clone().unwrap_or_default(),
        cli.password.clone().unwrap_or_default(),
    );

    match cli.command {
        Commands::Status => {
            let status = check_status(&api).await?;
            println!("{} ({})", status.message, status.status);
        }

        Commands::Specialties => {
            let specialties = api.specialties().await?;
            if specialties.is_empty() {
                println!("No specialties available.");
            } else {
                println!("{:<6} {:<24} {}", "ID", "Especialidad", "Descripción");
                println!("{}", "-".repeat(60));
                for s in specialties {
                    println!(
                        "{:<6} {:<24} {}",
                        s.id,
                        s.nombre,
                        s.descripcion.as_deref().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Doctors { specialty_id } => {
            let doctors = api.doctors(specialty_id).await?;
            if doctors.is_empty() {
                println!("No doctors for specialty {}.", specialty_id);
            } else {
                println!("{:<6} {:<28} {}", "ID", "Doctor", "Teléfono");
                println!("{}", "-".repeat(50));
                for d in doctors {
                    println!(
                        "{:<6} {:<28} {}",
                        d.id,
                        d.nombre,
                        d.telefono.as_deref().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Slots => {
            for slot in TimeSlot::ALL {
                println!("{}  {}", slot.value(), slot.label());
            }
        }

        Commands::Open { path } => {
            let mut session = Session::new();
            if has_credentials {
                sign_in(&api, credentials, &mut session).await?;
            }

            let resolution = resolve(&path, &session);
            if let Resolution::Redirect(route) = resolution {
                println!("→ {}", route);
            }
            render(&api, &session, resolution.route(), today).await?;
        }

        Commands::Book {
            specialty,
            doctor,
            date,
            time,
            reason,
        } => {
            let mut session = Session::new();
            let user = sign_in(&api, credentials, &mut session).await?;

            let mut form = BookingForm::new();
            booking::load_specialties(&api, &mut form).await;
            if !form.specialties().iter().any(|s| s.id == specialty) {
                bail!(form
                    .error()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Unknown specialty {}", specialty)));
            }

            booking::choose_specialty(&api, &mut form, Some(specialty)).await;
            if let Some(message) = form.error() {
                bail!("{}", message);
            }
            form.select_doctor(Some(doctor))?;
            form.set_date(Some(date), today)?;
            form.set_slot(Some(time));
            form.set_reason(reason);

            match booking::submit(&api, &mut form, &user, today).await? {
                SubmitOutcome::Created { cita_id, message } => {
                    match cita_id {
                        Some(id) => println!("{} (#{})", message, id),
                        None => println!("{}", message),
                    }
                    println!("→ {}", Route::Dashboard);
                }
                SubmitOutcome::Failed { message } => bail!("{}", message),
            }
        }

        Commands::List => {
            let view = my_appointments(&api, credentials).await?;
            print_listing(view);
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("citas={}", logging.level)));

    // Logs go to stderr so table output stays clean
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn sign_in(
    api: &HttpClient,
    mut form: LoginForm,
    session: &mut Session,
) -> anyhow::Result<User> {
    match login::sign_in(api, &mut form, session).await? {
        LoginOutcome::SignedIn { user, .. } => Ok(user),
        LoginOutcome::Failed { message } => bail!("{}", message),
    }
}

async fn check_status(api: &HttpClient) -> anyhow::Result<BackendStatus> {
    api.status()
        .await
        .with_context(|| format!("Backend status check failed at {}", api.base_url()))
}

/// Sign in and load the listing; a failed load is an error
async fn my_appointments(api: &HttpClient, credentials: LoginForm) -> anyhow::Result<ListingView> {
    let mut session = Session::new();
    let user = sign_in(api, credentials, &mut session).await?;
    let state = listing::load_appointments(api, user.usuario_id).await;
    if let Some(message) = state.failure() {
        bail!("{}", message);
    }
    Ok(state.view())
}

/// Print a screen the way the browser would show it. A screen whose data
/// failed to load is an error.
async fn render(
    api: &HttpClient,
    session: &Session,
    route: Route,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let user = match (route, session.user()) {
        (Route::Login, _) | (_, None) => {
            println!("{} - Iniciar sesión", BRAND);
            println!("Use --email and --password (or CITAS_EMAIL / CITAS_PASSWORD).");
            return Ok(());
        }
        (_, Some(user)) => user,
    };

    println!("{} | {} [Salir]", BRAND, user.display_name());
    println!();

    match route {
        Route::Login => {}
        Route::Dashboard => {
            let view = DashboardView::for_user(user);
            println!("{}", view.greeting);
            println!("{}", view.title);
            for panel in view.panels {
                println!();
                match panel {
                    Panel::Action {
                        title,
                        description,
                        link_label,
                        route,
                    } => {
                        println!("  {}", title);
                        println!("  {}", description);
                        println!("  [{}] → {}", link_label, route);
                    }
                    Panel::Info { title, lines } => {
                        println!("  {}", title);
                        for line in lines {
                            println!("  {}", line);
                        }
                    }
                }
            }
        }
        Route::NewAppointment => {
            let mut form = BookingForm::new();
            booking::load_specialties(api, &mut form).await;

            println!("Agendar Nueva Cita");
            if let Some(error) = form.error() {
                bail!("{}", error);
            }
            println!("  Especialidades:");
            for s in form.specialties() {
                println!("    {:<4} {}", s.id, s.nombre);
            }
            println!("  Fecha mínima: {}", booking::min_date(today));
            let slots: Vec<String> = TimeSlot::ALL.iter().map(TimeSlot::label).collect();
            println!("  Horas: {}", slots.join(", "));
        }
        Route::MyAppointments => {
            println!("Mis Citas Médicas");
            let state = listing::load_appointments(api, user.usuario_id).await;
            if let Some(message) = state.failure() {
                bail!("{}", message);
            }
            print_listing(state.view());
        }
    }

    Ok(())
}

fn print_listing(view: ListingView) {
    match view {
        ListingView::Loading => println!("Cargando citas..."),
        ListingView::Error(message) => println!("{}", message),
        ListingView::Empty => {
            println!("No tienes citas programadas");
            println!("Agenda tu primera cita médica: citas book --help");
        }
        ListingView::Table(rows) => {
            println!(
                "{:<42} {:<22} {:<20} {:<12} {}",
                "Fecha y Hora", "Doctor", "Especialidad", "Estado", "Motivo"
            );
            println!("{}", "-".repeat(110));
            for row in rows {
                println!(
                    "{:<42} {:<22} {:<20} {:<12} {}",
                    row.fecha, row.doctor, row.especialidad, row.estado, row.motivo
                );
            }
        }
    }
}
