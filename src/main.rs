//! Interactive console front-end over the report session library.

use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use config::Config;
use dotenvy::dotenv;
use validator::Validate;

use usage_reports::client::HttpReportClient;
use usage_reports::domain::report::ReportResult;
use usage_reports::forms::search::SearchForm;
use usage_reports::models::auth::StaticCredential;
use usage_reports::models::config::AppConfig;
use usage_reports::pagination::PageWindow;
use usage_reports::services::session::{ReportSession, SessionState};

#[derive(Parser, Debug)]
#[command(
    name = "usage-reports",
    about = "Query subscriber usage reports and page through the results",
    version
)]
struct Args {
    /// First day of the reporting period (YYYY-MM-DD)
    #[arg(long)]
    start_date: NaiveDate,

    /// Last day of the reporting period (YYYY-MM-DD)
    #[arg(long)]
    end_date: NaiveDate,

    /// Subscriber name filter; omit to cover all subscribers
    #[arg(long, default_value = "")]
    subscriber: String,

    /// Report type: summary or detailed
    #[arg(long, default_value = "summary")]
    report_type: String,

    /// Page to fetch first
    #[arg(long)]
    page: Option<usize>,

    /// Rows per page (configured default when omitted)
    #[arg(long)]
    page_size: Option<usize>,

    /// Print a single page and exit instead of prompting for navigation
    #[arg(long)]
    no_prompt: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    let app_config = load_config();

    let token = match app_config.bearer_token.clone() {
        Some(token) => token,
        None => {
            log::error!(
                "No bearer token configured: set APP_BEARER_TOKEN or `bearer_token` in config"
            );
            std::process::exit(1);
        }
    };

    let form = match build_form(&args, &app_config) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Invalid search input: {err}");
            std::process::exit(1);
        }
    };

    let client = match HttpReportClient::new(&app_config, Arc::new(StaticCredential::new(token))) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Failed to build the report client: {err}");
            std::process::exit(1);
        }
    };

    let session = ReportSession::new(client, app_config.date_range_check);

    let state = match session.submit(form.to_query_params()).await {
        Ok(state) => state,
        Err(err) => {
            log::error!("Invalid query: {err}");
            std::process::exit(1);
        }
    };
    render(&state);

    if !args.no_prompt {
        prompt_loop(&session, state).await;
    }
}

fn load_config() -> AppConfig {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {err}");
            std::process::exit(1);
        }
    }
}

fn build_form(args: &Args, app_config: &AppConfig) -> Result<SearchForm, usage_reports::forms::FormError> {
    let mut form = SearchForm::new(args.start_date, args.end_date);

    form.set_field("subscriberName", &args.subscriber)?;
    form.set_field("reportType", &args.report_type)?;

    let page_size = args.page_size.unwrap_or(app_config.page_size);
    form.set_field("pageSize", &page_size.to_string())?;

    // Page last: filter edits above reset it to 1.
    if let Some(page) = args.page {
        form.set_field("page", &page.to_string())?;
    }

    form.validate()?;

    Ok(form)
}

async fn prompt_loop<F>(session: &ReportSession<F>, mut state: SessionState)
where
    F: usage_reports::client::ReportFetcher,
{
    let stdin = io::stdin();

    loop {
        let Some(current_page) = state.displayed_page() else {
            break;
        };

        print!("[n]ext, [p]rev, [g]oto N, [q]uit > ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        let target = match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["q"] => break,
            ["n"] => current_page + 1,
            ["p"] => current_page.saturating_sub(1).max(1),
            ["g", number] => match number.parse() {
                Ok(page) => page,
                Err(_) => {
                    println!("Not a page number: {number}");
                    continue;
                }
            },
            [] => continue,
            _ => {
                println!("Unknown command: {input}");
                continue;
            }
        };

        state = match session.go_to_page(target).await {
            Ok(state) => state,
            Err(err) => {
                log::error!("Invalid query: {err}");
                break;
            }
        };
        render(&state);
    }
}

fn render(state: &SessionState) {
    match state {
        SessionState::Success { result, .. } => render_report(result),
        SessionState::Error { message, .. } => eprintln!("error: {message}"),
        SessionState::Idle | SessionState::Loading(_) => {}
    }
}

fn render_report(report: &ReportResult) {
    println!();
    println!(
        "Usage report ({}) {} to {}",
        report.report_type, report.start_date, report.end_date
    );
    if let Some(subscriber) = &report.subscriber_name {
        println!("Subscriber: {subscriber}");
    }
    if let Some(address) = &report.company_address {
        println!("Address: {address}");
    }
    println!();

    let product_header = "Product description";
    let width = report
        .rows
        .iter()
        .map(|row| row.product_description.len())
        .chain([product_header.len()])
        .max()
        .unwrap_or(0);

    println!("{product_header:<width$}  {:>12}", "Searches");
    println!("{}", "-".repeat(width + 14));
    for row in &report.rows {
        if row.is_total() {
            println!("{}", "-".repeat(width + 14));
        }
        println!(
            "{:<width$}  {:>12}",
            row.product_description, row.search_count
        );
    }

    if let Some(info) = report.pagination {
        println!();
        println!(
            "Page {} of {} ({} records)",
            info.page, info.total_pages, info.total_records
        );
        println!("{}", window_line(info.page, info.total_pages));
    }
    println!();
}

fn window_line(page: usize, total_pages: usize) -> String {
    PageWindow::new(page, total_pages)
        .pages
        .iter()
        .map(|entry| match entry {
            Some(n) if *n == page => format!("[{n}]"),
            Some(n) => n.to_string(),
            None => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
