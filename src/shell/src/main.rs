use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::{self, Stdout, Write};
use students_ui::{
    config::AppConfig,
    http_client::ApiClient,
    input::{Input, parse_input},
    session::Session,
    terminal::Terminal,
};
use students_ui_core::Event;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!("using students API at {}", config.api.prefix());

    let client = ApiClient::new(&config.api)?;
    let mut session = Session::new(client);
    let mut terminal = Terminal::new(io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    session.dispatch(Event::Initialize);
    redraw(&mut session, &mut terminal)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    break;
                };
                match parse_input(&line, &session.view().selector) {
                    Input::Quit => break,
                    Input::Select(name) => session.dispatch(Event::SelectDepartment { name }),
                    Input::Unknown(name) => terminal
                        .notice(&format!("Département inconnu : {name}"))
                        .context("failed to write to stdout")?,
                }
            }
            completion = session.complete_next(), if session.has_pending() => completion?,
        }

        redraw(&mut session, &mut terminal)?;
    }

    if session.has_pending() {
        info!("leaving with {} request(s) in flight", session.pending());
    }

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()));

    // stdout carries the view
    builder.target(Target::Stderr).init();

    info!("students-ui version: {}", env!("CARGO_PKG_VERSION"));
}

fn redraw(session: &mut Session, terminal: &mut Terminal<Stdout>) -> Result<()> {
    if session.take_render() {
        terminal
            .draw(&session.view())
            .context("failed to write to stdout")?;
    }
    Ok(())
}
