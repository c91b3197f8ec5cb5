//! Terminal front end for the notes backend.
//!
//! Default backend: http://127.0.0.1:5001/api (override with NOTES_API_URL)

use notes_client::command::{Command, HELP};
use notes_client::config::Config;
use notes_client::terminal::TerminalView;
use notes_client::{ClientError, HttpNotesApi, NoteListController, NotesApi};
use std::sync::Arc;
use tokio::io::BufReader;

type Controller = NoteListController<TerminalView<BufReader<tokio::io::Stdin>, std::io::Stdout>>;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Using notes API at {}", config.api_url);

    let api: Arc<dyn NotesApi> = match config.request_timeout {
        Some(timeout) => match HttpNotesApi::with_timeout(&config.api_url, timeout) {
            Ok(api) => Arc::new(api),
            Err(e) => {
                log::error!("Failed to build HTTP client: {}", e);
                std::process::exit(1);
            }
        },
        None => Arc::new(HttpNotesApi::new(&config.api_url)),
    };

    let view = TerminalView::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    let mut controller = NoteListController::new(api, view);

    if let Err(e) = controller.start().await {
        report(&mut controller, "load notes", e);
    }
    controller.view_mut().print("Type `help` for commands.");

    loop {
        if controller.view().write_failed() {
            log::error!("Output closed, exiting");
            break;
        }

        controller.view_mut().prompt("> ");
        let Some(line) = controller.view_mut().read_line().await else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(msg) => {
                controller.view_mut().print(&msg);
                continue;
            }
        };

        let (action, result) = match command {
            Command::Quit => break,
            Command::Help => {
                controller.view_mut().print(HELP);
                continue;
            }
            Command::List => ("list notes", controller.list().await),
            Command::Reset => {
                controller.reset_form().await;
                continue;
            }
            Command::Title(text) => {
                controller.set_title(text).await;
                continue;
            }
            Command::Content(text) => {
                controller.set_content(text).await;
                continue;
            }
            Command::Save => ("save note", controller.submit().await),
            Command::Edit(id) => ("load note", controller.edit(&id).await),
            Command::Delete(id) => ("delete note", controller.delete(&id).await),
            Command::Summarize(id) => ("summarize note", controller.summarize(&id).await),
        };

        if let Err(e) = result {
            report(&mut controller, action, e);
        }
    }

    log::info!("Bye");
}

fn report(controller: &mut Controller, action: &str, e: ClientError) {
    log::error!("Failed to {}: {}", action, e);
    controller
        .view_mut()
        .print(&format!("Failed to {}: {}", action, e));
}
