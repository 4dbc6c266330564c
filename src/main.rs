use forkify::render::Mount;
use forkify::{AppConfig, AppState, Controller, FileBlobStore, ForkifyClient};
use log::debug;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "Usage: forkify <search QUERY [PAGE] | show ID | bookmark ID | bookmarks>";

/// Print each top-level block of the mount on its own line with whitespace collapsed
fn print_mount(mount: &Mount) {
    for node in mount.children() {
        let text = node.text_content();
        let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            println!("{}", line);
        }
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    debug!("{:#?}", config);

    let store = FileBlobStore::new(&config.storage_dir);
    let state = AppState::init(config.results_per_page, Box::new(store))?;
    let mut controller = Controller::new(state, ForkifyClient::from_config(&config));

    match args {
        [command, query] if command == "search" => {
            controller.control_search_results(query).await?;
            print_mount(controller.results_view.mount());
            print_mount(controller.pagination_view.mount());
        }
        [command, query, page] if command == "search" => {
            let page: usize = page.parse()?;
            controller.control_search_results(query).await?;
            controller.control_pagination(page);
            print_mount(controller.results_view.mount());
            print_mount(controller.pagination_view.mount());
        }
        [command] if command == "show" => {
            let id = config.default_recipe_id.clone();
            controller.control_recipes(&id).await?;
            print_mount(controller.recipe_view.mount());
        }
        [command, id] if command == "show" => {
            controller.control_recipes(id).await?;
            print_mount(controller.recipe_view.mount());
        }
        [command, id] if command == "bookmark" => {
            controller.control_recipes(id).await?;
            controller.control_keep_bookmark()?;
            print_mount(controller.bookmarks_view.mount());
        }
        [command] if command == "bookmarks" => {
            controller.control_bookmarks();
            print_mount(controller.bookmarks_view.mount());
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
