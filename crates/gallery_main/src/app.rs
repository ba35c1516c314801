//! Application main loop
//!
//! Terminal front end: renders the gallery as log lines, reads commands
//! from stdin, and feeds them to the controller as input events. Preview
//! rendering is synchronous here, so every shown preview is acknowledged
//! right after the event that triggered it.

use anyhow::{Context, Result};
use gallery_core::{
    ClickTarget, GalleryConfig, GalleryController, InputEvent, Key, PhotoId, RenderSurface,
};
use gallery_db::SqliteFavorites;
use gallery_fs::ImageScanner;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Render surface backed by the terminal.
///
/// Thumbnails and badges become log lines, the preview is printed to
/// stdout, and confirmation prompts read one line from stdin.
struct TerminalSurface;

impl RenderSurface for TerminalSurface {
    fn render_thumbnail(&self, index: usize, id: &PhotoId) {
        tracing::debug!(index, photo = %id, "thumbnail");
    }

    fn render_preview(&self, index: usize, id: &PhotoId) {
        println!("[{index}] {id}");
    }

    fn set_spinner(&self, active: bool) {
        tracing::debug!(active, "spinner");
    }

    fn mark_favorite_badge(&self, id: &PhotoId, active: bool) {
        let badge = if active { "*" } else { " " };
        tracing::debug!(photo = %id, badge, "favorite badge");
    }

    fn prefetch(&self, id: &PhotoId) {
        tracing::debug!(photo = %id, "prefetch");
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("y")
    }
}

/// Run the application
pub fn run(config: GalleryConfig) -> Result<()> {
    let directory = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(run_gallery(config, &directory))
}

async fn run_gallery(config: GalleryConfig, directory: &Path) -> Result<()> {
    let pool = gallery_db::init().context("failed to open favorites database")?;
    let backend = Arc::new(SqliteFavorites::new(pool));
    let surface = Arc::new(TerminalSurface);

    let mut controller = GalleryController::new(surface, backend, &config);

    let scanner = ImageScanner::new(config.scan.extensions.clone());
    let count = controller
        .load_directory(&scanner, directory)
        .with_context(|| format!("failed to scan {}", directory.display()))?;
    println!("Loaded {count} photos from {}", directory.display());

    if let Err(e) = controller.initialize_favorites().await {
        tracing::warn!("favorites unavailable: {e}");
    }

    print_help();

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(line.trim()) {
            Action::Input(event) => {
                controller.handle_input(event);
                // The terminal shows previews synchronously.
                if let Some(index) = controller.active_index() {
                    controller.preview_loaded(index);
                }
            }
            Action::Export(destination) => {
                let _ = controller.export_favorites(&destination).await;
            }
            Action::Clear => {
                let _ = controller.clear_favorites().await;
            }
            Action::List => {
                for id in controller.favorites().favorite_ids() {
                    println!("{id}");
                }
            }
            Action::Help => print_help(),
            Action::Quit => break,
            Action::Unknown => println!("Unknown command. Type 'help' for a list."),
            Action::None => {}
        }
    }

    tracing::info!("FaveGallery shutting down");
    Ok(())
}

enum Action {
    Input(InputEvent),
    Export(PathBuf),
    Clear,
    List,
    Help,
    Quit,
    Unknown,
    None,
}

fn parse_line(line: &str) -> Action {
    let mut parts = line.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let argument = parts.next().map(str::trim);

    match (command, argument) {
        ("", None) => Action::None,
        ("open", Some(arg)) => match arg.parse::<usize>() {
            Ok(index) => Action::Input(InputEvent::Click(ClickTarget::Thumbnail(index))),
            Err(_) => Action::Unknown,
        },
        ("close", None) => Action::Input(InputEvent::key(Key::Escape)),
        ("next", None) => Action::Input(InputEvent::Click(ClickTarget::NextControl)),
        ("prev", None) => Action::Input(InputEvent::Click(ClickTarget::PrevControl)),
        ("fav", None) => Action::Input(InputEvent::key(Key::Char('l'))),
        ("fav", Some(path)) => Action::Input(InputEvent::CheckboxChanged(PhotoId::from(path))),
        ("export", Some(path)) => Action::Export(PathBuf::from(path)),
        ("clear", None) => Action::Clear,
        ("list", None) => Action::List,
        ("help", None) => Action::Help,
        ("quit", None) | ("q", None) => Action::Quit,
        _ => Action::Unknown,
    }
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 open <n>      open the preview at thumbnail n\n\
         \x20 next / prev   navigate with wrap-around\n\
         \x20 close         close the preview\n\
         \x20 fav           toggle favourite for the shown photo\n\
         \x20 fav <path>    toggle favourite for a photo by path\n\
         \x20 list          list favourites\n\
         \x20 export <dir>  copy favourites into a directory\n\
         \x20 clear         remove all favourites\n\
         \x20 quit          exit"
    );
}
