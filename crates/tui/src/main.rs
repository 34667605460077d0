use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use directories::ProjectDirs;
use gr_fields::app::App;
use gr_fields::{logging, Config};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "gr-fields", "gr-fields")
}

fn get_config_path(dirs: Option<&ProjectDirs>) -> PathBuf {
    match dirs {
        Some(proj_dirs) => proj_dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config/default.toml"),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let dirs = project_dirs();
    let config_path = get_config_path(dirs.as_ref());
    let mut config = Config::load_or_default(&config_path);
    config.apply_env_overrides();

    let log_path = logging::init(&config.logging, dirs.as_ref().map(|d| d.data_dir()));
    tracing::info!(
        config = %config_path.display(),
        log = ?log_path,
        "Starting gr-fields"
    );

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let mut app = App::new(config);
    app.init();

    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(&mut terminal, &mut app);

    let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();
    tracing::info!("Exiting gr-fields");

    result
}

fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;

            if let Ok(should_quit) = app.handle_event(event) {
                if should_quit {
                    break;
                }
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
