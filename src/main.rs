use color_eyre::Result;
use tatame_tui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let app = App::new()?;
    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();
    app_result
}
