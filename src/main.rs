use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use freeness_tui::app::App;
use freeness_tui::config::Config;
use freeness_tui::state::Route;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("freeness-tui")
        .version(crate_version!())
        .about("Onboard onto the Freeness freelance marketplace from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("route")
                .short("r")
                .long("route")
                .value_name("PATH")
                .help("Opens the given route instead of the landing page")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    let route = Route::from_path(matches.value_of("route").unwrap_or("/"));
    App::start(config, route).await?;
    Ok(())
}
