use clap::Parser;
use macroquad::prelude::*;
use life_arena::{
    GameState, Camera, Settings,
    config::CliOverrides,
    domain::{Algorithm, NeutralNeighbors},
    ui, rendering, input,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "life_arena")]
#[command(about = "Sparse Game of Life with a two-player versus mode")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Seconds between generations (overrides config)
    #[arg(short, long)]
    interval: Option<f32>,

    /// Frontier evaluation strategy (overrides config)
    #[arg(short, long, value_parser = parse_algorithm)]
    algorithm: Option<Algorithm>,

    /// Random seeding density (overrides config)
    #[arg(short, long)]
    density: Option<f64>,

    /// Let neutral cells abstain from versus-mode majority votes
    #[arg(long)]
    neutral_abstains: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    Algorithm::all()
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(s) || format!("{a:?}").eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown algorithm '{s}'"))
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Life Arena".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::load_or_default(&cli.config)?;
    settings.merge_with_cli(&CliOverrides {
        update_interval_secs: cli.interval,
        algorithm: cli.algorithm,
        density: cli.density,
        neutral_neighbors: cli.neutral_abstains.then_some(NeutralNeighbors::Abstain),
    });
    settings.validate()?;
    Ok(settings)
}

#[macroquad::main(window_conf)]
async fn main() {
    life_arena::init_logging();
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.dump_config {
        if let Err(err) = settings.to_file(path) {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
        tracing::info!(path = %path.display(), "configuration written");
        return;
    }

    let mut state = GameState::new(settings);
    let mut camera = Camera::new();
    camera.reset(ui::board_area_width(), screen_height());

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        // Input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);
        if state.pending_pattern_index.is_some() {
            input::handle_pattern_placement(&mut state, &camera, mouse_pos);
        } else {
            input::handle_mouse_paint(&mut state, &camera, mouse_pos);
        }
        state = input::process_keyboard_input(state, &mut camera);

        // Update game state
        state = state.tick(get_frame_time());

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_board(&state.engine, &camera);

        if let Some(idx) = state.pending_pattern_index {
            if mouse_pos.0 < ui::board_area_width() {
                let owner = state.engine.selected_owner();
                rendering::draw_pattern_preview(&state.patterns[idx], owner, &camera, mouse_pos);
            }
        }

        rendering::draw_outcome(&state);
        rendering::draw_controls(&state, &camera, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
