use clap::Parser;
use env_logger::Env;
use log::{error, info};
use macroquad::prelude::*;
use microuav_core::Simulator;
use microuav_io::{LoadError, MapArgs, open_simulator};
use microuav_viewer::draw::{
    MarkerStyle, draw_hud, draw_map_panel, draw_observation_panel, hud_lines, texture_from_bgr,
};
use microuav_viewer::input::{Command, InputState, command_for_key};
use microuav_viewer::layout::PanelLayout;

/// Fly a point drone over an overhead image and watch its down-cam crop.
#[derive(Parser, Debug)]
#[command(name = "microuav-viewer", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    map: MapArgs,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "MicroUAV_2D".to_owned(),
        window_width: 1400,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn start() -> Result<Simulator, LoadError> {
    let cli = Cli::parse();
    open_simulator(&cli.map)
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut simulator = match start() {
        Ok(simulator) => simulator,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    let Some(map_texture) = texture_from_bgr(simulator.map()) else {
        error!(
            "map {}x{} is too large to display",
            simulator.map().width(),
            simulator.map().height()
        );
        std::process::exit(1);
    };

    let style = MarkerStyle::default();
    let mut input = InputState::default();

    loop {
        if let Some(command) = get_last_key_pressed().and_then(command_for_key) {
            let (apply, quit) = input.handle(command);
            if quit {
                break;
            }
            match apply {
                Some(Command::Move(action)) => {
                    simulator.step(action);
                }
                Some(Command::Reset) => {
                    let position = simulator.reset();
                    info!("reset to ({}, {})", position.x, position.y);
                }
                _ => {}
            }
        }

        let observation = simulator.observation();
        let layout = PanelLayout::fit(
            (screen_width(), screen_height()),
            (simulator.map().width(), simulator.map().height()),
            (observation.width(), observation.height()),
        );

        clear_background(DARKGRAY);
        draw_map_panel(&map_texture, &simulator, &layout, &style);
        if let Some(texture) = texture_from_bgr(&observation) {
            draw_observation_panel(&texture, &layout, "FOV (crop)");
        }
        draw_hud(&hud_lines(&simulator, input.paused));

        next_frame().await;
    }
}
