use battleship_setup::config::GameConfig;
use battleship_setup::input_system::{Action, InputContext, InputSystem};
use battleship_setup::logging;
use battleship_setup::placement::render::render_placement;
use battleship_setup::placement::{Grid, PlacementController, PlacementEvent};
use battleship_setup::text::TextRenderer;
use sdl2::pixels::Color;

fn log_event(event: PlacementEvent) {
    match event {
        PlacementEvent::Moved { ship, anchor } => {
            log::debug!("Ship {} moved to ({}, {})", ship + 1, anchor.x, anchor.y);
        }
        PlacementEvent::Reoriented { ship, orientation } => {
            log::debug!("Ship {} is now {:?}", ship + 1, orientation);
        }
        PlacementEvent::Blocked { ship, by } => {
            log::warn!("Ship {} blocked by ship {}", ship + 1, by + 1);
        }
        PlacementEvent::Placed { ship } => {
            log::info!("Ship {} placed", ship + 1);
        }
        PlacementEvent::Advanced { from, to } => {
            log::info!("Ship {} -> ship {}", from + 1, to + 1);
        }
        PlacementEvent::Ignored => {}
    }
}

fn main() -> Result<(), String> {
    logging::init_logging();
    let config = GameConfig::load_or_default();
    logging::set_level(config.log_level_filter());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let (window_width, window_height) = config.placement_window_size();
    let window = video_subsystem
        .window("BattleShip - Fleet Placement", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(window_width, window_height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut text = TextRenderer::new(&ttf_context, &config.font_path);
    let input = InputSystem::new(InputContext::Placement);

    let grid = Grid::new(config.grid_size, config.cell_size);
    let mut controller = PlacementController::new(&config);

    log::info!(
        "Placing {} ships on a {}x{} grid ({:?} collisions)",
        controller.ships().len(),
        grid.size,
        grid.size,
        controller.policy()
    );
    log::info!("Controls: ARROWS - move, R - rotate, D/V - horizontal/vertical, ENTER - lock/next");

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            if action == Action::Quit {
                break 'running;
            }

            let was_ready = controller.all_placed();
            log_event(controller.handle(action));
            if controller.all_placed() && !was_ready {
                log::info!("All ships placed");
            }
        }

        canvas.set_draw_color(Color::RGB(255, 255, 255));
        canvas.clear();

        render_placement(&mut canvas, &mut text, &grid, &controller)?;

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
