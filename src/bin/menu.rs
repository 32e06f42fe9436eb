use battleship_setup::config::GameConfig;
use battleship_setup::gui::{MainMenu, MenuOutcome};
use battleship_setup::input_system::{Action, InputContext, InputSystem};
use battleship_setup::logging;
use battleship_setup::text::TextRenderer;
use sdl2::pixels::Color;

fn main() -> Result<(), String> {
    logging::init_logging();
    let config = GameConfig::load_or_default();
    logging::set_level(config.log_level_filter());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window("BattleShip", config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(config.window_width, config.window_height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mut text = TextRenderer::new(&ttf_context, &config.font_path);
    let input = InputSystem::new(InputContext::Menu);
    let mut menu = MainMenu::new(&config);

    log::info!("Menu controls: UP/DOWN - select, ENTER - confirm");

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            match action {
                Action::Quit => break 'running,
                Action::Up => menu.move_up(),
                Action::Down => menu.move_down(),
                Action::Confirm => match menu.confirm() {
                    MenuOutcome::Announce(entry) => {
                        log::info!("Selected: {}", entry.label());
                    }
                    MenuOutcome::Exit => {
                        log::info!("Exit selected, closing menu");
                        break 'running;
                    }
                },
                _ => {}
            }
        }

        canvas.set_draw_color(Color::RGB(255, 255, 255));
        canvas.clear();

        menu.render(&mut canvas, &mut text)?;

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
