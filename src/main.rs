use std::time::Duration;

// leading :: picks the rand crate over the prelude's quad_rand re-export
use ::rand::Rng;
use macroquad::prelude::*;
use toroidal_life::{patterns, CanvasSurface, Driver, DriverConfig, Pattern};

const HUD_HEIGHT: f32 = 28.0;
const MIN_SPEED: Duration = Duration::from_millis(10);
const MAX_SPEED: Duration = Duration::from_millis(1000);
const SPEED_STEP: Duration = Duration::from_millis(10);

const PATTERN_KEYS: [KeyCode; 7] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
];

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: 960,
        window_height: 668,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let canvas_origin = (0.0, HUD_HEIGHT);
    let mut canvas = CanvasSurface::new(
        canvas_origin,
        screen_width() as u32,
        (screen_height() - HUD_HEIGHT) as u32,
    );

    let config = DriverConfig {
        origin_px: canvas_origin,
        on_click: Some(Box::new(|grid, x, y| {
            let alive = grid.is_alive(x, y);
            grid.set_cell(x, y, !alive);
        })),
        ..Default::default()
    };
    let mut driver = Driver::new(&canvas, config).expect("window hosts at least one cell");

    driver.grid.randomize(0.3, &mut ::rand::rng());
    driver.redraw(&mut canvas);
    driver.start();

    loop {
        if is_key_pressed(KeyCode::Space) {
            driver.toggle();
        }
        if is_key_pressed(KeyCode::C) {
            driver.grid.clear();
            driver.redraw(&mut canvas);
        }
        if is_key_pressed(KeyCode::R) {
            driver.grid.randomize(0.3, &mut ::rand::rng());
            driver.redraw(&mut canvas);
        }
        for (key, pattern) in PATTERN_KEYS.iter().zip(patterns::all()) {
            if is_key_pressed(*key) {
                stamp_random(&mut driver, &mut canvas, *pattern);
            }
        }
        if is_key_pressed(KeyCode::Up) {
            driver.set_speed(driver.speed().saturating_sub(SPEED_STEP).max(MIN_SPEED));
        }
        if is_key_pressed(KeyCode::Down) {
            driver.set_speed((driver.speed() + SPEED_STEP).min(MAX_SPEED));
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            if hits_canvas(my) {
                driver.handle_click(mx, my);
                driver.redraw(&mut canvas);
            }
        }

        driver.tick(Duration::from_secs_f32(get_frame_time()), &mut canvas);

        clear_background(Color::from_rgba(18, 18, 18, 255));
        canvas.present();
        draw_hud(&driver);

        next_frame().await;
    }
}

/// Whether a window-space press lands on the canvas rather than the
/// HUD strip above it. HUD presses must not reach the grid: the row
/// would come out negative and wrap onto the bottom edge.
const fn hits_canvas(my: f32) -> bool {
    my >= HUD_HEIGHT
}

/// Stamp a pattern at a random anchor and resync the canvas
fn stamp_random(driver: &mut Driver, canvas: &mut CanvasSurface, pattern: Pattern) {
    let mut rng = ::rand::rng();
    let (width, height) = driver.grid.dimensions();
    let x = rng.random_range(0..width) as i32;
    let y = rng.random_range(0..height) as i32;
    pattern.stamp(&mut driver.grid, x, y);
    driver.redraw(canvas);
    log::debug!("stamped {} at ({x}, {y})", pattern.name);
}

fn draw_hud(driver: &Driver) {
    let status = if driver.is_running() { "running" } else { "paused" };
    let info = format!(
        "gen {}   pop {}   {}ms/gen   {}",
        driver.generation(),
        driver.grid.population(),
        driver.speed().as_millis(),
        status,
    );
    draw_text(&info, 8.0, 19.0, 16.0, WHITE);
    draw_text(
        "space run/pause   c clear   r soup   1-7 stamp   up/down speed   click toggle",
        400.0,
        19.0,
        16.0,
        GRAY,
    );
}
