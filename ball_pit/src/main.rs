use std::env;

use ball_physics::{Arena, Ball, EngineConfig, Height, PhysicsEngine, Vec2, Width};
use ggez::event::{self, EventHandler, MouseButton};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text};
use ggez::input::keyboard::KeyCode;
use ggez::{Context, GameResult};
use rand::rngs::ThreadRng;

mod spawn;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;
const TEXT_HEIGHT: f32 = 14.0;

const HELP_LINES: [&str; 5] = [
    "ESC: Quit",
    "TAB: Show this help",
    "C: Clear balls",
    "Q: Draw quad trees",
    "Mouse 1: Drop balls!",
];

struct MainState {
    arena: Arena,
    engine: PhysicsEngine,
    rng: ThreadRng,
    draw_quad_tree: bool,
    show_help: bool,
}

impl MainState {
    fn new(config: EngineConfig) -> GameResult<MainState> {
        let engine = PhysicsEngine::with_config(config)
            .map_err(|e| ggez::GameError::CustomError(e.to_string()))?;
        Ok(MainState {
            arena: Arena::new(Width::new(SCREEN_WIDTH), Height::new(SCREEN_HEIGHT)),
            engine,
            rng: rand::rng(),
            draw_quad_tree: false,
            show_help: false,
        })
    }

    fn drop_balls(&mut self, ctx: &Context) {
        let mouse = ctx.mouse.position();
        let position = Vec2::new(f64::from(mouse.x), f64::from(mouse.y));
        for _ in 0..spawn::BALLS_PER_DROP {
            self.engine.add(spawn::random_ball(&mut self.rng, position));
        }
    }

    fn draw_balls(&self, ctx: &mut Context, canvas: &mut Canvas) -> GameResult {
        let mut builder = MeshBuilder::new();
        let mut any = false;
        for ball in self.engine.balls().iter().filter(|ball| !ball.is_dead()) {
            let color = to_ggez_color(ball);
            let center = to_screen(ball.position());
            if ball.single_point() {
                builder.rectangle(DrawMode::fill(), Rect::new(center.x, center.y, 1.0, 1.0), color)?;
            } else {
                builder.circle(DrawMode::fill(), center, ball.radius().get() as f32, 0.5, color)?;
            }
            any = true;
        }
        if any {
            let mesh = Mesh::from_data(ctx, builder.build());
            canvas.draw(&mesh, DrawParam::default());
        }
        Ok(())
    }

    fn draw_regions(&self, ctx: &mut Context, canvas: &mut Canvas) -> GameResult {
        let Some(tree) = self.engine.current_quad_tree() else {
            return Ok(());
        };
        let mut builder = MeshBuilder::new();
        for region in tree.all_regions() {
            let rect = Rect::new(
                region.left() as f32,
                region.top() as f32,
                region.width().get() as f32,
                region.height().get() as f32,
            );
            builder.rectangle(DrawMode::stroke(1.0), rect, Color::RED)?;
        }
        let mesh = Mesh::from_data(ctx, builder.build());
        canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn draw_help(&self, ctx: &mut Context, canvas: &mut Canvas) -> GameResult {
        let start = 20.0;
        let total_height = 10.0 + HELP_LINES.len() as f32 * TEXT_HEIGHT;
        let background = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(10.0, 10.0, SCREEN_WIDTH as f32 - start, total_height + 10.0),
            Color::BLUE,
        )?;
        canvas.draw(&background, DrawParam::default());

        for (line, text) in HELP_LINES.iter().enumerate() {
            canvas.draw(
                &Text::new(*text),
                DrawParam::default().dest(GVec2::new(start, start + line as f32 * TEXT_HEIGHT)),
            );
        }
        Ok(())
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if ctx.keyboard.is_key_just_released(KeyCode::Escape) {
            ctx.request_quit();
        }
        self.show_help = ctx.keyboard.is_key_pressed(KeyCode::Tab);
        if ctx.keyboard.is_key_just_released(KeyCode::Q) {
            self.draw_quad_tree = !self.draw_quad_tree;
        }
        if ctx.mouse.button_pressed(MouseButton::Left) {
            self.drop_balls(ctx);
        }
        if ctx.keyboard.is_key_just_released(KeyCode::C) {
            self.engine.remove_all();
        }

        let dt = ctx.time.delta().as_secs_f64();
        self.engine.update(dt, &self.arena);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);

        self.draw_balls(ctx, &mut canvas)?;
        if self.draw_quad_tree {
            self.draw_regions(ctx, &mut canvas)?;
        }

        canvas.draw(
            &Text::new(self.engine.alive_count().to_string()),
            DrawParam::default().dest(GVec2::new(10.0, 10.0)),
        );
        canvas.draw(
            &Text::new("TAB to show help"),
            DrawParam::default().dest(GVec2::new(10.0, SCREEN_HEIGHT as f32 - 20.0)),
        );

        if self.show_help {
            self.draw_help(ctx, &mut canvas)?;
        }

        canvas.finish(ctx)
    }
}

fn to_screen(position: Vec2) -> GVec2 {
    GVec2::new(position.x as f32, position.y as f32)
}

fn to_ggez_color(ball: &Ball) -> Color {
    let c = ball.color();
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

fn main() -> GameResult {
    tracing_subscriber::fmt::init();

    // Optional engine config JSON as the first argument
    let config = match env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config {}: {}", path, e);
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    };
    tracing::info!(?config, "starting ball pit");

    let cb = ggez::ContextBuilder::new("ball_pit", "author")
        .window_setup(ggez::conf::WindowSetup::default().title("Ball Pit"))
        .window_mode(
            ggez::conf::WindowMode::default()
                .dimensions(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
        );

    let (ctx, event_loop) = cb.build()?;
    let state = MainState::new(config)?;
    event::run(ctx, event_loop, state)
}
