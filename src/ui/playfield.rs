//! The playfield canvas.
//!
//! World coordinates have y pointing down while the canvas has y pointing up,
//! so every point goes through [`flip`] on its way to the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

use crate::app::App;
use crate::constants::{HEIGHT, UFO_DETECTION_RADIUS, WIDTH};
use crate::game::geometry::{distance, Point};
use crate::game::{GameState, World};
use crate::theme;

/// Half-width of the tractor beam cone, in radians.
const TRACTOR_HALF_CONE: f64 = std::f64::consts::PI / 8.0;
const TRACTOR_ARC_POINTS: u32 = 30;

fn flip((x, y): Point) -> Point {
    (x, HEIGHT - y)
}

fn draw_path(ctx: &mut Context, points: &[Point], closed: bool, color: Color) {
    let segments = points.windows(2).map(|w| (w[0], w[1]));
    let closing = match (closed, points.first(), points.last()) {
        (true, Some(&first), Some(&last)) if points.len() > 2 => Some((last, first)),
        _ => None,
    };
    for (a, b) in segments.chain(closing) {
        let ((x1, y1), (x2, y2)) = (flip(a), flip(b));
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let world = &app.world;
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER_DEFAULT)),
        )
        .marker(Marker::Braille)
        .background_color(theme::BG_COLOR)
        .x_bounds([0.0, WIDTH])
        .y_bounds([0.0, HEIGHT])
        .paint(|ctx| {
            if world.state == GameState::GameOver {
                return;
            }
            draw_stars(ctx, world);
            if world.state == GameState::Menu {
                return;
            }
            ctx.layer();
            draw_black_hole(ctx, world);
            draw_asteroids(ctx, world);
            draw_bullets(ctx, world);
            draw_particles(ctx, world);
            draw_missiles(ctx, world);
            draw_ufo(ctx, world);
            ctx.layer();
            draw_ship(ctx, world);
        });
    frame.render_widget(canvas, area);
}

fn draw_stars(ctx: &mut Context, world: &World) {
    let coords: Vec<Point> = world.stars.iter().copied().map(flip).collect();
    ctx.draw(&Points {
        coords: &coords,
        color: theme::STAR,
    });
}

fn draw_asteroids(ctx: &mut Context, world: &World) {
    for rock in &world.asteroids.asteroids {
        draw_path(ctx, &rock.polygon(), true, theme::ASTEROID);
    }
}

fn draw_bullets(ctx: &mut Context, world: &World) {
    let coords: Vec<Point> = world
        .bullets
        .bullets
        .iter()
        .map(|b| flip((b.x, b.y)))
        .collect();
    ctx.draw(&Points {
        coords: &coords,
        color: theme::BULLET,
    });
}

fn draw_particles(ctx: &mut Context, world: &World) {
    for p in world.explosions.particles() {
        let (x, y) = flip((p.x, p.y));
        ctx.draw(&Circle {
            x,
            y,
            radius: p.radius(),
            color: theme::PARTICLE,
        });
    }
}

fn draw_missiles(ctx: &mut Context, world: &World) {
    for missile in &world.missiles.missiles {
        draw_path(ctx, &missile.flame(), true, theme::FLAME);
        draw_path(ctx, &missile.polygon(), true, theme::MISSILE);
    }
}

fn draw_ufo(ctx: &mut Context, world: &World) {
    let Some(ufo) = world.ufo.as_ref() else {
        return;
    };
    draw_path(ctx, &ufo.polygon(), true, theme::UFO);
    for (x, half) in ufo.ribs() {
        draw_path(ctx, &[(x, ufo.y - half), (x, ufo.y + half)], false, theme::UFO);
    }

    let ship = &world.ship;
    if !ship.spawned || distance(ship.x, ship.y, ufo.x, ufo.y) >= UFO_DETECTION_RADIUS {
        return;
    }
    let toward = f64::atan2(ship.y - ufo.y, ship.x - ufo.x);
    for r in ufo.tractor_wave_radii() {
        let arc: Vec<Point> = (0..TRACTOR_ARC_POINTS)
            .map(|j| {
                let t = f64::from(j) / f64::from(TRACTOR_ARC_POINTS - 1);
                let a = toward - TRACTOR_HALF_CONE + t * 2.0 * TRACTOR_HALF_CONE;
                (ufo.x + r * a.cos(), ufo.y + r * a.sin())
            })
            .collect();
        draw_path(ctx, &arc, false, theme::TRACTOR_BEAM);
    }
}

fn draw_black_hole(ctx: &mut Context, world: &World) {
    if let Some(hole) = world.black_hole.as_ref() {
        let color = theme::fade(theme::BLACK_HOLE, hole.opacity);
        draw_path(ctx, &hole.spiral(), false, color);
    }
}

fn draw_ship(ctx: &mut Context, world: &World) {
    let ship = &world.ship;
    if !ship.visible(world.now()) {
        return;
    }
    if ship.thrusting {
        draw_path(ctx, &ship.flame(), true, theme::FLAME);
    }
    let color = if ship.has_rapid_fire() {
        theme::SHIP_RAPID_FIRE
    } else {
        theme::SHIP
    };
    draw_path(ctx, &ship.polygon(), true, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::HighScoreStore;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_flip() {
        assert_eq!(flip((10.0, 0.0)), (10.0, HEIGHT));
        assert_eq!(flip((10.0, HEIGHT)), (10.0, 0.0));
    }

    #[test]
    fn test_renders_playing_world() {
        let mut app = App::new(
            World::new(3, 3, 0),
            HighScoreStore::new("unused.json"),
            true,
        );
        app.world.start_game();
        app.world.update(1.0 / 60.0, crate::game::Controls::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let braille = buffer
            .content()
            .iter()
            .filter(|cell| {
                cell.symbol()
                    .chars()
                    .next()
                    .is_some_and(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
            })
            .count();
        assert!(braille > 0);
    }
}
