/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable snapshot of the
/// world. No game logic is performed; this module only scales world
/// coordinates to terminal cells and queues draw commands.
use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use neon_runner::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use neon_runner::sim::{GamePhase, GameState, Obstacle, Player};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Rgb { r: 130, g: 100, b: 255 };
const C_PLAYER_SLIDE: Color = Color::Rgb { r: 90, g: 255, b: 220 };
const C_OBSTACLE: Color = Color::Rgb { r: 60, g: 255, b: 200 };
const C_GROUND: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Cyan;

/// Maps world coordinates onto the current terminal grid.
struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    fn col(&self, x: f32) -> i32 {
        (x / WORLD_WIDTH * self.cols as f32) as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / WORLD_HEIGHT * self.rows as f32) as i32
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 1 && (col as u16) < self.cols && (row as u16) < self.rows
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_ground(out, &view, state)?;
    for ob in &state.obstacles {
        draw_obstacle(out, &view, ob)?;
    }
    draw_player(out, &view, &state.player)?;
    draw_particles(out, &view, state)?;
    draw_hud(out, state)?;

    match state.phase {
        GamePhase::Title => draw_center(
            out,
            &view,
            "N E O N   R U N N E R",
            "SPACE to start  ·  S slide  ·  P pause  ·  Q quit",
        )?,
        GamePhase::Paused => draw_center(out, &view, "PAUSED", "P to resume")?,
        GamePhase::GameOver => {
            let sub = format!(
                "Score: {}  ·  Best: {}  ·  R to run again",
                state.score, state.high_score
            );
            draw_center(out, &view, "WIPED OUT", &sub)?;
        }
        GamePhase::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── World drawing ─────────────────────────────────────────────────────────────

fn draw_ground<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let ground_row = view.row(state.tuning.ground_y);
    if ground_row < 0 || ground_row as u16 >= view.rows {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(C_GROUND))?;
    for row in ground_row..view.rows as i32 {
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print("▒".repeat(view.cols as usize)))?;
    }
    Ok(())
}

fn draw_obstacle<W: Write>(out: &mut W, view: &Viewport, ob: &Obstacle) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_OBSTACLE))?;
    fill_box(out, view, ob.x, ob.y, ob.width, ob.height, '█')
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, player: &Player) -> std::io::Result<()> {
    // Draw the hitbox, not the standing silhouette, so the slide reads
    let hb = player.hitbox();
    let (color, glyph) = if player.is_sliding {
        (C_PLAYER_SLIDE, '▄')
    } else {
        (C_PLAYER, '█')
    };
    out.queue(style::SetForegroundColor(color))?;
    fill_box(out, view, hb.pos.x, hb.pos.y, hb.size.x, hb.size.y, glyph)
}

fn fill_box<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    glyph: char,
) -> std::io::Result<()> {
    let c0 = view.col(x);
    let c1 = view.col(x + w).max(c0 + 1);
    let r0 = view.row(y);
    let r1 = view.row(y + h).max(r0 + 1);
    for row in r0..r1 {
        for col in c0..c1 {
            if view.contains(col, row) {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

fn draw_particles<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    for p in &state.particles {
        let col = view.col(p.pos.x);
        let row = view.row(p.pos.y);
        if !view.contains(col, row) {
            continue;
        }
        // Fade toward black as life runs out
        let fade = p.fade();
        let (r, g, b) = p.color;
        out.queue(style::SetForegroundColor(Color::Rgb {
            r: (r as f32 * fade) as u8,
            g: (g as f32 * fade) as u8,
            b: (b as f32 * fade) as u8,
        }))?;
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(if fade > 0.5 { '●' } else { '·' }))?;
    }
    Ok(())
}

// ── HUD and overlays ──────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    if state.high_score > 0 {
        out.queue(Print(format!(
            "Score:{:>6}  Best:{:>6}",
            state.score, state.high_score
        )))?;
    } else {
        out.queue(Print(format!("Score:{:>6}", state.score)))?;
    }
    Ok(())
}

fn draw_center<W: Write>(
    out: &mut W,
    view: &Viewport,
    title: &str,
    sub: &str,
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let cy = view.rows / 2;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(2),
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(
        cx.saturating_sub(sub.chars().count() as u16 / 2),
        cy,
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(sub))?;
    Ok(())
}
