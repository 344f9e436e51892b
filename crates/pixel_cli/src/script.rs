//! Editing scripts
//!
//! One intent per line, arguments separated by whitespace. Empty lines and lines
//! starting with `#` are skipped (a color like `#ff0000` only appears as an argument).

use anyhow::{Context, Result, anyhow, bail};
use pixel_engine::{Color, EditorSession, Frame, Modifiers, PointerButton, Position, SymmetryMode, Tool};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Paint { pos: Position, color: Color },
    Erase { pos: Position },
    Fill { pos: Position, color: Color },
    Line { from: Position, to: Position, color: Color },
    Rect { a: Position, b: Position, color: Color, filled: bool },
    Clear,
    Symmetry(SymmetryMode),
    Tool(Tool),
    Primary(Color),
    Secondary(Color),
    SwapColors,
    Down { pos: Position, button: PointerButton, modifiers: Modifiers },
    Move { pos: Position, button: PointerButton },
    Up { pos: Position, button: PointerButton, modifiers: Modifiers },
    Checkpoint,
    Undo,
    Redo,
    AddFrame,
    DuplicateFrame,
    DeleteFrame,
    NextFrame,
    SelectFrame(usize),
    MoveFrame { from: usize, to: usize },
}

/// A parsed command with the line it came from
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut result = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(line).with_context(|| format!("line {}: '{}'", i + 1, line.trim()))? {
            result.push(ScriptLine { line: i + 1, command });
        }
    }
    Ok(result)
}

pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match name.to_ascii_lowercase().as_str() {
        "paint" => {
            expect_args(&args, 3)?;
            Command::Paint {
                pos: position(&args[0..2])?,
                color: color(args[2])?,
            }
        }
        "erase" => {
            expect_args(&args, 2)?;
            Command::Erase { pos: position(&args[0..2])? }
        }
        "fill" => {
            expect_args(&args, 3)?;
            Command::Fill {
                pos: position(&args[0..2])?,
                color: color(args[2])?,
            }
        }
        "line" => {
            expect_args(&args, 5)?;
            Command::Line {
                from: position(&args[0..2])?,
                to: position(&args[2..4])?,
                color: color(args[4])?,
            }
        }
        "rect" => {
            if args.len() != 5 && !(args.len() == 6 && args[5] == "filled") {
                bail!("usage: rect x1 y1 x2 y2 #color [filled]");
            }
            Command::Rect {
                a: position(&args[0..2])?,
                b: position(&args[2..4])?,
                color: color(args[4])?,
                filled: args.len() == 6,
            }
        }
        "clear" => Command::Clear,
        "symmetry" => {
            expect_args(&args, 1)?;
            Command::Symmetry(args[0].parse().map_err(|e: String| anyhow!(e))?)
        }
        "tool" => {
            expect_args(&args, 1)?;
            Command::Tool(args[0].parse().map_err(|e: String| anyhow!(e))?)
        }
        "primary" => {
            expect_args(&args, 1)?;
            Command::Primary(color(args[0])?)
        }
        "secondary" => {
            expect_args(&args, 1)?;
            Command::Secondary(color(args[0])?)
        }
        "swap" => Command::SwapColors,
        "down" | "up" => {
            if args.len() < 2 {
                bail!("usage: {name} x y [secondary] [shift]");
            }
            let (button, modifiers) = pointer_flags(&args[2..])?;
            let pos = position(&args[0..2])?;
            if name.eq_ignore_ascii_case("down") {
                Command::Down { pos, button, modifiers }
            } else {
                Command::Up { pos, button, modifiers }
            }
        }
        "move" => {
            if args.len() < 2 {
                bail!("usage: move x y [secondary]");
            }
            let (button, _) = pointer_flags(&args[2..])?;
            Command::Move {
                pos: position(&args[0..2])?,
                button,
            }
        }
        "checkpoint" => Command::Checkpoint,
        "undo" => Command::Undo,
        "redo" => Command::Redo,
        "add-frame" => Command::AddFrame,
        "duplicate-frame" => Command::DuplicateFrame,
        "delete-frame" => Command::DeleteFrame,
        "next-frame" => Command::NextFrame,
        "select-frame" => {
            expect_args(&args, 1)?;
            Command::SelectFrame(index(args[0])?)
        }
        "move-frame" => {
            expect_args(&args, 2)?;
            Command::MoveFrame {
                from: index(args[0])?,
                to: index(args[1])?,
            }
        }
        _ => bail!("unknown command '{name}'"),
    };
    Ok(Some(command))
}

fn expect_args(args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        bail!("expected {count} arguments, got {}", args.len());
    }
    Ok(())
}

fn position(args: &[&str]) -> Result<Position> {
    let x = args[0].parse::<i32>().with_context(|| format!("invalid x coordinate '{}'", args[0]))?;
    let y = args[1].parse::<i32>().with_context(|| format!("invalid y coordinate '{}'", args[1]))?;
    Ok(Position::new(x, y))
}

fn color(arg: &str) -> Result<Color> {
    Ok(Color::from_hex(arg)?)
}

fn index(arg: &str) -> Result<usize> {
    arg.parse::<usize>().with_context(|| format!("invalid frame index '{arg}'"))
}

fn pointer_flags(flags: &[&str]) -> Result<(PointerButton, Modifiers)> {
    let mut button = PointerButton::Primary;
    let mut modifiers = Modifiers::NONE;
    for flag in flags {
        match *flag {
            "secondary" => button = PointerButton::Secondary,
            "shift" => modifiers.shift = true,
            _ => bail!("unknown pointer flag '{flag}'"),
        }
    }
    Ok((button, modifiers))
}

impl Command {
    /// Run the command against the session.
    ///
    /// Frame commands that the session rejects (deleting the last frame, an
    /// index outside the timeline) fail the script.
    pub fn apply(&self, session: &mut EditorSession) -> Result<()> {
        match self {
            Command::Paint { pos, color } => session.set_pixel(*pos, *color),
            Command::Erase { pos } => session.erase_pixel(*pos),
            Command::Fill { pos, color } => session.fill(*pos, *color),
            Command::Line { from, to, color } => session.draw_line(*from, *to, *color),
            Command::Rect { a, b, color, filled } => session.draw_rectangle(*a, *b, *color, *filled),
            Command::Clear => session.clear_canvas(),
            Command::Symmetry(mode) => session.set_symmetry_mode(*mode),
            Command::Tool(tool) => session.set_tool(*tool),
            Command::Primary(color) => session.set_primary_color(*color),
            Command::Secondary(color) => session.set_secondary_color(*color),
            Command::SwapColors => session.swap_colors(),
            Command::Down { pos, button, modifiers } => session.pointer_down(*pos, *button, *modifiers),
            Command::Move { pos, button } => session.pointer_move(*pos, *button),
            Command::Up { pos, button, modifiers } => session.pointer_up(*pos, *button, *modifiers),
            Command::Checkpoint => session.checkpoint(),
            Command::Undo => {
                if !session.undo() {
                    log::info!("nothing to undo");
                }
            }
            Command::Redo => {
                if !session.redo() {
                    log::info!("nothing to redo");
                }
            }
            Command::AddFrame => {
                session.add_frame();
            }
            Command::DuplicateFrame => {
                session.duplicate_frame(session.active_frame_id())?;
            }
            Command::DeleteFrame => session.delete_frame(session.active_frame_id())?,
            Command::NextFrame => {
                session.next_frame();
            }
            Command::SelectFrame(index) => {
                let Some(id) = session.frames().frames().get(*index).map(Frame::id) else {
                    bail!("no frame at index {index} ({} frames)", session.frame_count());
                };
                session.select_frame(id)?;
            }
            Command::MoveFrame { from, to } => session.reorder_frames(*from, *to)?,
        }
        Ok(())
    }
}

/// Run a parsed script, stopping at the first failing command
pub fn run(session: &mut EditorSession, script: &[ScriptLine]) -> Result<()> {
    for entry in script {
        entry.command.apply(session).with_context(|| format!("line {}", entry.line))?;
    }
    Ok(())
}
