/// Terminal front-end for the interactive wave surface plot
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout, Write};
use sw3d_core::{wave, PixelSurface, Renderer, ViewState};

pub mod surface;

pub use surface::CellSurface;

/// Degrees of rotation per arrow-key press.
const KEY_ROTATE_STEP: f32 = 5.0;

/// Interactive terminal application: owns the view state, re-renders a full
/// frame after every accepted input change.
pub struct TerminalApp {
    view: ViewState,
    renderer: Renderer,
    surface: CellSurface,
    /// Last pointer cell while the primary button is held.
    drag: Option<(u16, u16)>,
    running: bool,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(width as usize, height as usize))
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            view: ViewState::new(),
            renderer: Renderer::new(width, height),
            surface: CellSurface::new(width, height),
            drag: None,
            running: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;

        let result = self.main_loop();

        // Restore the terminal even when the loop failed
        execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while self.running {
            let redraw = match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    self.resize(width as usize, height as usize);
                    true
                }
                _ => false,
            };
            if redraw {
                self.render()?;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                false
            }
            KeyCode::Left => {
                self.view.rotate_by(-KEY_ROTATE_STEP, 0.0);
                true
            }
            KeyCode::Right => {
                self.view.rotate_by(KEY_ROTATE_STEP, 0.0);
                true
            }
            KeyCode::Up => {
                self.view.rotate_by(0.0, -KEY_ROTATE_STEP);
                true
            }
            KeyCode::Down => {
                self.view.rotate_by(0.0, KEY_ROTATE_STEP);
                true
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.view.zoom_in();
                true
            }
            KeyCode::Char('-') => {
                self.view.zoom_out();
                true
            }
            KeyCode::Char('r') => {
                self.view.reset();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag = Some((mouse.column, mouse.row));
                false
            }
            // Any non-primary button restores the initial view
            MouseEventKind::Down(_) => {
                self.view.reset();
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag = None;
                false
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some((last_column, last_row)) = self.drag {
                    let dyaw = (mouse.column as f32 - last_column as f32) * 180.0
                        / self.surface.width() as f32;
                    let dpitch = (mouse.row as f32 - last_row as f32) * 180.0
                        / self.surface.height() as f32;
                    self.view.rotate_by(dyaw, dpitch);
                    self.drag = Some((mouse.column, mouse.row));
                    true
                } else {
                    false
                }
            }
            MouseEventKind::ScrollUp => {
                self.view.zoom_in();
                true
            }
            MouseEventKind::ScrollDown => {
                self.view.zoom_out();
                true
            }
            _ => false,
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.renderer = Renderer::new(width, height);
        self.surface = CellSurface::new(width, height);
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.render(wave::height, &self.view, &mut self.surface);

        let mut stdout = stdout();
        self.surface.draw(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                " yaw {:.0} pitch {:.0} zoom {:.2} | Drag=Rotate Wheel=Zoom Right-Click/R=Reset Q=Quit",
                self.view.yaw, self.view.pitch, self.view.zoom
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
