/// Interactive wave surface plot in the terminal
///
/// Controls:
///   - Mouse drag: rotate the view
///   - Mouse wheel: zoom
///   - Right/middle click or R: reset the view
///   - Arrow keys: rotate, +/-: zoom
///   - Q/ESC: quit

use std::io;
use sw3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let mut app = TerminalApp::new()?;
    app.run()
}
