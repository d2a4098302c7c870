mod circles;
mod clipping;
mod thick_line;

pub use circles::CirclesDemo;
pub use clipping::ClippingDemo;
pub use thick_line::ThickLineDemo;

use crate::display::{Display, DrawList, RenderSurface, RenderTarget, WindowConfig};
use crate::error::Result;
use serde::Serialize;
use tracing::info;

/// A one-shot drawing: fixed window setup plus a single draw pass
pub trait Demo {
    /// Demo name for logs
    fn name(&self) -> &str;

    /// Window title, size, position, projection and background
    fn window(&self) -> WindowConfig;

    /// Draw the whole frame. Called once.
    fn draw(&self, surface: &mut dyn RenderSurface);
}

/// Where a rendered frame goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Open a window and block until it is closed
    Window,
    /// Print the window config and draw commands as JSON on stdout
    Dump,
}

#[derive(Serialize)]
struct Dump<'a> {
    window: &'a WindowConfig,
    commands: &'a DrawList,
}

/// Clear to the background, draw, flush
pub fn render(demo: &dyn Demo, config: &WindowConfig, surface: &mut dyn RenderSurface) {
    surface.clear(config.background);
    demo.draw(surface);
    surface.flush();
}

/// Record the frame without touching any window
pub fn record(demo: &dyn Demo) -> DrawList {
    let config = demo.window();
    let mut list = DrawList::new();
    render(demo, &config, &mut list);
    list
}

/// Render `demo` once and send the frame to `output`
pub fn run(demo: &dyn Demo, output: Output) -> Result<()> {
    let config = demo.window();
    info!(demo = demo.name(), ?output, "rendering");

    match output {
        Output::Dump => {
            let commands = record(demo);
            let json = serde_json::to_string_pretty(&Dump {
                window: &config,
                commands: &commands,
            })?;
            println!("{json}");
        },
        Output::Window => {
            let mut canvas = config.canvas();
            render(demo, &config, &mut canvas);

            let (mut display, texture_creator) = Display::open(&config)?;
            let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;
            display.run(&mut target, canvas.buffer())?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DrawCommand;

    #[test]
    fn test_record_wraps_draw_in_clear_and_flush() {
        let demo = CirclesDemo::default();
        let list = record(&demo);
        let commands = list.commands();
        assert!(matches!(commands.first(), Some(DrawCommand::Clear { .. })));
        assert_eq!(commands.last(), Some(&DrawCommand::Flush));
        assert_eq!(list.len(), 20 + 2);
    }

    #[test]
    fn test_canvas_render_paints_background() {
        let demo = CirclesDemo::default();
        let config = demo.window();
        let mut canvas = config.canvas();
        render(&demo, &config, &mut canvas);
        assert_eq!(canvas.frames(), 1);
        // Corners stay background
        assert_eq!(canvas.buffer().get_pixel(0, 0), Some((13, 13, 13)));
    }
}
