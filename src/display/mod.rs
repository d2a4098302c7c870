mod pixel_buffer;
mod surface;

pub use pixel_buffer::PixelBuffer;
pub use surface::{Canvas, DrawCommand, DrawList, RenderSurface};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::OrthoBounds;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;
use sdl2::EventPump;
use serde::Serialize;
use tracing::{debug, info};

/// Everything needed to open and set up one demo window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Top-left corner on the desktop
    pub position: (i32, i32),
    /// World region shown in the window
    pub ortho: OrthoBounds,
    pub background: Rgb,
}

impl WindowConfig {
    /// Software canvas matching this window's size and projection
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height, self.ortho)
    }
}

pub struct Display {
    canvas: WindowCanvas,
    event_pump: EventPump,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

impl Display {
    /// Create the window described by `config`
    pub fn open(config: &WindowConfig) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;

        let (x, y) = config.position;
        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .position(x, y)
            .build()
            .map_err(Error::sdl)?;

        let canvas = window.into_canvas().accelerated().build().map_err(Error::sdl)?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;

        info!(
            title = %config.title,
            width = config.width,
            height = config.height,
            "window opened"
        );

        Ok((
            Self {
                canvas,
                event_pump,
            },
            texture_creator,
        ))
    }

    pub fn present(&mut self, target: &mut RenderTarget, buffer: &PixelBuffer) -> Result<()> {
        target
            .texture
            .update(None, buffer.as_bytes(), (buffer.width() * 4) as usize)
            .map_err(Error::sdl)?;

        self.canvas
            .copy(&target.texture, None, None)
            .map_err(Error::Sdl)?;
        self.canvas.present();
        Ok(())
    }

    /// Present `buffer`, then block until the window is closed or Escape is
    /// pressed. The frame is re-presented whenever the window is exposed or
    /// resized; nothing is recomputed.
    pub fn run(&mut self, target: &mut RenderTarget, buffer: &PixelBuffer) -> Result<()> {
        self.present(target, buffer)?;

        loop {
            match self.event_pump.wait_event() {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break,
                Event::Window {
                    win_event:
                        WindowEvent::Exposed | WindowEvent::Resized(..) | WindowEvent::SizeChanged(..),
                    ..
                } => {
                    debug!("window exposed, re-presenting frame");
                    self.present(target, buffer)?;
                },
                _ => {},
            }
        }

        info!("window closed");
        Ok(())
    }
}

impl<'a> RenderTarget<'a> {
    /// Streaming texture matching the buffer size
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(Error::sdl)?;
        Ok(Self { texture })
    }
}
