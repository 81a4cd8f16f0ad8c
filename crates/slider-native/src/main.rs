use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use slider_core::{FrameUpdate, Slider, SliderConfig, SliderEvent};

mod gpu;
mod scene;

use gpu::GpuState;

const STEP_MS: f64 = 1000.0 / 60.0; // fixed simulation step
const MAX_STEPS_PER_FRAME: u32 = 5;
const LINE_DELTA_PX: f64 = 40.0; // one wheel notch
const ITEM_WIDTH_RATIO: f64 = 0.6; // slide pitch as a share of the window width
const DEFAULT_SLIDE_COUNT: usize = 6;

/// Options from `SLIDER_OPTIONS` (camelCase JSON) or the demo defaults.
fn load_config(window_width: f64) -> anyhow::Result<SliderConfig> {
    let mut config = match std::env::var("SLIDER_OPTIONS") {
        Ok(json) => SliderConfig::from_json(&json).context("SLIDER_OPTIONS")?,
        Err(_) => {
            let mut config = SliderConfig::new(DEFAULT_SLIDE_COUNT, 1.0);
            config.infinite = true;
            config.continuous_scroll = true;
            config.auto_play.enabled = true;
            config
        }
    };
    // The demo lays slides out relative to the window.
    config.item_width = (window_width * ITEM_WIDTH_RATIO).max(1.0);
    config.validate()?;
    Ok(config)
}

/// Map winit's logical key onto the DOM `KeyboardEvent.key` names the
/// gesture adapter understands.
fn dom_key(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::Home) => Some("Home"),
        Key::Named(NamedKey::End) => Some("End"),
        Key::Named(NamedKey::Space) => Some(" "),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Fixed-timestep driver around the slider; the simulated clock is also
/// the timestamp for input events.
struct Demo {
    slider: Slider,
    clock_ms: f64,
    accumulator_ms: f64,
    last_instant: Instant,
    cursor_x: f64,
    latest: FrameUpdate,
}

impl Demo {
    fn new(slider: Slider) -> Self {
        let latest = slider.snapshot();
        Self {
            slider,
            clock_ms: 0.0,
            accumulator_ms: 0.0,
            last_instant: Instant::now(),
            cursor_x: 0.0,
            latest,
        }
    }

    fn advance(&mut self) {
        let now = Instant::now();
        self.accumulator_ms += (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        let mut steps = 0;
        while self.accumulator_ms >= STEP_MS && steps < MAX_STEPS_PER_FRAME {
            self.clock_ms += STEP_MS;
            self.accumulator_ms -= STEP_MS;
            steps += 1;
            self.slider.poll_wheel(self.clock_ms);
            self.slider.poll_autoplay(self.clock_ms);
            if let Some(update) = self.slider.frame(self.clock_ms) {
                self.latest = update;
            }
        }
        if steps == MAX_STEPS_PER_FRAME {
            // Drop the backlog instead of spiralling.
            self.accumulator_ms = 0.0;
        }
    }

    fn instances(&self, viewport: Vec2) -> Vec<scene::InstanceData> {
        let transforms = self.slider.transforms(&self.latest);
        let bar = self.slider.progress_bar(&self.latest);
        scene::build_instances(
            &transforms,
            &bar,
            self.slider.motion().item_width() as f32,
            viewport,
        )
    }

    fn handle(&mut self, event: &WindowEvent) {
        let now = self.clock_ms;
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(key) = dom_key(logical_key) {
                    self.slider.key(key, now);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                self.slider.pointer_move(position.x, now);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.slider.pointer_down(self.cursor_x, now),
                ElementState::Released => {
                    self.slider.pointer_up(self.cursor_x, now);
                }
            },
            WindowEvent::CursorLeft { .. } => self.slider.pointer_cancel(now),
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scroll-up as positive; the DOM convention is the opposite.
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (-*x as f64 * LINE_DELTA_PX, -*y as f64 * LINE_DELTA_PX)
                    }
                    MouseScrollDelta::PixelDelta(p) => (-p.x, -p.y),
                };
                self.slider.wheel(dx, dy, now);
            }
            WindowEvent::Occluded(occluded) => self.slider.set_visible(!occluded, now),
            _ => {}
        }
    }

    fn resize(&mut self, width: u32) {
        if width == 0 {
            return;
        }
        if let Err(e) = self.slider.resize(width as f64 * ITEM_WIDTH_RATIO) {
            log::warn!("resize ignored: {e}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Calma slider (native)")
        .build(&event_loop)?;

    let config = load_config(window.inner_size().width as f64)?;
    let mut slider = Slider::new(config)?;
    slider.subscribe(|event| {
        match event {
            SliderEvent::SlideChanged { index } => log::info!("slide {index}"),
            SliderEvent::PerformanceModeChanged { from, to } => {
                log::info!("performance {} -> {}", from.as_str(), to.as_str())
            }
            SliderEvent::Frame(_) => {}
        }
        Ok(())
    });

    let mut state = pollster::block_on(GpuState::new(&window)).context("gpu")?;
    let mut demo = Demo::new(slider);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            demo.resize(size.width);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        }
        | Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Named(NamedKey::Escape),
                            ..
                        },
                    ..
                },
            ..
        } => {
            demo.slider.destroy();
            elwt.exit();
        }
        Event::WindowEvent { event, .. } => demo.handle(&event),
        Event::AboutToWait => {
            demo.advance();
            let (w, h) = state.size();
            let instances = demo.instances(Vec2::new(w, h));
            match state.render(&instances) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
