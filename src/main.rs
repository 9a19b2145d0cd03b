use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use ocean_explorer::cli::Cli;
use ocean_explorer::config::OceanConfig;
use ocean_explorer::frame::FrameClock;
use ocean_explorer::hud::HudState;
use ocean_explorer::input::{InputAction, WinitController};
use ocean_explorer::renderer::OceanRenderer;
use ocean_explorer::scene::{FrameContext, OceanScene};
use ocean_explorer::scroll::{ScrollSource, ScrollTracker};

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const WINDOW_TITLE: &str = "Deep Ocean Explorer";

struct App {
    config: OceanConfig,
    window: Option<Arc<Window>>,
    renderer: Option<OceanRenderer>,
    scene: OceanScene,
    scroll: ScrollSource,
    tracker: ScrollTracker,
    input: WinitController,
    clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: OceanConfig) -> Self {
        let scroll = ScrollSource::new(config.scroll_extent);
        let tracker = ScrollTracker::mount(&scroll);
        let scene = OceanScene::new(&config);
        let input = WinitController::new(config.line_height_px, config.window_height as f32);

        Self {
            config,
            window: None,
            renderer: None,
            scene,
            scroll,
            tracker,
            input,
            clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn viewport_height(&self) -> f32 {
        match (&self.window, &self.renderer) {
            (Some(window), Some(renderer)) => {
                renderer.size().height as f32 / window.scale_factor() as f32
            }
            _ => self.config.window_height as f32,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.clock.next() else {
            return;
        };
        self.update_fps(frame.delta);
        self.scene.update(&FrameContext::new(frame, &self.tracker));

        let hud = self.config.show_ui.then(|| HudState {
            scroll_offset: self.tracker.current_offset(),
            scroll_extent: self.scroll.extent(),
            viewport_height: self.viewport_height(),
            depth: self.scene.camera().depth(),
            fps: self.fps,
        });

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        match renderer.render(&self.scene, hud.as_ref(), window, frame.time) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.window_width,
                        self.config.window_height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(OceanRenderer::new(
                window.clone(),
                &self.scene,
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            let page = self.viewport_height();
            self.input.set_page_height(page);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                let page = self.viewport_height();
                self.input.set_page_height(page);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => match self.input.process_event(&event) {
                Some(InputAction::Quit) => event_loop.exit(),
                Some(action) => action.apply(&self.scroll, self.scene.camera_mut()),
                None => {}
            },
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.tracker.unmount();
        log::info!(
            "exiting after {} frames at depth {:.2}",
            self.clock.frame_number(),
            self.scene.camera().depth()
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = OceanConfig::resolve(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!(
        "{} - wheel/arrows/PageDown to dive, drag to orbit, Ctrl+wheel to zoom, Escape to quit",
        WINDOW_TITLE
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
