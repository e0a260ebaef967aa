use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use dock_reorder::config::DockConfig;
use dock_reorder::controller::DockController;
use dock_reorder::geometry::{Point, Viewport};
use dock_reorder::messages::Msg;
use dock_reorder::model::{DockModel, DragStatus};
use dock_reorder::scheduler::ChannelScheduler;

use super::render::Renderer;

pub struct App {
    controller: DockController<ChannelScheduler>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    window_size: PhysicalSize<u32>,
    pointer: Option<Point>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(config: &DockConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let model = DockModel::from_config(config);
        Self {
            controller: DockController::new(model, ChannelScheduler::new(msg_tx)),
            renderer: None,
            window: None,
            context: None,
            window_size: PhysicalSize::new(config.window_width, config.window_height),
            pointer: None,
            msg_rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Dock")
            .with_inner_size(self.window_size);

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context)?;

        let size = window.inner_size();
        self.controller
            .set_viewport(Viewport::new(size.width as f32, size.height as f32));

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Map a window event onto the controller; returns true to redraw
    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("{}", e);
                    }
                }
                self.controller
                    .set_viewport(Viewport::new(size.width as f32, size.height as f32))
            }

            WindowEvent::CursorMoved { position, .. } => {
                let point = Point::new(position.x as f32, position.y as f32);
                self.pointer = Some(point);
                if self.controller.status() == DragStatus::Picked {
                    self.controller.move_to(point)
                } else {
                    false
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
                false
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => match self.pointer {
                    Some(point) => self.controller.pick_at(point),
                    None => false,
                },
                ElementState::Released => self.controller.release(),
            },

            WindowEvent::RedrawRequested => {
                self.render();
                false
            }

            _ => false,
        }
    }

    fn render(&mut self) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let view = self.controller.view();
        let model = self.controller.model();

        match renderer.render(&view, &model.metrics, model.viewport) {
            Ok(painted) => {
                self.controller.record_layout(painted.row);
                if painted.animating {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            Err(e) => tracing::error!("Render failed: {}", e),
        }
    }

    /// Deliver timer messages that arrived since the last iteration
    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            needs_redraw |= self.controller.handle(msg);
        }
        needs_redraw
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to open window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = match &event {
            WindowEvent::CloseRequested => true,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => true,
            _ => false,
        };

        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        let should_redraw = is_ours && !should_exit && self.handle_event(&event);

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Poll);

        if self.process_async_messages() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
