//! `ApplicationHandler` implementation for the winit event loop.
//!
//! `RedrawRequested` is the frame tick: advance the animation, ease the
//! camera, render, then request the next redraw — the loop reschedules
//! itself for the lifetime of the window.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use helix_render::FrameInputs;

use super::core::HelixApp;

impl ApplicationHandler for HelixApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        // Field is generated and wired — the updater may run
        self.animation.start();

        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(rs) = &mut self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((lx, ly)) = self.last_mouse_pos {
                        let dx = (position.x - lx) as f32;
                        let dy = (position.y - ly) as f32;
                        self.camera.rotate(dx, dy);
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.mouse_pressed = state == ElementState::Pressed;
                if !self.mouse_pressed {
                    self.last_mouse_pos = None;
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 30.0) as f32,
                };
                self.camera.zoom(lines);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.handle_key(event_loop, &event.logical_key);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_tick();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => {}
        }
    }
}

impl HelixApp {
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: &Key) {
        match key.as_ref() {
            Key::Named(NamedKey::Escape) | Key::Character("q") => {
                event_loop.exit();
            }
            Key::Named(NamedKey::ArrowUp) => {
                self.progress.increase();
                tracing::debug!("progress = {:.2}", self.progress.value());
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.progress.decrease();
                tracing::debug!("progress = {:.2}", self.progress.value());
            }
            _ => {}
        }
    }

    /// One frame tick: advance time and rotation, ease the camera, publish
    /// the frame inputs, render.
    fn render_tick(&mut self) {
        let dt = self.timer.begin_frame();
        self.animation.tick(dt.as_secs_f32());
        self.camera.update();

        let Some(rs) = &mut self.render_state else {
            return;
        };

        let frame = FrameInputs {
            time: self.animation.elapsed(),
            progress: self.progress.value(),
            rotation: self.animation.rotation(),
            view: self.camera.view_matrix(),
        };

        if let Err(e) = rs.render_frame(&frame) {
            // Surface errors recover on the next resize/frame
            tracing::error!("render error: {e}");
        }
    }
}
