//! Application shell: window, event loop, and per-frame orchestration.
//!
//! Frame order is fixed: UI edits from the previous frame are clamped and
//! applied in `Scene::update()`, camera uniforms are uploaded, then the
//! renderer records the scene pass followed by the UI overlay pass.

use std::path::PathBuf;
use std::sync::Arc;

use cgmath::Vector3;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::error::AssetError;
use crate::gfx::{
    camera::{
        camera_controller::CameraController, camera_utils::CameraManager, orbit_camera::OrbitCamera,
    },
    geometry::GeometryData,
    rendering::RenderEngine,
    resources::Cubemap,
    scene::{FrameParams, Scene},
};
use crate::ui::UiManager;

// UI callback type: builds panels and edits the frame parameters.
pub type UiCallback = Box<dyn FnMut(&imgui::Ui, &mut FrameParams)>;

/// Skybox requested before the GPU exists, resolved once in `resumed()`.
enum SkyboxSource {
    Colors([[u8; 4]; 6]),
    Files([PathBuf; 6]),
}

pub struct SelkieApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
    ui_callback: Option<UiCallback>,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    ui_callback: Option<UiCallback>,
    pending_skybox: Option<SkyboxSource>,
}

impl SelkieApp {
    /// Create a new application with default settings
    ///
    /// The camera starts above and behind the origin looking at it, roughly
    /// world position (0, 3, 10).
    pub fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let mut camera = OrbitCamera::new(10.5, 0.29, 0.0, Vector3::new(0.0, 0.0, 0.0), 1.0);
        camera.bounds.min_distance = Some(1.1);
        let controller = CameraController::new(0.005, 0.1);

        let camera_manager = CameraManager::new(camera, controller);
        let scene = Scene::new(camera_manager);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                ui_callback: None,
                pending_skybox: None,
            },
            ui_callback: None,
        }
    }

    /// Set UI callback
    ///
    /// The callback runs once per frame with the ImGui frame and a working
    /// copy of the frame parameters; edits apply to the next frame.
    pub fn set_ui<F>(&mut self, ui_fn: F)
    where
        F: FnMut(&imgui::Ui, &mut FrameParams) + 'static,
    {
        self.ui_callback = Some(Box::new(ui_fn));
    }

    /// Loads an OBJ file into the scene, returning the object index.
    pub fn add_object(&mut self, object_path: &str) -> Result<usize, AssetError> {
        self.app_state.scene.add_object(object_path)
    }

    /// Adds procedural geometry to the scene, returning the object index.
    pub fn add_geometry(&mut self, geometry: GeometryData, name: &str) -> usize {
        self.app_state.scene.add_geometry(geometry, name)
    }

    /// Marks the object at `index` as the outlined one.
    pub fn set_outlined(&mut self, index: usize) {
        self.app_state.scene.set_outlined(index);
    }

    /// Requests a skybox built from six solid face colors.
    pub fn set_skybox_colors(&mut self, colors: [[u8; 4]; 6]) {
        self.app_state.pending_skybox = Some(SkyboxSource::Colors(colors));
    }

    /// Requests a skybox loaded from six face image files (+X -X +Y -Y +Z -Z).
    pub fn set_skybox_files(&mut self, paths: [PathBuf; 6]) {
        self.app_state.pending_skybox = Some(SkyboxSource::Files(paths));
    }

    pub fn scene(&self) -> &Scene {
        &self.app_state.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.app_state.scene
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        self.app_state.ui_callback = self.ui_callback.take();

        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl Default for SelkieApp {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    fn attach_skybox(&mut self) {
        let Some(source) = self.pending_skybox.take() else {
            return;
        };
        let Some(engine) = self.render_engine.as_mut() else {
            return;
        };

        let cubemap = match source {
            SkyboxSource::Colors(colors) => {
                Some(Cubemap::from_colors(engine.device(), engine.queue(), &colors))
            }
            SkyboxSource::Files(paths) => {
                match Cubemap::from_files(engine.device(), engine.queue(), &paths) {
                    Ok(cubemap) => Some(cubemap),
                    Err(e) => {
                        log::error!("Failed to load skybox: {}", e);
                        None
                    }
                }
            }
        };

        if let Some(cubemap) = cubemap {
            engine.set_skybox(&cubemap);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WindowAttributes::default().with_inner_size(winit::dpi::LogicalSize::new(800, 600)),
        ) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        self.scene
            .camera_manager
            .camera
            .resize_projection(width, height);

        let window_clone = window_handle.clone();
        let renderer = match pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height).await
        }) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        renderer.init_scene_resources(&mut self.scene);

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.attach_skybox();
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let Some(window) = self.window.as_ref() else {
            return;
        };

        // UI gets first pick of window events.
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.scene
                    .camera_manager
                    .controller
                    .set_shift_held(modifiers.state().shift_key());
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.scene.update();
                render_engine.update(self.scene.camera_manager.camera.uniform);

                if let (Some(ui_manager), Some(ui_callback)) =
                    (self.ui_manager.as_mut(), self.ui_callback.as_mut())
                {
                    // The UI edits a copy; the scene picks it up next frame
                    // so the pass being recorded stays consistent.
                    let mut params = self.scene.params;
                    let window_clone = window.clone();

                    render_engine.render_frame_with_ui(
                        &self.scene,
                        |device, queue, encoder, color_attachment| {
                            ui_manager.update_logic(&window_clone, |ui| {
                                ui_callback(ui, &mut params);
                            });
                            ui_manager.render_display_only(
                                device,
                                queue,
                                encoder,
                                color_attachment,
                            );
                        },
                    );

                    self.scene.params = params;
                } else {
                    render_engine.render_frame_simple(&self.scene);
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Camera input is suppressed while the UI owns the mouse.
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            let io = ui_manager.context.io();
            if io.want_capture_mouse || io.want_capture_keyboard {
                return;
            }
        }

        self.scene.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
