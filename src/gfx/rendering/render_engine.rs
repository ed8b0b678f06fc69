//! WGPU-based frame renderer
//!
//! Owns the surface, device, and the four pipelines that make up a frame:
//! an optional skybox, the stencil-silent scene pass, the stencil-writing
//! object pass, and the enlarged outline pass. All four share one
//! depth/stencil attachment and are recorded into a single render pass;
//! the UI overlay gets its own pass without the attachment so it is never
//! stencil- or depth-tested.

use std::sync::Arc;

use wgpu::{Device, TextureFormat};

use crate::error::RenderError;
use crate::gfx::{
    camera::camera_utils::CameraUniform,
    resources::{
        global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, LightConfig},
        texture_resource::TextureResource,
        Cubemap,
    },
    scene::{object::ObjectUniform, DrawObject, Scene},
};
use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
    uniform_buffer::UniformBuffer,
};

use super::outline::{self, OutlineSequence};
use super::pipeline_manager::{PipelineConfig, PipelineManager};
use super::skybox::Skybox;

/// Flat color of the outline band.
const OUTLINE_COLOR: [f32; 4] = [0.04, 0.28, 0.26, 1.0];

/// Core rendering engine managing GPU resources and draw calls
///
/// The RenderEngine handles all low-level graphics operations including:
/// - Surface and device management
/// - Pipeline creation and management
/// - Depth/stencil buffer handling
/// - Camera uniform updates
/// - UI overlay rendering
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_stencil_texture: TextureResource,
    format: TextureFormat,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    light_config: LightConfig,

    object_layout: BindGroupLayoutWithDesc,

    // Enlarged-copy transform and flat color for the outline pass.
    outline_uniform: UniformBuffer<ObjectUniform>,
    outline_bind_group: wgpu::BindGroup,

    skybox_layout: BindGroupLayoutWithDesc,
    skybox: Option<Skybox>,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Initializes wgpu, creates the shared depth/stencil buffer, and
    /// builds the four frame pipelines up front.
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_stencil_texture =
            TextureResource::create_depth_stencil_texture(&device, &config, "depth_stencil");

        let light_config = LightConfig::default();
        let global_ubo = GlobalUBO::new(&device);
        let mut global_bindings = GlobalBindings::new(&device);
        global_bindings.create_bind_group(&device, &global_ubo);

        // Per-object transform + color, group 1 in all scene pipelines.
        let object_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(&device, "Object Bind Group Layout");

        let outline_uniform = UniformBuffer::<ObjectUniform>::new(&device);
        let outline_bind_group = BindGroupBuilder::new(&object_layout)
            .resource(outline_uniform.binding_resource())
            .create(&device, "Outline Bind Group");

        let skybox_layout = Skybox::bind_group_layout(&device);

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader("scene.wgsl", include_str!("scene.wgsl"));
        pipeline_manager.load_shader("outline.wgsl", include_str!("outline.wgsl"));
        pipeline_manager.load_shader("skybox.wgsl", include_str!("skybox.wgsl"));

        let color_targets = vec![Some(wgpu::ColorTargetState {
            format,
            blend: Some(wgpu::BlendState::REPLACE),
            write_mask: wgpu::ColorWrites::ALL,
        })];

        // Background pass: depth pinned to the far plane by the shader,
        // drawn from inside the cube so culling is off, stencil untouched.
        pipeline_manager.register_pipeline(
            "Skybox",
            PipelineConfig::default_with_shader("skybox.wgsl")
                .with_label("Skybox Pipeline")
                .with_bind_group_layouts(vec![skybox_layout.layout.clone()])
                .with_cull_mode(None)
                .with_depth_stencil_format(TextureResource::DEPTH_STENCIL_FORMAT)
                .with_depth_write(false)
                .with_depth_compare(wgpu::CompareFunction::LessEqual)
                .with_stencil(outline::silent_stencil())
                .with_color_targets(color_targets.clone()),
        );

        // Ordinary geometry: full depth test, stencil read-only.
        pipeline_manager.register_pipeline(
            "Scene",
            PipelineConfig::default_with_shader("scene.wgsl")
                .with_label("Scene Pipeline")
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    object_layout.layout.clone(),
                ])
                .with_depth_stencil_format(TextureResource::DEPTH_STENCIL_FORMAT)
                .with_stencil(outline::silent_stencil())
                .with_color_targets(color_targets.clone()),
        );

        // The highlighted object: drawn lit like the scene pass but
        // stamping the stencil reference into every covered fragment.
        pipeline_manager.register_pipeline(
            "Object",
            PipelineConfig::default_with_shader("scene.wgsl")
                .with_label("Object Pipeline")
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    object_layout.layout.clone(),
                ])
                .with_depth_stencil_format(TextureResource::DEPTH_STENCIL_FORMAT)
                .with_stencil(outline::write_stencil())
                .with_color_targets(color_targets.clone()),
        );

        // Enlarged flat-color copy: stencil carves out the object's own
        // footprint, depth test off so the border shows through closer
        // geometry.
        pipeline_manager.register_pipeline(
            "Outline",
            PipelineConfig::default_with_shader("outline.wgsl")
                .with_label("Outline Pipeline")
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    object_layout.layout.clone(),
                ])
                .with_depth_stencil_format(TextureResource::DEPTH_STENCIL_FORMAT)
                .with_depth_write(false)
                .with_depth_compare(wgpu::CompareFunction::Always)
                .with_stencil(outline::exclude_stencil())
                .with_color_targets(color_targets),
        );

        if let Err(errors) = pipeline_manager.create_all_pipelines() {
            for error in errors {
                log::error!("{}", error);
            }
        }

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_stencil_texture,
            format,
            pipeline_manager,
            global_ubo,
            global_bindings,
            light_config,
            object_layout,
            outline_uniform,
            outline_bind_group,
            skybox_layout,
            skybox: None,
        })
    }

    /// Installs a cubemap-backed skybox drawn behind the scene.
    pub fn set_skybox(&mut self, cubemap: &Cubemap) {
        self.skybox = Some(Skybox::new(&self.device, &self.skybox_layout, cubemap));
    }

    /// Uploads vertex/index buffers and bind groups for every scene object.
    pub fn init_scene_resources(&self, scene: &mut Scene) {
        scene.init_gpu_resources(&self.device, &self.object_layout.layout);
    }

    /// Renders a frame with optional UI overlay
    ///
    /// Records one render pass over the shared depth/stencil attachment
    /// in a fixed order: skybox, plain objects, then the two-step outline
    /// sequence for the highlighted object. The UI callback, if given,
    /// encodes its own pass against the color attachment only.
    ///
    /// # Arguments
    /// * `scene` - Scene containing objects to render
    /// * `ui_callback` - Optional function that renders UI elements
    pub fn render_frame<F>(&mut self, scene: &Scene, ui_callback: Option<F>)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                log::error!("Failed to acquire surface texture: {}", e);
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Frame-local uploads before any pass is recorded.
        scene.sync_uniforms(&self.queue);
        if let Some(object) = scene.outlined_object() {
            self.outline_uniform.update_content(
                &self.queue,
                ObjectUniform::new(
                    object.scaled_transform(scene.params.outline_scale),
                    OUTLINE_COLOR,
                ),
            );
        }
        if let Some(skybox) = &mut self.skybox {
            let camera = &scene.camera_manager.camera;
            skybox.update(
                &self.queue,
                camera.projection_matrix() * camera.rotation_only_view_matrix(),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let [r, g, b] = scene.params.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_stencil_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(0),
                        store: wgpu::StoreOp::Store,
                    }),
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(skybox) = &self.skybox {
                if let Some(pipeline) = self.pipeline_manager.pipeline("Skybox") {
                    render_pass.set_pipeline(pipeline);
                    skybox.draw(&mut render_pass);
                }
            }

            render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            if let Some(pipeline) = self.pipeline_manager.pipeline("Scene") {
                render_pass.set_pipeline(pipeline);

                for (index, object) in scene.objects.iter().enumerate() {
                    if !object.visible || Some(index) == scene.outlined_index() {
                        continue;
                    }
                    if let Some(bind_group) = object.bind_group() {
                        render_pass.set_bind_group(1, bind_group, &[]);
                        render_pass.draw_object(object);
                    }
                }
            }

            if let (Some(object), Some(object_pipeline), Some(outline_pipeline)) = (
                scene.outlined_object(),
                self.pipeline_manager.pipeline("Object"),
                self.pipeline_manager.pipeline("Outline"),
            ) {
                if object.visible {
                    OutlineSequence::new(&mut render_pass)
                        .draw_object(object_pipeline, object)
                        .draw_outline(outline_pipeline, &self.outline_bind_group, object)
                        .finish();
                }
            }
        }

        // UI overlay, recorded without the depth/stencil attachment.
        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    /// Convenience method for rendering without UI
    pub fn render_frame_simple(&mut self, scene: &Scene) {
        self.render_frame(
            scene,
            None::<fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView)>,
        );
    }

    /// Convenience method for rendering with a UI overlay
    pub fn render_frame_with_ui<F>(&mut self, scene: &Scene, ui_callback: F)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        self.render_frame(scene, Some(ui_callback));
    }

    /// Updates camera and light uniform buffers
    ///
    /// Should be called each frame with updated camera data.
    pub fn update(&mut self, camera_uniform: CameraUniform) {
        update_global_ubo(
            &mut self.global_ubo,
            &self.queue,
            camera_uniform,
            self.light_config,
        );
    }

    /// Resizes the render engine surface and recreates the depth/stencil buffer
    ///
    /// Zero-sized dimensions (minimized window) are ignored.
    ///
    /// # Arguments
    /// * `width` - New surface width in pixels
    /// * `height` - New surface height in pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;

        self.surface.configure(&self.device, &self.config);

        // The depth/stencil attachment must always match the surface size.
        self.depth_stencil_texture = TextureResource::create_depth_stencil_texture(
            &self.device,
            &self.config,
            "depth_stencil",
        );
    }

    /// Returns current surface dimensions
    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Returns reference to the wgpu device
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns reference to the wgpu command queue
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Returns the surface texture format
    ///
    /// Used for creating compatible render targets and UI systems.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
