use std::path::Path;

use cgmath::Vector3;
use wgpu::Device;

use crate::error::AssetError;
use crate::gfx::{camera::camera_utils::CameraManager, geometry::GeometryData, scene::object::Mesh};

use super::object::Object;
use super::params::FrameParams;

/// Main scene: camera, objects, and the per-frame parameter block.
///
/// One object may be designated as "outlined"; the renderer draws it through
/// the stencil-marking object pass and follows with the enlarged outline
/// pass, while every other object is drawn stencil-silent.
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    pub params: FrameParams,
    outlined: Option<usize>,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            params: FrameParams::default(),
            outlined: None,
        }
    }

    /// Loads a 3D object from an OBJ file.
    ///
    /// Uses normals from the file when present, otherwise accumulates smooth
    /// normals from the faces. Returns the new object's index.
    pub fn add_object(&mut self, object_path: &str) -> Result<usize, AssetError> {
        let (models, _materials) = tobj::load_obj(
            object_path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| AssetError::ObjLoad {
            path: object_path.into(),
            source,
        })?;

        let mut meshes = Vec::new();
        for m in models.iter() {
            let mesh = &m.mesh;

            let vertex_count = mesh.positions.len() / 3;
            if let Some(&bad) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(AssetError::ObjIndexOutOfRange {
                    path: object_path.into(),
                    index: bad,
                    vertex_count,
                });
            }

            let normals = if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len()
            {
                mesh.normals.clone()
            } else {
                log::warn!(
                    "OBJ model '{}' has no usable normals, computing smooth normals",
                    m.name
                );
                Mesh::compute_smooth_normals(&mesh.positions, &mesh.indices)
            };

            meshes.push(Mesh::new(
                mesh.positions.clone(),
                normals,
                mesh.indices.clone(),
            ));
        }

        let mut object = Object::new(meshes);
        if let Some(first_model) = models.first() {
            if !first_model.name.is_empty() {
                object.name = first_model.name.clone();
            } else if let Some(stem) = Path::new(object_path).file_stem() {
                object.name = stem.to_string_lossy().into_owned();
            }
        }

        self.objects.push(object);
        Ok(self.objects.len() - 1)
    }

    /// Adds a procedurally generated object. Returns its index.
    pub fn add_geometry(&mut self, geometry: GeometryData, name: &str) -> usize {
        let object = Object::new(vec![geometry.into_mesh()]).with_name(name);
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Designates the object the outline passes apply to.
    pub fn set_outlined(&mut self, index: usize) {
        assert!(index < self.objects.len(), "no object at index {}", index);
        self.outlined = Some(index);
    }

    pub fn outlined_index(&self) -> Option<usize> {
        self.outlined
    }

    pub fn outlined_object(&self) -> Option<&Object> {
        self.outlined.and_then(|i| self.objects.get(i))
    }

    /// Per-frame update: clamp UI parameters, place the outlined object, and
    /// rebuild the camera matrices.
    pub fn update(&mut self) {
        self.params.clamp();

        if let Some(index) = self.outlined {
            let position = self.params.planet_position;
            self.objects[index]
                .set_translation(Vector3::new(position[0], position[1], position[2]));
        }

        self.camera_manager.camera.update_view_proj();
    }

    /// Creates GPU resources for all objects.
    ///
    /// Must be called after the GPU context is available and before rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, object_layout: &wgpu::BindGroupLayout) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device, object_layout);
        }
    }

    /// Uploads every object's transform and color to the GPU.
    pub fn sync_uniforms(&self, queue: &wgpu::Queue) {
        for object in &self.objects {
            object.update_uniform(queue);
        }
    }

    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{camera_controller::CameraController, orbit_camera::OrbitCamera};
    use crate::gfx::geometry::generate_sphere;

    fn test_scene() -> Scene {
        let camera = OrbitCamera::new(10.0, 0.3, 0.2, Vector3::new(0.0, 0.0, 0.0), 1.5);
        let controller = CameraController::new(0.005, 0.1);
        Scene::new(CameraManager::new(camera, controller))
    }

    #[test]
    fn test_update_places_outlined_object_from_params() {
        let mut scene = test_scene();
        let planet = scene.add_geometry(generate_sphere(8, 6), "planet");
        scene.set_outlined(planet);

        scene.params.planet_position = [1.0, 2.0, 3.0];
        scene.update();

        let transform = scene.objects[planet].transform;
        assert_eq!(transform.w.x, 1.0);
        assert_eq!(transform.w.y, 2.0);
        assert_eq!(transform.w.z, 3.0);
    }

    #[test]
    fn test_update_clamps_params_before_placement() {
        let mut scene = test_scene();
        let planet = scene.add_geometry(generate_sphere(8, 6), "planet");
        scene.set_outlined(planet);

        scene.params.planet_position = [50.0, -50.0, 0.0];
        scene.update();

        let transform = scene.objects[planet].transform;
        assert_eq!(transform.w.x, 10.0);
        assert_eq!(transform.w.y, -10.0);
    }

    #[test]
    #[should_panic(expected = "no object at index")]
    fn test_set_outlined_rejects_bad_index() {
        let mut scene = test_scene();
        scene.set_outlined(3);
    }

    #[test]
    fn test_add_object_missing_file_is_an_error() {
        let mut scene = test_scene();
        let result = scene.add_object("does/not/exist.obj");
        assert!(result.is_err());
    }

    #[test]
    fn test_add_object_rejects_out_of_range_face_index() {
        // Three vertices, but the face references a fourth.
        let path = std::env::temp_dir().join("selkie_bad_face_index.obj");
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap();

        let mut scene = test_scene();
        let result = scene.add_object(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
        assert!(scene.objects.is_empty());
    }
}
