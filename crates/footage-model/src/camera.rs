//! Camera identities, view layouts, and the fixed four-slot container.

use serde::{Deserialize, Serialize};

/// One of the four fixed camera positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Camera {
    Front,
    Back,
    Left,
    Right,
}

impl Camera {
    /// All cameras, in the order they are enumerated everywhere.
    pub const ALL: [Camera; 4] = [Camera::Front, Camera::Back, Camera::Left, Camera::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Camera::Front => "front",
            Camera::Back => "back",
            Camera::Left => "left",
            Camera::Right => "right",
        }
    }
}

/// Which camera (or the 2x2 grid) is the primary/export layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Grid,
    Front,
    Back,
    Left,
    Right,
}

impl ViewType {
    /// The single camera this view maps to. The grid has no single-camera
    /// mapping.
    pub fn camera(self) -> Option<Camera> {
        match self {
            ViewType::Grid => None,
            ViewType::Front => Some(Camera::Front),
            ViewType::Back => Some(Camera::Back),
            ViewType::Left => Some(Camera::Left),
            ViewType::Right => Some(Camera::Right),
        }
    }

    /// Name used in export filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Grid => "grid",
            ViewType::Front => "front",
            ViewType::Back => "back",
            ViewType::Left => "left",
            ViewType::Right => "right",
        }
    }
}

/// A value per camera, as four named slots.
///
/// Blanket operations over the cameras (apply a seek, check readiness,
/// gather frame sources) go through this container instead of an implicit
/// collection, so they cannot depend on incidental ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraMap<T> {
    pub front: T,
    pub back: T,
    pub left: T,
    pub right: T,
}

impl<T> CameraMap<T> {
    /// Build a map by evaluating `f` once per camera.
    pub fn build(mut f: impl FnMut(Camera) -> T) -> Self {
        Self {
            front: f(Camera::Front),
            back: f(Camera::Back),
            left: f(Camera::Left),
            right: f(Camera::Right),
        }
    }

    pub fn get(&self, camera: Camera) -> &T {
        match camera {
            Camera::Front => &self.front,
            Camera::Back => &self.back,
            Camera::Left => &self.left,
            Camera::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, camera: Camera) -> &mut T {
        match camera {
            Camera::Front => &mut self.front,
            Camera::Back => &mut self.back,
            Camera::Left => &mut self.left,
            Camera::Right => &mut self.right,
        }
    }

    /// Iterate `(camera, value)` pairs in `Camera::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Camera, &T)> {
        Camera::ALL.into_iter().map(move |camera| (camera, self.get(camera)))
    }

    /// Map every slot to a new value.
    pub fn map<U>(&self, mut f: impl FnMut(Camera, &T) -> U) -> CameraMap<U> {
        CameraMap {
            front: f(Camera::Front, &self.front),
            back: f(Camera::Back, &self.back),
            left: f(Camera::Left, &self.left),
            right: f(Camera::Right, &self.right),
        }
    }

    /// Whether `pred` holds for every camera's value.
    pub fn all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        Camera::ALL.iter().all(|&camera| pred(self.get(camera)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_serde_names() {
        let json = serde_json::to_string(&Camera::Front).unwrap();
        assert_eq!(json, "\"front\"");
        let parsed: Camera = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(parsed, Camera::Right);
    }

    #[test]
    fn test_grid_has_no_single_camera() {
        assert_eq!(ViewType::Grid.camera(), None);
        assert_eq!(ViewType::Left.camera(), Some(Camera::Left));
    }

    #[test]
    fn test_camera_map_slots() {
        let mut map = CameraMap::build(|camera| camera.as_str().len());
        assert_eq!(*map.get(Camera::Front), 5);
        *map.get_mut(Camera::Back) = 42;
        assert_eq!(map.back, 42);
    }

    #[test]
    fn test_camera_map_iter_order() {
        let map = CameraMap::build(|camera| camera.as_str());
        let order: Vec<Camera> = map.iter().map(|(camera, _)| camera).collect();
        assert_eq!(order, Camera::ALL);
    }

    #[test]
    fn test_camera_map_all() {
        let map = CameraMap::build(|_| 1u32);
        assert!(map.all(|v| *v > 0));
        assert!(!map.all(|v| *v > 1));
    }
}
