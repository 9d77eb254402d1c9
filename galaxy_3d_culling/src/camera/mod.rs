//! Camera module: camera parameters, frustum planes, and the builder
//! that turns one into the other.
//!
//! The camera is a passive container driven by the caller (free-look
//! controllers, cutscenes, ...). A `Frustum` is rebuilt from it every
//! frame and handed to the classifier by value.

mod camera;
mod frustum;
mod frustum_builder;

pub use camera::Camera;
pub use frustum::{
    Plane, Frustum, FrustumFace, FrustumCorners,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use frustum_builder::FrustumBuilder;
