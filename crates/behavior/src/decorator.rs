//! Decorators that layer extra effects on top of a cube.
//!
//! Every decorator wraps exactly one inner [`Cube`] and implements
//! [`Cube`] itself, so decorators nest to any depth. Applying a
//! decorator first runs the whole inner chain, then its own effect:
//! wrapping `base` in `Scale`, then `Rotate`, then `ColorChange` logs the
//! base marker, the scale, the rotation and the color change, in that
//! order.
//!
//! Spatial handle queries always resolve to the base cube at the bottom
//! of the chain.

use cubes_core::{Error, Result};
use cubes_resources::Color;
use cubes_scene::{ObjectId, Observation, Scene};
use tracing::debug;

use crate::Cube;

/// Shared wrapping primitive.
///
/// Owns the inner cube and forwards both capability calls to it
/// unchanged. The concrete decorators embed one of these and call it
/// before applying their own effect.
pub struct CubeDecorator {
    inner: Box<dyn Cube>,
}

impl CubeDecorator {
    /// Wrap the given cube.
    pub fn new(inner: Box<dyn Cube>) -> Self {
        Self { inner }
    }

    /// The wrapped cube.
    pub fn inner(&self) -> &dyn Cube {
        self.inner.as_ref()
    }
}

impl Cube for CubeDecorator {
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()> {
        self.inner.apply_behavior(scene)
    }

    fn spatial_handle(&self) -> ObjectId {
        self.inner.spatial_handle()
    }
}

/// Multiplies the object's scale by a fixed factor.
pub struct ScaleDecorator {
    base: CubeDecorator,
    factor: f32,
}

impl ScaleDecorator {
    /// Wrap `inner`, scaling by `factor` on each application.
    ///
    /// # Errors
    ///
    /// `factor` must be finite and strictly positive.
    pub fn new(inner: Box<dyn Cube>, factor: f32) -> Result<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scale factor must be positive and finite, got {factor}"
            )));
        }
        debug!(factor, "Wrapping cube in ScaleDecorator");
        Ok(Self {
            base: CubeDecorator::new(inner),
            factor,
        })
    }

    /// Scale factor applied on each application.
    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl Cube for ScaleDecorator {
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()> {
        self.base.apply_behavior(scene)?;
        scene
            .transform_mut(self.spatial_handle())?
            .scale_by(self.factor);
        scene.log(Observation::Scaled {
            factor: self.factor,
        });
        Ok(())
    }

    fn spatial_handle(&self) -> ObjectId {
        self.base.spatial_handle()
    }
}

/// Rotates the object about the vertical axis by a fixed angle.
pub struct RotateDecorator {
    base: CubeDecorator,
    degrees: f32,
}

impl RotateDecorator {
    /// Wrap `inner`, rotating by `degrees` on each application.
    ///
    /// # Errors
    ///
    /// `degrees` must be finite.
    pub fn new(inner: Box<dyn Cube>, degrees: f32) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "rotation angle must be finite, got {degrees}"
            )));
        }
        debug!(degrees, "Wrapping cube in RotateDecorator");
        Ok(Self {
            base: CubeDecorator::new(inner),
            degrees,
        })
    }

    /// Rotation angle in degrees about the vertical axis.
    pub fn degrees(&self) -> f32 {
        self.degrees
    }
}

impl Cube for RotateDecorator {
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()> {
        self.base.apply_behavior(scene)?;
        scene
            .transform_mut(self.spatial_handle())?
            .rotate_y(self.degrees);
        scene.log(Observation::Rotated {
            degrees: self.degrees,
        });
        Ok(())
    }

    fn spatial_handle(&self) -> ObjectId {
        self.base.spatial_handle()
    }
}

/// Sets the material color of the object's renderer.
pub struct ColorChangeDecorator {
    base: CubeDecorator,
    color: Color,
}

impl ColorChangeDecorator {
    /// Wrap `inner`, painting it `color` on each application.
    pub fn new(inner: Box<dyn Cube>, color: Color) -> Self {
        debug!(%color, "Wrapping cube in ColorChangeDecorator");
        Self {
            base: CubeDecorator::new(inner),
            color,
        }
    }

    /// Color painted on each application.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Cube for ColorChangeDecorator {
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()> {
        self.base.apply_behavior(scene)?;
        scene
            .renderer_mut(self.spatial_handle())?
            .material
            .set_color(self.color);
        scene.log(Observation::ColorChanged { color: self.color });
        Ok(())
    }

    fn spatial_handle(&self) -> ObjectId {
        self.base.spatial_handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeBase;
    use cubes_scene::SceneObject;
    use glam::{Quat, Vec3};

    const EPSILON: f32 = 1e-5;

    fn scene_with_cube() -> (Scene, CubeBase) {
        let mut scene = Scene::new();
        let id = scene.spawn(SceneObject::cube("Cube"));
        (scene, CubeBase::new(id))
    }

    fn boxed(base: CubeBase) -> Box<dyn Cube> {
        Box::new(base)
    }

    #[test]
    fn plain_decorator_forwards_unchanged() {
        let (mut scene, base) = scene_with_cube();
        let decorator = CubeDecorator::new(boxed(base));

        decorator.apply_behavior(&mut scene).expect("apply");

        assert_eq!(decorator.spatial_handle(), base.spatial_handle());
        assert_eq!(decorator.inner().spatial_handle(), base.spatial_handle());
        assert_eq!(scene.journal(), &[Observation::BasicBehavior]);
    }

    #[test]
    fn spatial_handle_reaches_base_in_any_order() {
        let (_, base) = scene_with_cube();
        let handle = base.spatial_handle();

        let scaled = ScaleDecorator::new(boxed(base), 2.0).unwrap();
        let rotated = RotateDecorator::new(Box::new(scaled), 10.0).unwrap();
        let a: Box<dyn Cube> = Box::new(ColorChangeDecorator::new(Box::new(rotated), Color::RED));
        let b: Box<dyn Cube> = Box::new(
            ScaleDecorator::new(
                Box::new(ColorChangeDecorator::new(
                    Box::new(RotateDecorator::new(boxed(base), 10.0).unwrap()),
                    Color::BLUE,
                )),
                2.0,
            )
            .unwrap(),
        );
        let c: Box<dyn Cube> = Box::new(
            RotateDecorator::new(
                Box::new(CubeDecorator::new(Box::new(CubeDecorator::new(boxed(base))))),
                -30.0,
            )
            .unwrap(),
        );

        assert_eq!(a.spatial_handle(), handle);
        assert_eq!(b.spatial_handle(), handle);
        assert_eq!(c.spatial_handle(), handle);
    }

    #[test]
    fn effects_apply_bottom_up() {
        let (mut scene, base) = scene_with_cube();
        let scaled = ScaleDecorator::new(boxed(base), 1.5).unwrap();
        let rotated = RotateDecorator::new(Box::new(scaled), 225.0).unwrap();
        let colored = ColorChangeDecorator::new(Box::new(rotated), Color::RED);

        colored.apply_behavior(&mut scene).expect("apply");

        assert_eq!(
            scene.journal(),
            &[
                Observation::BasicBehavior,
                Observation::Scaled { factor: 1.5 },
                Observation::Rotated { degrees: 225.0 },
                Observation::ColorChanged { color: Color::RED },
            ]
        );
    }

    #[test]
    fn stacked_scales_multiply() {
        let (mut scene, base) = scene_with_cube();
        let chain = ScaleDecorator::new(
            Box::new(ScaleDecorator::new(boxed(base), 2.0).unwrap()),
            3.0,
        )
        .unwrap();

        chain.apply_behavior(&mut scene).expect("apply");

        let scale = scene.transform(base.spatial_handle()).unwrap().scale;
        assert!(
            scale.abs_diff_eq(Vec3::splat(6.0), EPSILON),
            "Expected (6, 6, 6), got {:?}",
            scale
        );
    }

    #[test]
    fn stacked_rotations_add() {
        let (mut scene, base) = scene_with_cube();
        let chain = RotateDecorator::new(
            Box::new(RotateDecorator::new(boxed(base), 90.0).unwrap()),
            135.0,
        )
        .unwrap();

        chain.apply_behavior(&mut scene).expect("apply");

        let rotation = scene.transform(base.spatial_handle()).unwrap().rotation;
        let expected = Quat::from_rotation_y(225f32.to_radians());
        assert!(
            rotation.abs_diff_eq(expected, EPSILON),
            "Expected 225 degree yaw, got {:?}",
            rotation
        );
    }

    #[test]
    fn applying_twice_compounds_effects() {
        let (mut scene, base) = scene_with_cube();
        let chain = RotateDecorator::new(
            Box::new(ScaleDecorator::new(boxed(base), 2.0).unwrap()),
            45.0,
        )
        .unwrap();

        chain.apply_behavior(&mut scene).expect("first apply");
        chain.apply_behavior(&mut scene).expect("second apply");

        let transform = scene.transform(base.spatial_handle()).unwrap();
        assert!(transform.scale.abs_diff_eq(Vec3::splat(4.0), EPSILON));
        assert!(
            transform
                .rotation
                .abs_diff_eq(Quat::from_rotation_y(90f32.to_radians()), EPSILON)
        );
        assert_eq!(scene.journal().len(), 6);
    }

    #[test]
    fn color_change_sets_material() {
        let (mut scene, base) = scene_with_cube();
        let chain = ColorChangeDecorator::new(boxed(base), Color::MAGENTA);

        chain.apply_behavior(&mut scene).expect("apply");

        let object = scene.object(base.spatial_handle()).unwrap();
        assert_eq!(object.color(), Some(Color::MAGENTA));
        assert_eq!(chain.color(), Color::MAGENTA);
    }

    #[test]
    fn color_change_without_renderer_fails() {
        let mut scene = Scene::new();
        let id = scene.spawn(SceneObject::cube("Ghost").without_renderer());
        let chain = ColorChangeDecorator::new(Box::new(CubeBase::new(id)), Color::RED);

        let err = chain.apply_behavior(&mut scene).unwrap_err();
        assert!(matches!(err, Error::MissingComponent { .. }));
        // Inner layers already ran
        assert_eq!(scene.journal(), &[Observation::BasicBehavior]);
    }

    #[test]
    fn handle_from_another_scene_fails() {
        let (_, base) = scene_with_cube();
        let (mut other, other_base) = scene_with_cube();
        let chain = ScaleDecorator::new(boxed(base), 2.0).unwrap();

        assert!(matches!(
            chain.apply_behavior(&mut other),
            Err(Error::UnknownObject(_))
        ));
        // The other scene's cube sits at the same index and stays untouched
        let scale = other.transform(other_base.spatial_handle()).unwrap().scale;
        assert_eq!(scale, Vec3::ONE);
    }

    #[test]
    fn rejects_bad_parameters() {
        let (_, base) = scene_with_cube();

        for factor in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(
                    ScaleDecorator::new(boxed(base), factor),
                    Err(Error::InvalidParameter(_))
                ),
                "factor {factor} should be rejected"
            );
        }
        assert!(matches!(
            RotateDecorator::new(boxed(base), f32::NAN),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn parameters_are_readable() {
        let (_, base) = scene_with_cube();
        assert_eq!(ScaleDecorator::new(boxed(base), 1.5).unwrap().factor(), 1.5);
        assert_eq!(
            RotateDecorator::new(boxed(base), -90.0).unwrap().degrees(),
            -90.0
        );
    }
}
