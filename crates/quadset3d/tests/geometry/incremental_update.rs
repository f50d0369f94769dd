use quadset3d::bounding_volume::Aabb;
use quadset3d::math::{Point, Real, Vector};
use quadset3d::mesh::{AttributeChannel, DirtyFlags};
use quadset3d::shape::{
    ColorSource, IndexWidth, NormalSource, PositionSource, QuadSet, QuadSetDesc, QuadSetError,
    QuadSetField, TexCoordSource,
};

fn unit_quad_points(offset: Real) -> Vec<Point<Real>> {
    vec![
        Point::new(offset, 0.0, 0.0),
        Point::new(offset + 1.0, 0.0, 0.0),
        Point::new(offset + 1.0, 1.0, 0.0),
        Point::new(offset, 1.0, 0.0),
    ]
}

fn textured_quad() -> QuadSetDesc {
    QuadSetDesc::new(vec![0, 1, 2, 3], PositionSource::new(unit_quad_points(0.0)))
        .with_color(ColorSource::Rgb(vec![[1.0, 0.0, 0.0]; 4]))
        .with_normal(NormalSource::new(vec![-Vector::<Real>::z(); 4]))
        .with_tex_coord(TexCoordSource::TexCoord2(vec![[0.0, 0.0]; 4]))
}

#[test]
fn coord_change_only_touches_positions() {
    let mut quad_set = QuadSet::new(textured_quad()).unwrap();
    let consumer = quad_set.register_consumer();
    let before = quad_set.mesh().clone();
    assert_eq!(
        quad_set.bounding_volume(),
        Some(Aabb::new(Point::origin(), Point::new(1.0, 1.0, 0.0)))
    );

    quad_set
        .set_coord(PositionSource::new(unit_quad_points(2.0)))
        .unwrap();

    let mesh = quad_set.mesh();
    for channel in [
        AttributeChannel::Normal,
        AttributeChannel::Color,
        AttributeChannel::TexCoord,
    ] {
        assert_eq!(mesh.attribute(channel), before.attribute(channel));
    }
    assert_eq!(mesh.indices(), before.indices());
    assert_ne!(mesh.positions().version(), before.positions().version());
    assert_eq!(mesh.positions().data()[0], 2.0);

    let signals = quad_set.take_signals(consumer).unwrap();
    assert_eq!(signals.dirty, DirtyFlags::POSITIONS);
    assert!(signals.volume_invalidated);

    assert_eq!(
        quad_set.bounding_volume(),
        Some(Aabb::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 1.0, 0.0)))
    );
}

#[test]
fn incremental_per_face_colors_are_grouped_by_triples() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..10 {
        let num_indices = 4 * (1 + rng.rand_range(0..20) as usize);
        let index: Vec<u32> = (0..num_indices).map(|_| rng.rand_range(0..8)).collect();
        let points = [unit_quad_points(0.0), unit_quad_points(1.0)].concat();
        let desc = QuadSetDesc::new(index, PositionSource::new(points)).with_color_per_vertex(false);
        let mut quad_set = QuadSet::new(desc).unwrap();
        let num_faces = quad_set.mesh().num_faces();

        let colors = vec![[0.0, 0.0, 0.0, 1.0]; num_indices];
        quad_set.set_color(Some(ColorSource::Rgba(colors))).unwrap();

        let buffer = quad_set.mesh().colors();
        assert_eq!(buffer.len(), 4 * num_indices.div_ceil(3));
        assert_eq!(buffer.num_components(), 4);
        // The counters are only recomputed by rebuilds.
        assert_eq!(quad_set.mesh().num_faces(), num_faces);
    }
}

#[test]
fn tex_coord_change_only_touches_tex_coords() {
    let mut quad_set = QuadSet::new(textured_quad()).unwrap();
    let consumer = quad_set.register_consumer();
    let before = quad_set.mesh().clone();

    quad_set
        .set_tex_coord(Some(TexCoordSource::TexCoord3(vec![[0.5; 3]; 4]).into()))
        .unwrap();
    assert_eq!(quad_set.mesh().tex_coords().num_components(), 3);
    assert_eq!(quad_set.mesh().positions(), before.positions());

    // Removing the source falls back to generated coordinates.
    quad_set.set_tex_coord(None).unwrap();
    assert_eq!(quad_set.mesh().tex_coords().num_components(), 2);
    assert_eq!(quad_set.mesh().tex_coords().data(), &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);

    let signals = quad_set.take_signals(consumer).unwrap();
    assert_eq!(signals.dirty, DirtyFlags::TEXCOORDS);
    assert!(!signals.volume_invalidated);
}

#[test]
fn oversized_coord_update_is_rejected() {
    let mut quad_set = QuadSet::new(textured_quad()).unwrap();
    let consumer = quad_set.register_consumer();
    let before = quad_set.mesh().clone();

    let too_many = vec![Point::origin(); 65_534];
    assert_eq!(
        quad_set.set_coord(PositionSource::new(too_many)),
        Err(QuadSetError::IndexWidthExceeded {
            coords: 65_536,
            max: 65_535
        })
    );

    assert_eq!(quad_set.mesh().positions(), before.positions());
    assert_eq!(quad_set.desc().coord.as_ref().map(|c| c.len()), Some(4));
    assert!(quad_set.take_signals(consumer).unwrap().is_empty());
    assert_eq!(
        quad_set.field_changed(QuadSetField::Coord),
        Ok(())
    );
}

#[test]
fn oversized_rebuild_still_completes() {
    let points = vec![Point::origin(); 70_000];
    let quad_set = QuadSet::new(QuadSetDesc::new(vec![0, 1, 2, 3], PositionSource::new(points)))
        .unwrap();
    assert_eq!(quad_set.mesh().num_coords(), 70_000);

    let mut quad_set = QuadSet::new(textured_quad().with_index_width(IndexWidth::U32)).unwrap();
    let points = vec![Point::origin(); 70_000];
    assert!(quad_set.set_coord(PositionSource::new(points)).is_ok());
    assert_eq!(quad_set.mesh().positions().num_tuples(), 70_000);
}

#[test]
fn per_vertex_patches_carry_the_new_values() {
    let mut quad_set = QuadSet::new(textured_quad()).unwrap();
    let consumer = quad_set.register_consumer();
    let before = quad_set.mesh().clone();

    let colors = vec![[0.0, 0.25, 0.5, 1.0], [0.1, 0.2, 0.3, 0.4], [1.0; 4], [0.0; 4]];
    quad_set.set_color(Some(ColorSource::Rgba(colors))).unwrap();
    let normals = vec![
        Vector::x(),
        Vector::y(),
        Vector::z(),
        Vector::new(0.0, 0.6, 0.8),
    ];
    quad_set.set_normal(Some(NormalSource::new(normals))).unwrap();

    let mesh = quad_set.mesh();
    assert_eq!(mesh.colors().num_components(), 4);
    assert_eq!(
        &mesh.colors().data()[..8],
        &[0.0, 0.25, 0.5, 1.0, 0.1, 0.2, 0.3, 0.4]
    );
    assert_eq!(mesh.colors().num_tuples(), 4);
    assert_eq!(
        mesh.normals().data(),
        &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.6, 0.8]
    );
    assert_eq!(mesh.positions(), before.positions());
    assert_eq!(mesh.tex_coords(), before.tex_coords());
    assert_eq!(mesh.indices(), before.indices());

    let signals = quad_set.take_signals(consumer).unwrap();
    assert_eq!(signals.dirty, DirtyFlags::COLORS | DirtyFlags::NORMALS);
    assert!(!signals.volume_invalidated);
}
