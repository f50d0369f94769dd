use quadset3d::math::{Point, Real, Vector};
use quadset3d::shape::{NormalSource, PositionSource, QuadSet, QuadSetDesc, QuadSetError};
use quadset3d::transformation::{pad_indices, quads_to_triangles};

fn random_points(rng: &mut oorandom::Rand32, n: usize) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| {
            Point::new(
                rng.rand_float() as Real,
                rng.rand_float() as Real,
                rng.rand_float() as Real,
            )
        })
        .collect()
}

#[test]
fn single_quad_round_trip() {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let normals = vec![
        Vector::new(0.0, 0.0, 1.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, -1.0),
    ];
    let desc = QuadSetDesc::new(vec![0, 1, 2, 3], PositionSource::new(points))
        .with_normal(NormalSource::new(normals));
    let quad_set = QuadSet::new(desc).unwrap();
    let mesh = quad_set.mesh();

    assert_eq!(mesh.indices().data(), &[0, 1, 2, 0, 2, 3]);
    assert_eq!(
        mesh.positions().data(),
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(
        mesh.normals().data(),
        &[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0]
    );
    assert_eq!(mesh.num_faces(), 2);
    assert_eq!(mesh.num_coords(), 4);
}

#[test]
fn index_buffer_has_six_indices_per_quad() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..20 {
        let num_points = 4 + rng.rand_range(0..60) as usize;
        let num_quads = rng.rand_range(0..50) as usize;
        let index: Vec<u32> = (0..num_quads * 4)
            .map(|_| rng.rand_range(0..num_points as u32))
            .collect();
        let points = random_points(&mut rng, num_points);

        let quad_set = QuadSet::new(QuadSetDesc::new(index, PositionSource::new(points))).unwrap();
        assert_eq!(quad_set.mesh().indices().len(), 6 * num_quads);
        assert_eq!(quad_set.mesh().num_faces(), 2 * num_quads);
    }
}

#[test]
fn padding_is_append_only_and_idempotent() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..50 {
        let num_points = 1 + rng.rand_range(0..30) as usize;
        let len = rng.rand_range(0..40) as usize;
        let index: Vec<u32> = (0..len)
            .map(|_| rng.rand_range(0..num_points as u32))
            .collect();

        let padded = pad_indices(&index, num_points).into_owned();
        assert_eq!(padded.len() % 4, 0);
        assert!(padded.len() >= index.len() && padded.len() < index.len() + 4);
        assert_eq!(&padded[..index.len()], &index[..]);
        assert!(padded[index.len()..]
            .iter()
            .all(|i| *i == num_points as u32 - 1));
        assert_eq!(&*pad_indices(&padded, num_points), &padded[..]);
        assert_eq!(quads_to_triangles(&padded).len(), padded.len() / 4 * 6);
    }
}

#[test]
fn misaligned_index_list_is_padded() {
    let points = vec![Point::origin(), Point::new(1.0, 0.0, 0.0), Point::new(1.0, 1.0, 0.0)];
    let desc = QuadSetDesc::new(vec![0, 1, 2], PositionSource::new(points));
    let quad_set = QuadSet::new(desc).unwrap();

    assert_eq!(quad_set.mesh().indices().data(), &[0, 1, 2, 0, 2, 2]);
    // The 3 positions are padded to 4.
    assert_eq!(quad_set.mesh().num_coords(), 4);
    // The description keeps its original index list.
    assert_eq!(quad_set.desc().index, vec![0, 1, 2]);
}

#[test]
fn empty_quad_set() {
    let quad_set = QuadSet::new(QuadSetDesc::new(vec![], PositionSource::default())).unwrap();
    assert!(quad_set.mesh().indices().is_empty());
    assert!(quad_set.mesh().positions().is_empty());
    assert_eq!(quad_set.mesh().num_faces(), 0);
    assert_eq!(quad_set.bounding_volume(), None);
}

#[test]
fn missing_coord_aborts_construction() {
    let desc = QuadSetDesc {
        index: vec![0, 1, 2, 3],
        ..Default::default()
    };
    assert_eq!(QuadSet::new(desc).err(), Some(QuadSetError::MissingCoord));
}
