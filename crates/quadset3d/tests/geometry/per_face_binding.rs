use approx::assert_relative_eq;
use quadset3d::math::{Point, Real, Vector};
use quadset3d::shape::{
    ColorSource, MultiTexCoord, NormalSource, PositionSource, QuadSet, QuadSetDesc,
    TexCoordSource,
};

// A row of quads sharing edges along the x axis.
fn strip(num_quads: usize) -> QuadSetDesc {
    let mut points = Vec::new();
    for i in 0..=num_quads {
        points.push(Point::new(i as Real, 0.0, 0.0));
        points.push(Point::new(i as Real, 1.0, 0.0));
    }

    let mut index = Vec::new();
    for i in 0..num_quads as u32 {
        index.extend_from_slice(&[2 * i, 2 * i + 2, 2 * i + 3, 2 * i + 1]);
    }

    QuadSetDesc::new(index, PositionSource::new(points))
}

#[test]
fn per_face_colors_repeat_on_every_index_of_their_quad() {
    let colors = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let desc = strip(3)
        .with_color(ColorSource::Rgb(colors.clone()))
        .with_color_per_vertex(false);
    let quad_set = QuadSet::new(desc).unwrap();
    let buffer = quad_set.mesh().colors();

    assert_eq!(buffer.num_components(), 3);
    assert_eq!(buffer.num_tuples(), 3 * 4);
    for (i, color) in buffer.data().chunks(3).enumerate() {
        assert_eq!(color, &colors[i / 4][..]);
    }
}

#[test]
fn per_face_rgba_normals_and_colors() {
    let desc = strip(2)
        .with_color(ColorSource::Rgba(vec![[0.1, 0.2, 0.3, 0.4], [0.5, 0.6, 0.7, 0.8]]))
        .with_color_per_vertex(false)
        .with_normal(NormalSource::new(vec![Vector::x(), Vector::y()]))
        .with_normal_per_vertex(false);
    let quad_set = QuadSet::new(desc).unwrap();
    let mesh = quad_set.mesh();

    assert_eq!(mesh.colors().num_components(), 4);
    assert_eq!(mesh.colors().len(), 2 * 4 * 4);
    assert_eq!(&mesh.colors().data()[28..], &[0.5, 0.6, 0.7, 0.8]);
    assert_eq!(mesh.normals().len(), 2 * 4 * 3);
    assert_eq!(&mesh.normals().data()[..3], &[1.0, 0.0, 0.0]);
    assert_eq!(&mesh.normals().data()[21..], &[0.0, 1.0, 0.0]);
}

#[test]
fn per_vertex_colors_are_flattened_as_is() {
    let colors: Vec<[Real; 4]> = (0..8).map(|i| [i as Real, 0.0, 0.0, 1.0]).collect();
    let desc = strip(3).with_color(ColorSource::Rgba(colors));
    let quad_set = QuadSet::new(desc).unwrap();

    assert_eq!(quad_set.mesh().colors().num_components(), 4);
    assert_eq!(quad_set.mesh().colors().num_tuples(), 8);
    assert_eq!(quad_set.mesh().colors().data()[4 * 7], 7.0);
}

#[test]
fn tex_coords_follow_the_first_child_of_an_indirection() {
    let tex_coords: Vec<[Real; 3]> = (0..8).map(|i| [i as Real, 1.0, 2.0]).collect();
    let multi = MultiTexCoord {
        children: vec![
            TexCoordSource::TexCoord3(tex_coords),
            TexCoordSource::generator("SPHERE-LOCAL"),
        ],
    };
    let quad_set = QuadSet::new(strip(3).with_tex_coord(multi)).unwrap();

    let buffer = quad_set.mesh().tex_coords();
    assert_eq!(buffer.num_components(), 3);
    assert_eq!(buffer.len(), 8 * 3);
    assert_eq!(&buffer.data()[3..6], &[1.0, 1.0, 2.0]);
}

#[test]
fn planar_tex_coords_by_default() {
    let quad_set = QuadSet::new(strip(2)).unwrap();
    let buffer = quad_set.mesh().tex_coords();

    // The strip is 2 wide along x and 1 high along y. Its 6 positions are padded to 8.
    assert_eq!(buffer.num_components(), 2);
    assert_eq!(buffer.num_tuples(), 8);
    assert_relative_eq!(buffer.data()[8], 1.0);
    assert_relative_eq!(buffer.data()[9], 0.0);
    assert_relative_eq!(buffer.data()[11], 1.0);
}
