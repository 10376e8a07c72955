use glam::Vec3;

use crate::stage::Vertex;

/// Generates an icosphere: a subdivided icosahedron with every vertex
/// pushed back onto the circumscribed sphere.
///
/// Each level splits every triangle into four; midpoint vertices are
/// duplicated across shared edges rather than deduplicated.
pub fn icosphere(subdivision_level: u8) -> (Vec<Vertex>, Vec<u32>) {
    let (mut positions, mut indices) = icosahedron();

    let radius = positions[0].length();

    for _ in 0..subdivision_level {
        let mut next_indices = Vec::with_capacity(indices.len() * 4);

        for face in indices.chunks_exact(3) {
            let [i0, i1, i2] = [face[0], face[1], face[2]];

            let p0 = positions[i0 as usize];
            let p1 = positions[i1 as usize];
            let p2 = positions[i2 as usize];

            // edge midpoints, pushed back out to the sphere
            let m01 = ((p0 + p1) * 0.5).normalize() * radius;
            let m12 = ((p1 + p2) * 0.5).normalize() * radius;
            let m20 = ((p2 + p0) * 0.5).normalize() * radius;

            let base = positions.len() as u32;
            positions.push(m01);
            positions.push(m12);
            positions.push(m20);
            let [i01, i12, i20] = [base, base + 1, base + 2];

            #[rustfmt::skip]
            let split_faces = [
                i0,  i01, i20,
                i01, i1,  i12,
                i20, i12, i2,
                i01, i12, i20,
            ];
            next_indices.extend_from_slice(&split_faces);
        }

        indices = next_indices;
    }

    let vertices = positions.into_iter().map(Vertex::from).collect();

    (vertices, indices)
}

// TODO: emit consistent winding so a driver can enable backface culling
fn icosahedron() -> (Vec<Vec3>, Vec<u32>) {
    let tau = (1.0 + 5.0_f32.sqrt()) / 2.0;

    let positions = vec![
        Vec3::new(1.0, tau, 0.0),
        Vec3::new(1.0, -tau, 0.0),
        Vec3::new(-1.0, -tau, 0.0),
        Vec3::new(-1.0, tau, 0.0),
        //
        Vec3::new(0.0, 1.0, tau),
        Vec3::new(0.0, 1.0, -tau),
        Vec3::new(0.0, -1.0, -tau),
        Vec3::new(0.0, -1.0, tau),
        //
        Vec3::new(tau, 0.0, 1.0),
        Vec3::new(-tau, 0.0, 1.0),
        Vec3::new(-tau, 0.0, -1.0),
        Vec3::new(tau, 0.0, -1.0),
    ];

    // the faces are exactly the vertex triples whose pairwise distances all
    // equal the edge length
    let edge = 2.0;
    let tolerance = 0.1;

    let mut indices = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            for k in (j + 1)..positions.len() {
                let a = positions[i].distance(positions[j]);
                let b = positions[i].distance(positions[k]);
                let c = positions[j].distance(positions[k]);

                if (a - edge).abs() < tolerance
                    && (b - edge).abs() < tolerance
                    && (c - edge).abs() < tolerance
                {
                    indices.push(i as u32);
                    indices.push(j as u32);
                    indices.push(k as u32);
                }
            }
        }
    }

    (positions, indices)
}
