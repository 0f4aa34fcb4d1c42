use itertools::Itertools;

/// A point of the 2D plane.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl From<&Point> for [f64; 2] {
    fn from(val: &Point) -> Self {
        [val.x, val.y]
    }
}

impl From<Point> for [f64; 2] {
    fn from(val: Point) -> Self {
        (&val).into()
    }
}

impl From<&[f64; 2]> for Point {
    fn from(value: &[f64; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self::from(&value)
    }
}

impl Point {
    /// Cross product of (b − a, self − a).
    ///
    /// Positive when the point lies to the left of the oriented line (a, b), negative to
    /// the right, zero on the line. Plain f64 subtraction and multiplication, no
    /// tolerance.
    fn cross_from<T>(&self, a: T, b: T) -> f64
    where
        T: Into<[f64; 2]>,
    {
        let Self { x: x0, y: y0 } = *self;
        let [xa, ya] = a.into();
        let [xb, yb] = b.into();
        (xb - xa) * (y0 - ya) - (yb - ya) * (x0 - xa)
    }

    /// Tests if the point lies inside a convex polygon given by its vertices in order.
    ///
    /// For every wrap-around triple (a, b, c) of consecutive vertices, the point must
    /// lie on the same side of the line (a, b) as c does: the cross products of
    /// (b − a, c − a) and (b − a, p − a) must not have opposite signs. A zero cross
    /// product never rejects, so points exactly on an edge or vertex count as inside.
    ///
    /// Vertex order does not matter, but convexity does: for non-convex or
    /// self-intersecting polygons the answer is whatever the sign tests yield.
    pub fn is_inside_convex<I>(&self, poly: I) -> bool
    where
        I: IntoIterator,
        <I as IntoIterator>::IntoIter: Clone,
        <I as IntoIterator>::IntoIter: ExactSizeIterator,
        <I as IntoIterator>::Item: Into<[f64; 2]>,
        <I as IntoIterator>::Item: Clone,
    {
        for (a, b, c) in poly.into_iter().circular_tuple_windows() {
            let c: [f64; 2] = c.into();
            let ca = Point::from(c).cross_from(a.clone(), b.clone());
            let da = self.cross_from(a, b);
            if da * ca < 0. {
                return false;
            }
        }
        true
    }

    /// Computes the winding number for the point in a polygon.
    ///
    /// This number can be:
    /// - `0` if the point is not inside the polygon
    /// - `> 0` if the polygon winds at least once around the point counter-clockwise
    /// - `< 0` if the polygon winds at least once around the point clockwise
    ///
    /// Independent of the same-side test above; the test suites use it to cross-check
    /// located elements. For more information, see
    /// <https://web.archive.org/web/20130126163405/http://geomalgorithms.com/a03-_inclusion.html>.
    pub fn wn<I>(&self, poly: I) -> isize
    where
        I: IntoIterator,
        <I as IntoIterator>::IntoIter: Clone,
        <I as IntoIterator>::IntoIter: ExactSizeIterator,
        <I as IntoIterator>::Item: Into<[f64; 2]>,
        <I as IntoIterator>::Item: Clone,
    {
        let mut wn = 0;
        for (a, b) in poly.into_iter().circular_tuple_windows() {
            let [_, ya] = a.clone().into();
            let [_, yb] = b.clone().into();
            if ya <= self.y {
                // `a` is below the point: count upward crossings to its left
                if yb > self.y && self.cross_from(a, b) > 0. {
                    wn += 1;
                }
            } else {
                // `a` is above the point: count downward crossings to its right
                if yb <= self.y && self.cross_from(a, b) < 0. {
                    wn -= 1;
                }
            }
        }
        wn
    }

    /// Returns `true` if the point is inside the input polygon.
    pub fn is_inside<I>(&self, poly: I) -> bool
    where
        I: IntoIterator,
        <I as IntoIterator>::IntoIter: Clone,
        <I as IntoIterator>::IntoIter: ExactSizeIterator,
        <I as IntoIterator>::Item: Into<[f64; 2]>,
        <I as IntoIterator>::Item: Clone,
    {
        self.wn(poly) != 0
    }
}

/// A 3-node element with its reference cross products computed up front.
///
/// The three reference values depend only on the triangle, so building one per element
/// row and reusing it for every query point avoids recomputing them in the inner loop.
/// Answers are identical to [`Point::is_inside_convex`] on the same three vertices: the
/// expressions and their evaluation order are the same.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    ca: f64,
    cb: f64,
    cc: f64,
}

impl Triangle {
    pub(crate) fn new(a: Point, b: Point, c: Point) -> Self {
        let ca = c.cross_from(a, b);
        let cb = a.cross_from(b, c);
        let cc = b.cross_from(c, a);
        Self {
            a,
            b,
            c,
            ca,
            cb,
            cc,
        }
    }

    pub(crate) fn contains(&self, point: &Point) -> bool {
        // Not `>= 0.`: a NaN product must pass, never reject
        !(point.cross_from(self.a, self.b) * self.ca < 0.
            || point.cross_from(self.b, self.c) * self.cb < 0.
            || point.cross_from(self.c, self.a) * self.cc < 0.)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    prop_compose! {
        fn coords_in_range(xmin: f64, xmax: f64, ymin: f64, ymax: f64)
                          (x in xmin..xmax, y in ymin..ymax) -> [f64; 2] {
           [x, y]
        }
    }

    #[test]
    fn cross_product_signs() {
        let a = Point::from([0., 0.]);
        let b = Point::from([1., 1.]);

        assert!(Point::from([0., 0.5]).cross_from(a, b) > 0.); // left of the line
        assert_eq!(Point::from([0.5, 0.5]).cross_from(a, b), 0.); // on the line
        assert!(Point::from([1., 0.5]).cross_from(a, b) < 0.); // right of the line
    }

    #[test]
    fn triangle_membership() {
        let tri = Triangle::new(
            Point::from([0., 0.]),
            Point::from([1., 0.]),
            Point::from([0.5, 0.5]),
        );

        // Inside
        assert!(tri.contains(&Point::from([0.5, 0.1])));
        // Edges count as inside
        assert!(tri.contains(&Point::from([0.5, 0.])));
        assert!(tri.contains(&Point::from([0.25, 0.25])));
        // Corners too
        assert!(tri.contains(&Point::from([0., 0.])));
        assert!(tri.contains(&Point::from([0.5, 0.5])));
        // Outside
        assert!(!tri.contains(&Point::from([0.5, -0.1])));
        assert!(!tri.contains(&Point::from([1., 1.])));
        assert!(!tri.contains(&Point::from([-0.2, 0.8])));
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let a = [0., 0.];
        let b = [2., 0.];
        let c = [1., 2.];
        let ccw = Triangle::new(a.into(), b.into(), c.into());
        let cw = Triangle::new(c.into(), b.into(), a.into());

        for p in [[1., 0.5], [1., 1.9], [0.1, 0.1], [2., 2.], [-1., 0.]] {
            assert_eq!(ccw.contains(&p.into()), cw.contains(&p.into()));
        }
    }

    #[test]
    fn pentagon_membership() {
        // Regular pentagon on the unit circle
        let poly: Vec<[f64; 2]> = (0..5)
            .map(|k| {
                let angle = 2. * std::f64::consts::PI * k as f64 / 5.;
                [angle.cos(), angle.sin()]
            })
            .collect();

        assert!(Point::from([0., 0.]).is_inside_convex(poly.iter().copied()));
        assert!(Point::from([0.9, 0.]).is_inside_convex(poly.iter().copied()));
        // Vertices count as inside
        assert!(Point::from([1., 0.]).is_inside_convex(poly.iter().copied()));
        // Outside
        assert!(!Point::from([2., 0.]).is_inside_convex(poly.iter().copied()));
        assert!(!Point::from([-1., -1.]).is_inside_convex(poly.iter().copied()));
    }

    #[test]
    fn triangle_matches_general_form() {
        let coord = || coords_in_range(-10., 10., -10., 10.);
        proptest!(|(a in coord(), b in coord(), c in coord(), p in coord())| {
            let tri = Triangle::new(a.into(), b.into(), c.into());

            prop_assert_eq!(
                tri.contains(&p.into()),
                Point::from(p).is_inside_convex([a, b, c])
            );
        });
    }

    #[test]
    fn collinear_triangle_agrees_with_general_form() {
        let (a, b, c) = ([0., 0.], [1., 0.], [2., 0.]);
        let tri = Triangle::new(a.into(), b.into(), c.into());

        for p in [[0.5, 0.], [1.5, 0.], [0.5, 0.5], [-1., 0.]] {
            assert_eq!(tri.contains(&p.into()), Point::from(p).is_inside_convex([a, b, c]));
        }
    }

    #[test]
    fn winding_number_square() {
        let poly = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];

        assert_eq!(Point::from([0.5, 0.5]).wn(poly), 1);
        assert_eq!(Point::from([1.5, 0.5]).wn(poly), 0);
        assert_eq!(Point::from([0.5, 1.5]).wn(poly), 0);
        assert_eq!(Point::from([0., 0.5]).wn(poly), 1); // Left edges are included
        assert_eq!(Point::from([0.5, 0.]).wn(poly), 1); // Bottom edges are included
        assert_eq!(Point::from([1., 0.5]).wn(poly), 0); // Right edges are not included
        assert_eq!(Point::from([0.5, 1.]).wn(poly), 0); // Top edges are not included
    }
}
