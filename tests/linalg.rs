use arraymath::prelude::*;

fn square(n: usize) -> Matrix<f64> {
    // diagonally dominant, so never singular
    Matrix::from_shape_fn(n, n, |i, j| {
        if i == j {
            (2 * n + i + 2) as f64
        } else {
            ((i * 7 + j * 3) % 5) as f64 - 2.
        }
    })
}

#[test]
fn det_and_inverse_of_2x2() {
    let m = Matrix::from_rows(vec![[1., 2.], [3., 4.]]);
    assert_eq!(m.det(), Ok(-2.));
    assert_eq!(m.inverse().unwrap(), array![[-2., 1.], [1.5, -0.5]]);
}

#[test]
fn trace_and_diagonal() {
    let m = Matrix::from_rows(vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!(m.trace(0), 15);
    assert_eq!(m.trace(-2), 7);
    assert_eq!(m.diagonal(1, false), array![2, 6]);
    assert_eq!(m.diagonal(-1, true), array![3, 4, 8]);
}

#[test]
fn identity_is_its_own_inverse() {
    for n in 1..8 {
        let eye = Matrix::<f64>::identity(n);
        assert_eq!(eye.det(), Ok(1.), "det of identity({})", n);
        assert_eq!(eye.inverse().unwrap(), eye, "inverse of identity({})", n);
    }
}

#[test]
fn product_with_inverse_is_identity() {
    for n in [2, 3, 4, 6, 7] {
        let m = square(n);
        let inv = m.inverse().unwrap();
        let eye = Matrix::<f64>::identity(n);
        assert!((&m * &inv).all_close(&eye, 1e-6), "m * inv(m) for n = {}", n);
        assert!((&inv * &m).all_close(&eye, 1e-6), "inv(m) * m for n = {}", n);
    }
}

#[test]
fn det_is_multiplicative() {
    let a = square(4);
    let b = square(4).transpose();
    let ab = (&a * &b).det().unwrap();
    let expected = a.det().unwrap() * b.det().unwrap();
    assert!((ab - expected).abs() < 1e-6 * expected.abs());
}

#[test]
fn singular_matrices() {
    let m = Matrix::from_rows(vec![[1., 2.], [2., 4.]]);
    assert_eq!(m.det(), Ok(0.));
    assert_eq!(m.inverse().unwrap_err().kind(), ErrorKind::SingularMatrix);

    let big = Matrix::from_shape_fn(6, 6, |i, j| (i * 6 + j) as f64);
    assert_eq!(big.det(), Ok(0.));
    assert_eq!(big.inverse().unwrap_err().kind(), ErrorKind::SingularMatrix);
    assert_eq!(big.gauss().unwrap_err().kind(), ErrorKind::SingularMatrix);
}

#[test]
fn non_square_matrices() {
    let m = Matrix::from_rows(vec![[1., 2., 3.], [4., 5., 6.]]);
    assert_eq!(m.det().unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(m.inverse().unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(m.cofactor(0, 0).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn gauss_and_reduced() {
    let m: Matrix<f64> = Matrix::from_rows(vec![[1., 2., 3.], [2., 4., 7.], [1., 3., 2.]]);
    let g = m.gauss().unwrap();
    // lower triangle eliminated
    assert_eq!(g.at(&[1, 0]), Ok(0.));
    assert_eq!(g.at(&[2, 0]), Ok(0.));
    assert_eq!(g.at(&[2, 1]), Ok(0.));
    assert_eq!(g.diagonal(0, false).prod().abs(), m.det().unwrap().abs());
    assert!(m.reduced().unwrap().all_close(&Matrix::<f64>::identity(3), 1e-12));

    // a right hand side column solves the system
    let system = Matrix::from_rows(vec![[2., 1., 5.], [1., 3., 5.]]);
    let solved = system.reduced().unwrap();
    assert!(solved.col(-1).unwrap().all_close(&array![2., 1.], 1e-12));
}

#[test]
fn cofactors_and_minors() {
    let m = Matrix::from_rows(vec![[3., 0., 2.], [2., 0., -2.], [0., 1., 1.]]);
    assert_eq!(m.minor(0, 1).unwrap(), array![[2., -2.], [0., 1.]]);
    assert_eq!(m.cofactor(0, 1), Ok(-2.));
    assert_eq!(m.cofactor(-1, -1), Ok(0.));
    assert_eq!(m.det(), Ok(10.));
    let adj = m.adjugate().unwrap();
    assert!((&m * &adj).all_close(&(Matrix::<f64>::identity(3).as_array() * 10.), 1e-12));
}

#[test]
fn matrix_vector_products() {
    let m = Matrix::from_rows(vec![[1, 2], [3, 4], [5, 6]]);
    let v = Vector::from_vec(vec![1, -1]);
    assert_eq!(&m * &v, array![-1, -1, -1]);
    assert_eq!(m.mul_vector(&Vector::from_vec(vec![1, 2, 3])).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    let w = Vector::from_vec(vec![1, 0, 1]);
    assert_eq!(&w * &m, array![6, 8]);
}

#[test]
fn matrices_keep_two_dimensions() {
    let mut m = Matrix::from_rows(vec![[1, 2], [3, 4]]);
    assert_eq!(m.reshape(&[4]).unwrap_err().kind(), ErrorKind::FixedDimensionality);
    assert_eq!(m.strip(&s![0]).unwrap_err().kind(), ErrorKind::FixedDimensionality);
    m.reshape(&[1, 4]).unwrap();
    assert_eq!(m.shape(), &[1, 4]);
    assert_eq!(
        Matrix::from_array(array![1, 2, 3]).unwrap_err().kind(),
        ErrorKind::FixedDimensionality
    );
    assert!(!m.is_symmetric());
    assert!(Matrix::from_rows(vec![[1, 2], [2, 1]]).is_symmetric());
}

#[cfg(feature = "approx")]
#[test]
fn approx_comparisons() {
    use approx::assert_abs_diff_eq;

    let m = square(5);
    let inv = m.inverse().unwrap();
    assert_abs_diff_eq!(&m * &inv, Matrix::<f64>::identity(5).into_array(), epsilon = 1e-9);
}
