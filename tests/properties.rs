use quickcheck::{quickcheck, TestResult};

use arraymath::prelude::*;

/// Build a shape with the given number of axes whose size is `len`,
/// putting all elements on one axis.
fn shape_for(len: usize, ndim: usize) -> Vec<usize> {
    let mut shape = vec![1; ndim.max(1)];
    shape[ndim.max(1) / 2] = len;
    shape
}

/// Order the axes `0..N` by `keys`, ties broken by position, so any
/// permutation can come out.
fn permutation<const N: usize>(keys: [u8; N]) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..N).collect();
    perm.sort_by_key(|&k| (keys[k], k));
    perm
}

/// A strictly diagonally dominant `n`×`n` matrix, never singular.
fn dominant(n: usize, entries: &[i8]) -> Matrix<f64> {
    Matrix::from_shape_fn(n, n, |i, j| {
        let e = entries[i * n + j] as f64;
        if i == j {
            (2 * n + 1) as f64 + e.abs() % 3.
        } else {
            e % 3.
        }
    })
}

quickcheck! {
    fn size_is_product_of_shape(dims: Vec<u8>) -> TestResult {
        if dims.len() > 4 {
            return TestResult::discard();
        }
        let shape: Vec<usize> = dims.iter().map(|&d| d as usize % 5).collect();
        let a = Array::<u8>::zeros(&shape);
        TestResult::from_bool(a.size() == shape.iter().product::<usize>() && a.len() == a.size())
    }

    fn tolist_round_trip(v: Vec<i32>, ndim: u8) -> TestResult {
        // empty lists cannot carry the extents below them
        if v.is_empty() {
            return TestResult::discard();
        }
        let ndim = (ndim % 4) as usize;
        let shape = shape_for(v.len(), ndim);
        let a = Array::from_shape_vec(&shape, v).unwrap();
        let back = Array::<i32>::from_nested(a.tolist()).unwrap();
        TestResult::from_bool(back == a)
    }

    fn transpose_inverse_round_trip(v: Vec<i16>, keys: (u8, u8, u8, u8)) -> TestResult {
        if v.len() < 6 {
            return TestResult::discard();
        }
        let n = v.len() / 6 * 6;
        let a = Array::from_shape_vec(&[2, 3, 1, n / 6], v[..n].to_vec()).unwrap();
        let perm = permutation([keys.0, keys.1, keys.2, keys.3]);
        let mut inverse = vec![0; 4];
        for (k, &p) in perm.iter().enumerate() {
            inverse[p] = k;
        }
        let b = a.transpose(&perm).unwrap();
        let shape_moved = perm.iter().enumerate().all(|(k, &p)| b.shape()[k] == a.shape()[p]);
        TestResult::from_bool(shape_moved && b.transpose(&inverse).unwrap() == a)
    }

    fn cross_is_anti_symmetric(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
        let a = Vector::from_vec(vec![a.0 as i64, a.1 as i64, a.2 as i64]);
        let b = Vector::from_vec(vec![b.0 as i64, b.1 as i64, b.2 as i64]);
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        ab == -&ba
            && a.cross(&a).unwrap().iter().all(|x| x == 0)
            && ab.dot(&a) == Ok(0)
            && ab.dot(&b) == Ok(0)
    }

    fn product_with_inverse_is_identity(entries: Vec<i8>, n: u8) -> TestResult {
        let n = (n % 7) as usize + 1;
        if entries.len() < n * n {
            return TestResult::discard();
        }
        let m = dominant(n, &entries);
        let inv = m.inverse().unwrap();
        let eye = Matrix::<f64>::identity(n);
        TestResult::from_bool((&m * &inv).all_close(&eye, 1e-6) && (&inv * &m).all_close(&eye, 1e-6))
    }

    fn normals_undo_the_transposed_matrix(entries: Vec<i8>, n: u8, normal: Vec<i8>) -> TestResult {
        let n = (n % 7) as usize + 1;
        if entries.len() < n * n || normal.len() < n {
            return TestResult::discard();
        }
        let m = dominant(n, &entries);
        let v = Vector::from_vec(normal[..n].iter().map(|&x| x as f64).collect());
        // (v * inv(m)^T) * m^T == v
        let back = (&v ^ &m).mul_matrix(&m.transpose()).unwrap();
        TestResult::from_bool(back.all_close(&v, 1e-6))
    }

    fn dot_is_symmetric(pairs: Vec<(i16, i16)>) -> bool {
        let a: Vector<i64> = pairs.iter().map(|p| p.0 as i64).collect();
        let b: Vector<i64> = pairs.iter().map(|p| p.1 as i64).collect();
        a.dot(&b) == b.dot(&a)
    }

    fn fill_repeats_cyclically(v: Vec<i32>, reps: u8) -> TestResult {
        if v.is_empty() {
            return TestResult::discard();
        }
        let reps = (reps % 5) as usize + 1;
        let small = Array::from(v.clone());
        let big = Array::<i32>::zeros(&[v.len() * reps]);
        let sum = &big + &small;
        TestResult::from_bool(sum.iter().enumerate().all(|(i, x)| x == v[i % v.len()]))
    }
}
