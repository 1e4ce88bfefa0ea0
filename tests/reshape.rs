use arraymath::prelude::*;

#[test]
fn reshape() {
    let mut a = Array::from_shape_vec(&[12], (0..12).collect()).unwrap();
    a.reshape(&[3, 4]).unwrap();
    assert_eq!(a.at(&[1, 0]), Ok(4));
    a.reshape(&[2, 3, 2]).unwrap();
    assert_eq!(a.at(&[1, 0, 1]), Ok(7));
    assert_eq!(a.reshape(&[5]).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(a.shape(), &[2, 3, 2]);
}

#[test]
fn toshape_copies() {
    let a = array![[1, 2], [3, 4]];
    let mut b = a.toshape(&[4]).unwrap();
    b.fill(0);
    assert_eq!(a, array![[1, 2], [3, 4]]);
    assert_eq!(a.toshape(&[1, 1, 4]).unwrap().shape(), &[1, 1, 4]);
}

#[test]
fn resize_truncates_and_pads() {
    let mut a = array![[1, 2, 3], [4, 5, 6]];
    a.resize(&[4], 0);
    assert_eq!(a, array![1, 2, 3, 4]);
    a.resize(&[3, 2], -1);
    assert_eq!(a, array![[1, 2], [3, 4], [-1, -1]]);
    a.resize(&[0], 0);
    assert!(a.is_empty());
}

#[test]
fn trim_keeps_positions() {
    let mut a = array![[1, 2], [3, 4]];
    a.retrim(&[3, 3], 0).unwrap();
    assert_eq!(a, array![[1, 2, 0], [3, 4, 0], [0, 0, 0]]);
    a.retrim(&[1, -1], 0).unwrap();
    assert_eq!(a, array![[1, 2, 0]]);
    assert_eq!(a.trim(&[1], 0).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn transpose_round_trip() {
    let a = Array::from_shape_fn(&[2, 3, 4], |ix| ix[0] * 100 + ix[1] * 10 + ix[2]);
    let b = a.transpose(&[2, 0, 1]).unwrap();
    assert_eq!(b.shape(), &[4, 2, 3]);
    assert_eq!(b.at(&[3, 1, 2]), Ok(123));
    // the inverse permutation restores the original
    assert_eq!(b.transpose(&[1, 2, 0]).unwrap(), a);
    assert_eq!(a.t().t(), a);
    assert_eq!(a.transpose(&[0, 0, 1]).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    assert_eq!(a.transpose(&[0, 1]).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}
