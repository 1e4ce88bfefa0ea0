use arraymath::prelude::*;

#[test]
fn formatting() {
    let a = array![1., 2., 3., 4.];
    assert_eq!(a.to_string(), "[1, 2, 3, 4]");
    assert_eq!(format!("{:4}", a), "[   1,    2,    3,    4]");
    assert_eq!(format!("{:.2}", a), "[1.00, 2.00, 3.00, 4.00]");

    let b = array![[1, 2], [3, 4]];
    assert_eq!(format!("{}", b), "[[1, 2], [3, 4]]");
    assert_eq!(format!("{:#}", b), "[[1, 2],\n [3, 4]]");
    assert_eq!(b.pretty(), format!("{:#}", b));

    let c = array![[[1], [2]], [[3], [4]]];
    assert_eq!(format!("{:#}", c), "[[[1],\n  [2]],\n [[3],\n  [4]]]");
}

#[test]
fn debug_shows_the_shape() {
    let a = array![[1, 2, 3]];
    assert_eq!(format!("{:?}", a), "[[1, 2, 3]] shape=[1, 3]");
    assert_eq!(format!("{:?}", arr0(7)), "7 shape=[]");
    let m = Matrix::from_rows(vec![[1, 0], [0, 1]]);
    assert_eq!(format!("{:?}", m), "Matrix([[1, 0], [0, 1]] shape=[2, 2])");
    assert_eq!(m.to_string(), "[[1, 0], [0, 1]]");
}

#[test]
fn empty_arrays() {
    assert_eq!(Array::<f32>::zeros(&[0]).to_string(), "[]");
    assert_eq!(Array::<f32>::zeros(&[2, 0]).to_string(), "[[]]");
    assert_eq!(format!("{:e}", array![1500., 0.25]), "[1.5e3, 2.5e-1]");
}
