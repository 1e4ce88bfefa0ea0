use arraymath::prelude::*;

#[test]
fn append_row() {
    let mut a = Array::<f64>::zeros(&[0]);
    a.append(&array![0., 1., 2.], Axis(0)).unwrap();
    assert_eq!(a.shape(), &[1, 3]);
    a.append(&array![3., 4., 5.], Axis(0)).unwrap();
    a.append(&array![7., 8., 9.], Axis(0)).unwrap();
    assert_eq!(a.shape(), &[3, 3]);
    assert_eq!(a.get(&s![..2]).unwrap(), array![[0., 1., 2.], [3., 4., 5.]]);
    assert_eq!(a.get(&s![2]).unwrap(), array![7., 8., 9.]);

    assert_eq!(
        a.append(&array![1., 2.], Axis(0)).unwrap_err().kind(),
        ErrorKind::IncompatibleShape
    );
    assert_eq!(a.append(&array![1.], Axis(2)).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn append_column_fills() {
    let mut a = array![[1, 2], [3, 4], [5, 6]];
    a.append(&array![0], Axis(1)).unwrap();
    assert_eq!(a, array![[1, 2, 0], [3, 4, 0], [5, 6, 0]]);
    a.append(&array![[7], [8], [9]], Axis(1)).unwrap_err();
    a.append(&array![7, 8, 9], Axis(1)).unwrap();
    assert_eq!(a.get(&s![.., -1]).unwrap(), array![7, 8, 9]);
}

#[test]
fn append_detaches() {
    let mut a = array![1, 2];
    let alias = a.view();
    a.append(&arr0(3), Axis(0)).unwrap();
    assert_eq!(a, array![1, 2, 3]);
    assert_eq!(alias, array![1, 2]);
    assert!(!a.shares_storage(&alias));
}

#[test]
fn stack() {
    let a = array![[1, 2], [3, 4]];
    let b = array![[5, 6]];
    assert_eq!(a.stacked(&b, Axis(0)).unwrap(), array![[1, 2], [3, 4], [5, 6]]);
    assert_eq!(a.stacked(&b, Axis(1)).unwrap_err().kind(), ErrorKind::IncompatibleShape);
    let mut c = a.copy();
    c.stack(&a, Axis(1)).unwrap();
    assert_eq!(c, array![[1, 2, 1, 2], [3, 4, 3, 4]]);
}
