use arraymath::prelude::*;

#[test]
fn scalar_like_operands_fill_everything() {
    let a = array![[1., 2.], [3., 4.]];
    let b = array![0., 1.];
    assert_eq!(&a + &b, array![[1., 3.], [3., 5.]]);
    assert_eq!(&a + &arr0(1.), array![[2., 3.], [4., 5.]]);
}

#[test]
fn smaller_extent_repeats_cyclically() {
    // a length 2 operand tiles a length 6 axis
    let a = Array::<i32>::zeros(&[6]);
    assert_eq!(&a + &array![1, 2], array![1, 2, 1, 2, 1, 2]);

    // whole rows repeat along the outer axis
    let b = Array::<i32>::zeros(&[4, 2]);
    let rows = array![[1, 2], [3, 4]];
    assert_eq!(&b + &rows, array![[1, 2], [3, 4], [1, 2], [3, 4]]);
}

#[test]
fn both_operands_can_grow() {
    let col = array![[1], [2]];
    let row = array![10, 20, 30];
    assert_eq!(&col + &row, array![[11, 21, 31], [12, 22, 32]]);
}

#[test]
fn non_divisible_extents_are_rejected() {
    let a = array![1, 2, 3];
    let b = array![1, 2];
    let err = a.zip_with(&b, |x, y| x + y).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShape);

    let c = Array::<i32>::zeros(&[0]);
    assert_eq!(a.zip_with(&c, |x, y| x + y).unwrap_err().kind(), ErrorKind::IncompatibleShape);
}

#[test]
fn set_and_append_use_the_same_fill() {
    let mut a = Array::<i32>::zeros(&[2, 6]);
    a.set(&s![.., ..], &array![1, 2, 3]).unwrap();
    assert_eq!(a, array![[1, 2, 3, 1, 2, 3], [1, 2, 3, 1, 2, 3]]);
    let b = a.appended(&array![9], Axis(0)).unwrap();
    assert_eq!(b.get(&s![2]).unwrap(), array![9, 9, 9, 9, 9, 9]);
    assert!(a.appended(&array![1, 2, 3, 4], Axis(0)).is_err());
}
