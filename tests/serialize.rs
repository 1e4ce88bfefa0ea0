#![cfg(feature = "serde")]

use arraymath::prelude::*;

#[test]
fn serial_many_dim() {
    {
        let a = arr0::<f32>(2.72);
        let serial = serde_json::to_string(&a).unwrap();
        assert_eq!(serial, "2.72");
        let res = serde_json::from_str::<Array<f32>>(&serial);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = arr1::<f32>(&[2.72, 1., 2.]);
        let serial = serde_json::to_string(&a).unwrap();
        assert_eq!(serial, "[2.72,1.0,2.0]");
        let res = serde_json::from_str::<Array<f32>>(&serial);
        assert_eq!(a, res.unwrap());
    }

    {
        let a = Array::from_shape_fn(&[2, 2, 3], |ix| (ix[0] * 6 + ix[1] * 3 + ix[2]) as i64);
        let serial = serde_json::to_string(&a).unwrap();
        assert_eq!(serial, "[[[0,1,2],[3,4,5]],[[6,7,8],[9,10,11]]]");
        let res = serde_json::from_str::<Array<i64>>(&serial);
        assert_eq!(a, res.unwrap());
    }
}

#[test]
fn empty_arrays() {
    let a = Array::<i32>::zeros(&[0]);
    let serial = serde_json::to_string(&a).unwrap();
    assert_eq!(serial, "[]");
    let b: Array<i32> = serde_json::from_str(&serial).unwrap();
    assert_eq!(b.shape(), &[0]);
}

#[test]
fn ragged_lists_are_rejected() {
    let res = serde_json::from_str::<Array<i32>>("[[1, 2], [3]]");
    assert!(res.is_err());
    let res = serde_json::from_str::<Array<i32>>("[[1, 2], 3]");
    assert!(res.is_err());
}

#[test]
fn fixed_types_check_dimensions() {
    let m: Matrix<f64> = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
    assert_eq!(m.det(), Ok(-2.));
    assert_eq!(serde_json::to_string(&m).unwrap(), "[[1.0,2.0],[3.0,4.0]]");
    assert!(serde_json::from_str::<Matrix<f64>>("[1.0, 2.0]").is_err());

    let v: Vector<i32> = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(v.sqlength(), 14);
    assert!(serde_json::from_str::<Vector<i32>>("[[1]]").is_err());
}
