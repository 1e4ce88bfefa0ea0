use itertools::assert_equal;

use arraymath::prelude::*;

#[test]
fn iter_is_row_major() {
    let a = Array::from_shape_vec(&[2, 3], (0..6).collect()).unwrap();
    assert_equal(a.iter(), 0..6);
    assert_equal(a.t().iter(), vec![0, 3, 1, 4, 2, 5]);
    assert_eq!(a.iter().len(), 6);
}

#[test]
fn outer_iter_yields_rows() {
    let a = array![[1, 2, 3], [4, 5, 6]];
    let rows = a.outer_iter().unwrap();
    assert_eq!(rows.itemshape(), &[3]);
    assert_equal(rows, vec![array![1, 2, 3], array![4, 5, 6]]);
    assert!(arr0(1).outer_iter().is_err());
}

#[test]
fn several_axes_in_given_order() {
    let a = Array::from_shape_vec(&[2, 2, 3], (0..12).collect()).unwrap();
    let it = a.axis_iter(&[Axis(1), Axis(0)]).unwrap();
    assert_eq!(it.axes(), &[1, 0]);
    assert_eq!(it.itemshape(), &[3]);
    assert_eq!(it.subsizes(), &[2, 1]);
    assert_equal(
        it,
        vec![array![0, 1, 2], array![6, 7, 8], array![3, 4, 5], array![9, 10, 11]],
    );
}

#[test]
fn no_axes_means_the_first() {
    let a = array![[1, 2], [3, 4]];
    let it = a.axis_iter(&[]).unwrap();
    assert_eq!(it.axes(), &[0]);
    assert_eq!(it.size(), 2);
}

#[test]
fn linear_positions_map_to_coordinates() {
    let a = Array::<i32>::zeros(&[2, 3, 4]);
    let it = a.axis_iter(&[Axis(0), Axis(2)]).unwrap();
    assert_eq!(it.to_array_coords(5).unwrap(), s![1, .., 1].to_vec());
    assert_eq!(it.to_array_coords(-1).unwrap(), s![1, .., 3].to_vec());
    assert_eq!(it.to_array_coords(8).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(it.to_array_coords(1..).unwrap_err().kind(), ErrorKind::Unsupported);
}

#[test]
fn get_and_set_items() {
    let mut a = array![[1, 2, 3], [4, 5, 6]];
    {
        let cols = a.axis_iter(&[Axis(1)]).unwrap();
        assert_eq!(cols.get(-1).unwrap(), array![3, 6]);
        assert_eq!(cols.get(..2).unwrap(), array![[1, 2], [4, 5]]);
    }
    let mut cols = a.axis_iter_mut(&[Axis(1)]).unwrap();
    cols.set(1, &array![0]).unwrap();
    cols.set(2, &array![7, 8]).unwrap();
    assert!(cols.set(0, &array![1, 2, 3]).is_err());
    assert_eq!(a, array![[1, 0, 7], [4, 0, 8]]);
}

#[test]
fn delete_rewinds_over_the_new_shape() {
    let mut a = array![[1, 2], [3, 4], [5, 6]];
    let mut rows = a.axis_iter_mut(&[Axis(0)]).unwrap();
    rows.delete(0).unwrap();
    assert_eq!(rows.size(), 2);
    assert_eq!(rows.next(), Some(array![3, 4]));
    assert_eq!(a, array![[3, 4], [5, 6]]);

    let mut b = array![[1, 2], [3, 4]];
    let mut all = b.axis_iter_mut(&[Axis(0), Axis(1)]).unwrap();
    assert_eq!(all.delete(1).unwrap_err().kind(), ErrorKind::RaggedInput);
}

#[test]
fn rows_and_cols_of_a_matrix() {
    let m = Matrix::from_rows(vec![[1, 2], [3, 4]]);
    assert_equal(m.rows(), vec![array![1, 2], array![3, 4]]);
    assert_equal(m.cols(), vec![array![1, 3], array![2, 4]]);
}

#[test]
fn empty_axis_yields_nothing() {
    let a = Array::<f64>::zeros(&[0, 3]);
    let mut it = a.outer_iter().unwrap();
    assert_eq!(it.size(), 0);
    assert_eq!(it.next(), None);
}
