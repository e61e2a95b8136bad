use anyhow::Result;

use crate::{Container, ErrorKind, NestedView};

fn list_of_maps() -> Container {
    let list = Container::new();

    for n in 1..=3 {
        let item = Container::new();
        item.insert("a", n);
        list.push(item);
    }

    list
}

#[test]
fn traverse_list() -> Result<()> {
    let list = list_of_maps();
    let mut view = NestedView::new(list.clone());

    let mut positions = Vec::new();

    view.reset();

    while view.has_current() {
        let key = view.current_key();
        let item = view.current_value()?;

        assert!(list.get(key).and_then(|v| v.into_container()).map_or(false, |c| c.ptr_eq(&item.materialize())));
        positions.push((key, item.require("a")?.as_u32()));
        view.advance();
    }

    assert_eq!(positions, [(0, Some(1)), (1, Some(2)), (2, Some(3))]);
    assert_eq!(view.current_key(), 3);
    assert!(!view.has_current());
    Ok(())
}

#[test]
fn reset_restarts() -> Result<()> {
    let mut view = NestedView::new(list_of_maps());

    while view.has_current() {
        view.advance();
    }

    view.reset();
    assert_eq!(view.current_key(), 0);
    assert!(view.has_current());
    assert_eq!(view.current_value()?.require("a")?.as_u32(), Some(1));
    Ok(())
}

#[test]
fn associative_containers_iterate_as_empty() {
    let container = Container::new();
    container.insert("x", 1);
    container.insert("y", 2);

    let mut view = NestedView::new(container);
    view.reset();

    assert!(!view.has_current());
    assert_eq!(view.positions().count(), 0);
}

#[test]
fn sparse_containers_stop_at_first_gap() {
    let container = Container::new();
    container.insert(0, Container::new());
    container.insert(2, Container::new());

    let mut view = NestedView::new(container);
    view.reset();

    assert!(view.has_current());
    view.advance();
    assert!(!view.has_current());
    assert_eq!(view.positions().count(), 1);

    // Keys which do not start at zero yield nothing at all.
    let container = Container::new();
    container.insert(1, Container::new());
    assert_eq!(NestedView::new(container).positions().count(), 0);
}

#[test]
fn current_value_errors() {
    let view = NestedView::new(Container::from(vec![1, 2]));

    let error = view.current_value().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotAContainer(..)));

    let view = NestedView::default();
    let error = view.current_value().unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn positions_shape_values() {
    let container = Container::from(vec![1, 2]);
    container.push(Container::new());

    let view = NestedView::new(container);
    let shapes = view
        .positions()
        .map(|(n, value)| (n, value.as_view().is_some()))
        .collect::<Vec<_>>();

    assert_eq!(shapes, [(0, false), (1, false), (2, true)]);
    // The cursor is not touched.
    assert_eq!(view.current_key(), 0);
}
