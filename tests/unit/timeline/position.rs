use super::*;

#[test]
fn parses_relative_anchors() {
    assert_eq!("".parse::<Position>().unwrap(), Position::Append);
    assert_eq!("+=0.6".parse::<Position>().unwrap(), Position::FromEnd(0.6));
    assert_eq!("-=1.5".parse::<Position>().unwrap(), Position::FromEnd(-1.5));
    assert_eq!("<".parse::<Position>().unwrap(), Position::WithPrevious(0.0));
    assert_eq!("<0.2".parse::<Position>().unwrap(), Position::WithPrevious(0.2));
    assert_eq!("0".parse::<Position>().unwrap(), Position::At(0.0));
}

#[test]
fn rejects_garbage() {
    assert!("+=soon".parse::<Position>().is_err());
}

#[test]
fn resolution_clamps_at_zero() {
    assert_eq!(Position::FromEnd(-1.8).resolve(1.0, 0.0), 0.0);
    assert_eq!(Position::FromEnd(-1.8).resolve(2.5, 0.0), 0.7);
    assert_eq!(Position::WithPrevious(0.5).resolve(9.0, 2.0), 2.5);
    assert_eq!(Position::Append.resolve(3.0, 1.0), 3.0);
}
