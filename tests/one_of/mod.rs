use std::fmt;

use operation_result::{ErrorArm, First, Itself, OneOf2, OneOf3, Second, Third};

#[derive(Debug, PartialEq)]
struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not found")
    }
}

impl std::error::Error for NotFound {}

#[derive(Debug, PartialEq)]
struct Timeout(u32);

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.0)
    }
}

impl std::error::Error for Timeout {}

#[test]
fn inject_places_error_in_its_arm() {
    let first: OneOf2<u8, &str> = ErrorArm::<u8, First>::inject(7);
    let second: OneOf2<u8, &str> = ErrorArm::<&str, Second>::inject("seven");
    assert_eq!(first, OneOf2::First(7));
    assert_eq!(second, OneOf2::Second("seven"));

    let third: OneOf3<u8, &str, char> = ErrorArm::<char, Third>::inject('7');
    assert_eq!(third, OneOf3::Third('7'));
}

#[test]
fn project_returns_only_the_populated_arm() {
    let err: OneOf3<u8, &str, char> = OneOf3::Second("boom");
    assert_eq!(ErrorArm::<u8, First>::project(&err), None);
    assert_eq!(ErrorArm::<&str, Second>::project(&err), Some(&"boom"));
    assert_eq!(ErrorArm::<char, Third>::project(&err), None);
}

#[test]
fn every_type_is_its_own_error_arm() {
    let err: NotFound = ErrorArm::<NotFound, Itself>::inject(NotFound);
    assert_eq!(ErrorArm::<NotFound, Itself>::project(&err), Some(&NotFound));
}

#[test]
fn display_delegates_to_the_stored_error() {
    let err: OneOf2<NotFound, Timeout> = OneOf2::Second(Timeout(250));
    assert_eq!(err.to_string(), "timed out after 250ms");

    let err: OneOf3<NotFound, Timeout, &str> = OneOf3::First(NotFound);
    assert_eq!(err.to_string(), "not found");
}

#[test]
fn error_source_is_the_stored_error() {
    use std::error::Error;

    let err: OneOf2<NotFound, Timeout> = OneOf2::First(NotFound);
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "not found");
}
