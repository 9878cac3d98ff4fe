use operation_result::{error, failure, ok, success, ErrorTag, Result, Status, SuccessTag, ERROR, OK};

#[test]
fn untyped_tags_are_the_shared_constants() {
    assert_eq!(success(), OK);
    assert_eq!(failure(), ERROR);
    assert_eq!(ok(()), OK);
    assert_eq!(error(()), ERROR);
}

#[test]
fn untyped_tags_are_zero_sized() {
    assert_eq!(core::mem::size_of::<SuccessTag>(), 0);
    assert_eq!(core::mem::size_of::<ErrorTag>(), 0);
}

#[test]
fn typed_tags_carry_their_payload() {
    assert_eq!(ok(42).into_inner(), 42);
    assert_eq!(error("boom").into_inner(), "boom");
    assert_eq!(ok(String::from("value")), ok(String::from("value")));
    assert_ne!(error(1), error(2));
}

#[test]
fn constant_tags_convert_into_value_less_types() {
    let status: Status = OK.into();
    assert!(status.is_success());

    let status: Status = ERROR.into();
    assert!(status.is_error());

    let result: Result<u8> = ERROR.into();
    assert!(result.is_error());
    assert_eq!(result.value_or_default(), 0);
}
