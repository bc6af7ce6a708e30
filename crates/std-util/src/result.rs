/// Asserts that the expression is `Err`, returning the error.
///
/// An optional second argument is a substring the error's `Display` output
/// must contain.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $needle:expr) => {
        match $e {
            Err(e) => {
                let msg = e.to_string();
                assert!(
                    msg.contains($needle),
                    "expected error containing {:?}; actual={msg:?}",
                    $needle
                );
                e
            }
            actual => panic!("expected `Err` containing {:?}; actual={:?}", $needle, actual),
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={e}"),
        }
    };
}
