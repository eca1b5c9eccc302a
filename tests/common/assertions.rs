//! Custom assertion macros
//!
//! Shorter failure output for the checks the HTTP and chat suites repeat.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that two floats are approximately equal
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_approx_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {
        let diff = (($left) - ($right)).abs();
        assert!(
            diff < $epsilon,
            "Values are not approximately equal: {} vs {} (diff: {})",
            $left,
            $right,
            diff
        );
    };
}

/// Assert an HTTP status and show the body when it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $expected:expr) => {
        let response = &$response;
        assert_eq!(
            response.status,
            $expected,
            "Unexpected status, body: {}",
            response.body
        );
    };
}

/// Assert that the JSON error body names the given status and mentions a substring
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr, $needle:expr) => {
        let response = $response;
        $crate::assert_status!(response, $status);
        assert_eq!(response.body["status"], $status.as_u16());
        let message = response.body["error"].as_str().unwrap_or_default();
        assert!(
            message.contains($needle),
            "Expected error '{}' to contain '{}'",
            message,
            $needle
        );
    };
}
