/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check every component of a triple against the expected values with the
/// given tolerance.
#[cfg(test)]
macro_rules! assert_components_near {
    ($actual:expr, [$e0:expr, $e1:expr, $e2:expr], $epsilon:expr) => {{
        let actual: $crate::Components = $actual;
        approx::assert_abs_diff_eq!(actual.0, $e0, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.1, $e1, epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.2, $e2, epsilon = $epsilon);
    }};
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual: $crate::Components = $actual;
        let expected: [$crate::Component; 3] = $expected;
        approx::assert_abs_diff_eq!(actual.0, expected[0], epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.1, expected[1], epsilon = $epsilon);
        approx::assert_abs_diff_eq!(actual.2, expected[2], epsilon = $epsilon);
    }};
}

#[cfg(test)]
pub(crate) use assert_components_near;
