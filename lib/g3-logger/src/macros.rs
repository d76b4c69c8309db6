/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Build [`Fields`](crate::Fields) from `key => value` pairs.
///
/// ```
/// let fields = g3_logger::fields! {"user" => "alice", "attempt" => 3};
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($k, $v);
        )+
        fields
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __display_values {
    ($($value:expr),* $(,)?) => {
        &[$(&$value as &dyn ::std::fmt::Display),*]
    };
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::debug($crate::__display_values!($($value),*))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::info($crate::__display_values!($($value),*))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($($value:expr),* $(,)?) => {
        $crate::warn($crate::__display_values!($($value),*))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::error($crate::__display_values!($($value),*))
    };
}

/// Log at fatal level through the active logger, then exit the process.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(format_args!($($arg)+))
    };
}

/// Log at fatal level through the active logger, then exit the process.
#[macro_export]
macro_rules! fatal {
    ($($value:expr),* $(,)?) => {
        $crate::fatal($crate::__display_values!($($value),*))
    };
}

/// Log through the active logger, then unwind with a [`LogPanic`](crate::LogPanic).
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panicf(format_args!($($arg)+))
    };
}

/// Log through the active logger, then unwind with a [`LogPanic`](crate::LogPanic).
///
/// Named apart from `panic!` so that it never shadows the std one.
#[macro_export]
macro_rules! log_panic {
    ($($value:expr),* $(,)?) => {
        $crate::panic($crate::__display_values!($($value),*))
    };
}
