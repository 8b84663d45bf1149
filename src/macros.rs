//! Variadic call forms for the `Logger` entry points.
//!
//! ```
//! use gcp_log::{Logger, gcp_print, gcp_printf};
//!
//! let logger = Logger::new();
//! gcp_print!(logger, "attempt ", 3, 4);
//! gcp_printf!(logger, "{} {}", "Hello World", 12345);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __gcp_operands {
    ($($arg:expr),*) => {{
        let operands: ::std::vec::Vec<$crate::Operand<'_>> =
            ::std::vec![$($crate::Operand::from($arg)),*];
        operands
    }};
}

/// `gcp_print!(logger, operands...)`
#[macro_export]
macro_rules! gcp_print {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.print($crate::__gcp_operands!($($arg),*))
    };
}

/// `gcp_printf!(logger, "fmt", args...)`
#[macro_export]
macro_rules! gcp_printf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.printf(::std::format_args!($($fmt)+))
    };
}

#[macro_export]
macro_rules! gcp_fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($crate::__gcp_operands!($($arg),*))
    };
}

#[macro_export]
macro_rules! gcp_fatalf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.fatalf(::std::format_args!($($fmt)+))
    };
}

#[macro_export]
macro_rules! gcp_prefix_print {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.prefix_print($crate::__gcp_operands!($($arg),*))
    };
}

#[macro_export]
macro_rules! gcp_prefix_printf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.prefix_printf(::std::format_args!($($fmt)+))
    };
}

#[macro_export]
macro_rules! gcp_prefix_fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.prefix_fatal($crate::__gcp_operands!($($arg),*))
    };
}

#[macro_export]
macro_rules! gcp_prefix_fatalf {
    ($logger:expr, $($fmt:tt)+) => {
        $logger.prefix_fatalf(::std::format_args!($($fmt)+))
    };
}
