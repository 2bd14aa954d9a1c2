//! `log_*!` macros
//!
//! Context pairs are written `"key" => value` and rendered with `Display`.
//! Nothing is formatted unless the level is enabled.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:expr, $code:expr, $span:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        if $crate::logging::is_enabled($level) {
            $crate::logging::emit(
                $level,
                $code,
                $message,
                $span,
                &[$(($key, format!("{}", $value))),*],
            );
        }
    };
}

/// `log_error!(code, message [, span = span] [, "key" => value]*)`
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__log_event!(
            $crate::logging::LogLevel::Error, Some($code), Some($span), $message
            $(, $key => $value)*
        )
    };
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__log_event!(
            $crate::logging::LogLevel::Error, Some($code), None, $message
            $(, $key => $value)*
        )
    };
}

#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__log_event!(
            $crate::logging::LogLevel::Info, Some($code), None, $message
            $(, $key => $value)*
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__log_event!(
            $crate::logging::LogLevel::Info, None, None, $message
            $(, $key => $value)*
        )
    };
}

#[macro_export]
macro_rules! log_warning {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__log_event!(
            $crate::logging::LogLevel::Warning, None, None, $message
            $(, $key => $value)*
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::__log_event!(
            $crate::logging::LogLevel::Debug, None, None, $message
            $(, $key => $value)*
        )
    };
}

/// Success event with a `duration_ms` pair, only when performance events are on
#[macro_export]
macro_rules! log_performance {
    ($code:expr, $message:expr, duration = $duration:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::performance_events_enabled() {
            $crate::log_success!($code, $message,
                "duration_ms" => format!("{:.3}", $duration.as_secs_f64() * 1000.0)
                $(, $key => $value)*
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;
    use crate::utils::{Position, Span};

    #[test]
    fn test_macro_forms_expand() {
        let span = Span::new(Position::start(), Position::start().advance('x'));
        let duration = std::time::Duration::from_millis(12);

        log_error!(codes::lexical::INVALID_CHARACTER, "Invalid character");
        log_error!(codes::lexical::INVALID_CHARACTER, "Invalid character", span = span);
        log_error!(codes::lexical::INVALID_CHARACTER, "Invalid character",
            "char" => '#',
            "line" => 3
        );
        log_error!(codes::lexical::INVALID_CHARACTER, "Invalid character", span = span,
            "char" => '#'
        );
        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => 157
        );
        log_info!("Translating", "file" => "Main.java");
        log_warning!("Watch mode is not implemented");
        log_debug!("Scanner state", "offset" => 12usize);
        log_performance!(codes::success::FILE_PROCESSING_SUCCESS, "Read source",
            duration = duration,
            "bytes" => 2048
        );
    }
}
