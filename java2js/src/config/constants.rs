pub mod compile_time {
    pub mod file_processing {
        /// Maximum source file size accepted for translation (10MB)
        /// SECURITY: Prevents memory exhaustion via oversized inputs
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold for considering a file "large" (1MB)
        /// PERFORMANCE: Large files get a warning in the performance log
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;

        /// Extension of files the translator accepts
        pub const SOURCE_EXTENSION: &str = "java";

        /// Extension written in place of [`SOURCE_EXTENSION`]
        pub const OUTPUT_EXTENSION: &str = "js";

        /// Permission bits for written output files (unix only)
        pub const OUTPUT_FILE_MODE: u32 = 0o644;
    }

    pub mod lexical {
        /// Maximum number of tokens allowed in a single file
        /// SECURITY: Prevents DoS via token explosion
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;

        /// Characters that may continue an identifier besides letters.
        /// Generic and array type spellings (`List<String>`, `int[]`) scan as one word.
        pub const IDENTIFIER_EXTRA_CHARS: &[char] = &['<', '>', '-', '_', '[', ']'];

        /// Prefix marking a decorator (annotation) word
        pub const DECORATOR_PREFIX: char = '@';

        /// Text spliced into a `for` header in place of the loop variable's type
        pub const FOR_LOOP_BINDING: &str = "let ";
    }

    pub mod transform {
        /// Spaces emitted per indentation level
        pub const DEFAULT_INDENT_WIDTH: usize = 4;

        /// Upper bound accepted for a configured indentation width
        pub const MAX_INDENT_WIDTH: usize = 16;
    }

    pub mod logging {
        /// Maximum events retained by in-memory loggers
        /// RESOURCE: Bounds memory held by test and embedding loggers
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum length of a single log message before truncation
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4_096;
    }
}
