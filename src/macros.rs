// src/macros.rs

/// Owned-string shorthand: `s!(x)` for `String::from(x)`.
#[macro_export]
macro_rules! s {
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Build one `String` from two or more `&str` pieces, e.g. URL paths:
/// `join!(base, "/players/", slug)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
