/// Builds a [`WsvDocument`](crate::WsvDocument) from row literals.
///
/// Each row is a bracketed list of values; `null` produces the WSV null,
/// anything else must convert into a `String`.
///
/// # Examples
///
/// ```rust
/// use wsv::wsv;
///
/// let doc = wsv![
///     ["a", null, ""],
///     [],
///     ["b"],
/// ];
/// assert_eq!(doc.serialize(), "a - \"\"\n\nb");
/// ```
#[macro_export]
macro_rules! wsv {
    // Value rules, used by the row expansion below.
    (@value null) => {
        ::std::option::Option::None
    };
    (@value $value:expr) => {
        ::std::option::Option::Some(::std::string::String::from($value))
    };

    () => {
        $crate::WsvDocument::new()
    };

    ($( [ $($value:tt),* $(,)? ] ),* $(,)?) => {{
        let mut document = $crate::WsvDocument::new();
        $(
            document.push_line($crate::WsvLine::from_values(vec![
                $( $crate::wsv!(@value $value) ),*
            ]));
        )*
        document
    }};
}
