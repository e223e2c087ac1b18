//! Identifier and string escaping, delegated to `cssparser`'s serializer.

use cssparser::{serialize_identifier, serialize_string};

/// Quotes `text` as a double-quoted CSS string.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    // Writing into a String cannot fail.
    let _ = serialize_string(text, &mut out);
    out
}

/// Escapes `name` so it can be used as a class name, id or custom ident.
pub(crate) fn identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let _ = serialize_identifier(name, &mut out);
    out
}
