//! Conversion of typed field values into MJCF attribute strings.

/// A value that can be rendered as an MJCF XML attribute.
///
/// The formatting rules, in priority order:
///
/// 1. Booleans render as the literal strings `"true"` / `"false"`.
/// 2. Numeric sequences render as their elements joined by a single space.
/// 3. Keyword enums render as their MJCF keyword, not their Rust name
///    (those implementations live next to the enums in the model crate).
/// 4. Everything else renders through its `Display` form.
///
/// Floating-point values use Rust's shortest round-trip formatting, so
/// values that are exact in binary floating point survive a write/parse
/// cycle unchanged (`5.0` renders as `5`, `0.1` as `0.1`).
pub trait AttrValue {
    /// Renders the value as an attribute string.
    fn attr_string(&self) -> String;
}

impl AttrValue for bool {
    fn attr_string(&self) -> String {
        let literal = if *self { "true" } else { "false" };
        literal.to_string()
    }
}

impl AttrValue for str {
    fn attr_string(&self) -> String {
        self.to_string()
    }
}

impl AttrValue for String {
    fn attr_string(&self) -> String {
        self.clone()
    }
}

macro_rules! display_attr_value {
    ($($ty:ty)+) => {
        $(
            impl AttrValue for $ty {
                fn attr_string(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_attr_value!(f32 f64 i8 i16 i32 i64 u8 u16 u32 u64 usize);

impl<T: AttrValue, const N: usize> AttrValue for [T; N] {
    fn attr_string(&self) -> String {
        join(self.iter())
    }
}

impl<T: AttrValue> AttrValue for [T] {
    fn attr_string(&self) -> String {
        join(self.iter())
    }
}

impl<T: AttrValue> AttrValue for Vec<T> {
    fn attr_string(&self) -> String {
        join(self.iter())
    }
}

fn join<'a, T: AttrValue + 'a>(values: impl Iterator<Item = &'a T>) -> String {
    values
        .map(|v| v.attr_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_renders_lowercase_literals() {
        assert_eq!(true.attr_string(), "true");
        assert_eq!(false.attr_string(), "false");
    }

    #[test]
    fn test_floats_render_shortest_roundtrip() {
        assert_eq!(5.0_f64.attr_string(), "5");
        assert_eq!(0.1_f64.attr_string(), "0.1");
        assert_eq!((-0.25_f64).attr_string(), "-0.25");
    }

    #[test]
    fn test_vectors_join_with_single_space() {
        assert_eq!([1.0, 2.0, 3.0].attr_string(), "1 2 3");
        assert_eq!([5.0, 5.0, 0.1].attr_string(), "5 5 0.1");
        assert_eq!(vec![0, 3].attr_string(), "0 3");
    }

    #[test]
    fn test_empty_sequence_renders_empty_string() {
        assert_eq!(Vec::<f64>::new().attr_string(), "");
    }
}
