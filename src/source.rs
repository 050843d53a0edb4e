use serde_json::Value;

/// What a trace batch was derived from, as far as naming is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind<'a> {
    Visualizable(&'a str),
    NumericArray,
    Unrecognized(&'a str),
}

/// An entity that can be turned into plotly traces.
pub trait Visualizable {
    fn type_name(&self) -> &str;
}

pub trait Classify {
    fn classify(&self) -> SourceKind<'_>;
}

/// Last path segment of `T`'s type name, without generic arguments.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<'a> Classify for dyn Visualizable + 'a {
    fn classify(&self) -> SourceKind<'_> {
        SourceKind::Visualizable(self.type_name())
    }
}

macro_rules! impl_numeric_classify {
    ($($t:ty),*) => {
        $(
            impl Classify for [$t] {
                fn classify(&self) -> SourceKind<'_> {
                    SourceKind::NumericArray
                }
            }

            impl<const N: usize> Classify for [[$t; N]] {
                fn classify(&self) -> SourceKind<'_> {
                    SourceKind::NumericArray
                }
            }
        )*
    };
}

impl_numeric_classify!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl<T, const N: usize> Classify for [T; N]
where
    [T]: Classify,
{
    fn classify(&self) -> SourceKind<'_> {
        self[..].classify()
    }
}

impl<T> Classify for Vec<T>
where
    [T]: Classify,
{
    fn classify(&self) -> SourceKind<'_> {
        self[..].classify()
    }
}

impl Classify for Value {
    fn classify(&self) -> SourceKind<'_> {
        if is_numeric_array(self) {
            SourceKind::NumericArray
        } else {
            SourceKind::Unrecognized(json_type_name(self))
        }
    }
}

/// Rectangular arrays of numbers: every nested array at one level has the
/// same shape. Empty arrays count.
pub fn is_numeric_array(value: &Value) -> bool {
    value.is_array() && array_shape(value).is_some()
}

fn array_shape(value: &Value) -> Option<Vec<usize>> {
    match value {
        Value::Number(_) => Some(Vec::new()),
        Value::Array(items) => {
            let mut inner: Option<Vec<usize>> = None;
            for item in items {
                let shape = array_shape(item)?;
                match &inner {
                    Some(prev) if *prev != shape => return None,
                    Some(_) => {}
                    None => inner = Some(shape),
                }
            }
            let mut shape = vec![items.len()];
            shape.extend(inner.unwrap_or_default());
            Some(shape)
        }
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
