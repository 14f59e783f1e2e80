//! Typed template arguments

use std::fmt;

/// A single argument bound to a `{}` placeholder.
///
/// The set of kinds is closed: integers of every width, both float widths,
/// characters, strings and raw addresses.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Char(char),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    I128(i128),
    U128(u128),
    F32(f32),
    F64(f64),
    Str(String),
    /// An address, rendered in hex
    Pointer(usize),
}

impl LogArg {
    /// Captures the address of a pointer
    pub fn pointer<T: ?Sized>(ptr: *const T) -> Self {
        LogArg::Pointer(ptr as *const () as usize)
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Char(v) => write!(f, "{}", v),
            LogArg::I8(v) => write!(f, "{}", v),
            LogArg::U8(v) => write!(f, "{}", v),
            LogArg::I16(v) => write!(f, "{}", v),
            LogArg::U16(v) => write!(f, "{}", v),
            LogArg::I32(v) => write!(f, "{}", v),
            LogArg::U32(v) => write!(f, "{}", v),
            LogArg::I64(v) => write!(f, "{}", v),
            LogArg::U64(v) => write!(f, "{}", v),
            LogArg::I128(v) => write!(f, "{}", v),
            LogArg::U128(v) => write!(f, "{}", v),
            LogArg::F32(v) => write!(f, "{}", v),
            LogArg::F64(v) => write!(f, "{}", v),
            LogArg::Str(v) => f.write_str(v),
            LogArg::Pointer(v) => write!(f, "{:#x}", v),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for LogArg {
                fn from(value: $ty) -> Self {
                    LogArg::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    char => Char,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    i128 => I128,
    u128 => U128,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl From<isize> for LogArg {
    fn from(value: isize) -> Self {
        LogArg::I64(value as i64)
    }
}

impl From<usize> for LogArg {
    fn from(value: usize) -> Self {
        LogArg::U64(value as u64)
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        LogArg::Str(value.to_string())
    }
}

impl From<&String> for LogArg {
    fn from(value: &String) -> Self {
        LogArg::Str(value.clone())
    }
}

impl<T: ?Sized> From<*const T> for LogArg {
    fn from(value: *const T) -> Self {
        LogArg::pointer(value)
    }
}
