//! Converter Registry
//!
//! Maps a requested result type to the function that parses it from a line of
//! input. Primitive types are pre-registered; anything else is registered by the
//! caller before asking for it.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::ConsoleError;

type ConvertFn = Box<dyn Fn(&str) -> Result<Box<dyn Any>, String> + Send + Sync>;

struct Entry {
    type_name: &'static str,
    convert: ConvertFn,
}

/// Parse functions keyed by result type
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, Entry>,
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.converters.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("types", &names)
            .finish()
    }
}

macro_rules! register_integers {
    ($registry:expr; $($ty:ty),* $(,)?) => {
        $(
            $registry.register::<$ty, _>(|input| {
                let text = input.trim();
                match strip_hex_prefix(text) {
                    Some(digits) if digits.starts_with(['+', '-']) => {
                        Err("hexadecimal digits cannot be signed".to_string())
                    }
                    Some(digits) => <$ty>::from_str_radix(digits, 16).map_err(|e| e.to_string()),
                    None => text.parse::<$ty>().map_err(|e| e.to_string()),
                }
            });
        )*
    };
}

impl ConverterRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with integers, floats, `bool`, `char` and `String` registered
    ///
    /// Numbers and booleans ignore surrounding whitespace. Integers also accept a
    /// `0x` or `#` hexadecimal prefix. Booleans compare case-insensitively.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_integers!(registry; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
        registry.register_from_str::<f32>();
        registry.register_from_str::<f64>();
        registry.register::<bool, _>(parse_bool);
        registry.register::<char, _>(parse_char);
        registry.register::<String, _>(|input| Ok(input.to_string()));
        registry
    }

    /// Register `convert` as the parser for `V`, replacing any previous one
    pub fn register<V, F>(&mut self, convert: F) -> &mut Self
    where
        V: Any,
        F: Fn(&str) -> Result<V, String> + Send + Sync + 'static,
    {
        let entry = Entry {
            type_name: type_name::<V>(),
            convert: Box::new(move |input: &str| convert(input).map(|v| Box::new(v) as Box<dyn Any>)),
        };
        self.converters.insert(TypeId::of::<V>(), entry);
        self
    }

    /// Register `V`'s `FromStr` implementation, applied to trimmed input
    pub fn register_from_str<V>(&mut self) -> &mut Self
    where
        V: FromStr + Any,
        V::Err: Display,
    {
        self.register::<V, _>(|input| input.trim().parse::<V>().map_err(|e| e.to_string()))
    }

    pub fn contains<V: Any>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<V>())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Look up the converter for `V`
    pub fn resolve<V: Any>(&self) -> Result<Converter<'_, V>, ConsoleError> {
        self.converters
            .get(&TypeId::of::<V>())
            .map(|entry| Converter {
                entry,
                _marker: PhantomData,
            })
            .ok_or(ConsoleError::NoConverter {
                type_name: type_name::<V>(),
            })
    }

    /// Resolve and convert in one step
    pub fn convert<V: Any>(&self, input: &str) -> Result<V, ConsoleError> {
        self.resolve::<V>()?.convert(input)
    }
}

/// A resolved parser for `V`
pub struct Converter<'a, V> {
    entry: &'a Entry,
    _marker: PhantomData<fn() -> V>,
}

impl<V: Any> Converter<'_, V> {
    pub fn type_name(&self) -> &'static str {
        self.entry.type_name
    }

    pub fn convert(&self, input: &str) -> Result<V, ConsoleError> {
        let invalid = |reason: String| ConsoleError::InvalidFormat {
            input: input.to_string(),
            type_name: self.entry.type_name,
            reason,
        };
        let value = (self.entry.convert)(input).map_err(invalid)?;
        value
            .downcast::<V>()
            .map(|boxed| *boxed)
            .map_err(|_| invalid("converter produced a different type".to_string()))
    }
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('#'))
}

fn parse_bool(input: &str) -> Result<bool, String> {
    let text = input.trim();
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err("expected 'true' or 'false'".to_string())
    }
}

fn parse_char(input: &str) -> Result<char, String> {
    let text = if input.chars().count() > 1 {
        input.trim()
    } else {
        input
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err("expected a character".to_string()),
        (Some(_), Some(_)) => Err("expected a single character".to_string()),
    }
}
