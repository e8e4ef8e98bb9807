//! Recursive Dump
//!
//! Prints a value on its own line and then, for enumerable values, each present
//! element in turn, depth first. Text values are printed whole and never walked
//! character by character.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use super::terminal::Terminal;

/// Lazily produced children of a dumped value
pub type DumpItems<'a> = Box<dyn Iterator<Item = Box<dyn Dump + 'a>> + 'a>;

/// A value that can be printed by `dump`
pub trait Dump {
    /// Text printed on the value's own line
    fn dump_text(&self) -> String;

    /// Elements to dump after this value, or `None` if it is not enumerable
    fn dump_items(&self) -> Option<DumpItems<'_>> {
        None
    }

    /// Absent values are skipped entirely
    fn is_absent(&self) -> bool {
        false
    }
}

/// Print `value` and all of its present descendants, one per line
pub fn dump<T, D>(terminal: &mut T, value: &D) -> io::Result<()>
where
    T: Terminal + ?Sized,
    D: Dump + ?Sized,
{
    dump_node(terminal, value, 0, None)
}

/// Like `dump`, but stops descending below `max_depth`; depth 0 prints only `value`
pub fn dump_to_depth<T, D>(terminal: &mut T, value: &D, max_depth: usize) -> io::Result<()>
where
    T: Terminal + ?Sized,
    D: Dump + ?Sized,
{
    dump_node(terminal, value, 0, Some(max_depth))
}

fn dump_node<T, D>(terminal: &mut T, value: &D, depth: usize, limit: Option<usize>) -> io::Result<()>
where
    T: Terminal + ?Sized,
    D: Dump + ?Sized,
{
    if value.is_absent() {
        return Ok(());
    }
    terminal.write_text(&value.dump_text())?;
    terminal.write_newline()?;

    if limit.is_some_and(|max| depth >= max) {
        return Ok(());
    }
    if let Some(items) = value.dump_items() {
        for item in items {
            dump_node(terminal, item.as_ref(), depth + 1, limit)?;
        }
    }
    Ok(())
}

macro_rules! dump_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dump for $ty {
                fn dump_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

dump_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Dump> Dump for Option<T> {
    fn dump_text(&self) -> String {
        match self {
            Some(value) => value.dump_text(),
            None => "None".to_string(),
        }
    }

    fn dump_items(&self) -> Option<DumpItems<'_>> {
        self.as_ref().and_then(|value| value.dump_items())
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, |value| value.is_absent())
    }
}

macro_rules! dump_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Dump + ?Sized> Dump for $ptr<T> {
                fn dump_text(&self) -> String {
                    (**self).dump_text()
                }

                fn dump_items(&self) -> Option<DumpItems<'_>> {
                    (**self).dump_items()
                }

                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }
            }
        )*
    };
}

dump_pointer!(Box, Rc, Arc);

impl<T: Dump + ?Sized> Dump for &T {
    fn dump_text(&self) -> String {
        (**self).dump_text()
    }

    fn dump_items(&self) -> Option<DumpItems<'_>> {
        (**self).dump_items()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

/// `[a, b, c]`, built from the element texts
fn sequence_text<'a, T, I>(items: I) -> String
where
    T: Dump + 'a,
    I: Iterator<Item = &'a T>,
{
    let parts: Vec<String> = items.map(|item| item.dump_text()).collect();
    format!("[{}]", parts.join(", "))
}

fn sequence_items<'a, T, I>(items: I) -> Option<DumpItems<'a>>
where
    T: Dump + 'a,
    I: Iterator<Item = &'a T> + 'a,
{
    Some(Box::new(items.map(|item| Box::new(item) as Box<dyn Dump + 'a>)))
}

macro_rules! dump_sequence {
    ($($seq:ty),* $(,)?) => {
        $(
            impl<T: Dump> Dump for $seq {
                fn dump_text(&self) -> String {
                    sequence_text(self.iter())
                }

                fn dump_items(&self) -> Option<DumpItems<'_>> {
                    sequence_items(self.iter())
                }
            }
        )*
    };
}

dump_sequence!([T], Vec<T>, VecDeque<T>, BTreeSet<T>, HashSet<T>);

impl<T: Dump, const N: usize> Dump for [T; N] {
    fn dump_text(&self) -> String {
        sequence_text(self.iter())
    }

    fn dump_items(&self) -> Option<DumpItems<'_>> {
        sequence_items(self.iter())
    }
}

/// One key/value pair of a dumped map; printed as `key: value` and not walked further
pub struct MapEntry<'a, K: ?Sized, V: ?Sized> {
    pub key: &'a K,
    pub value: &'a V,
}

impl<K: Dump + ?Sized, V: Dump + ?Sized> Dump for MapEntry<'_, K, V> {
    fn dump_text(&self) -> String {
        format!("{}: {}", self.key.dump_text(), self.value.dump_text())
    }
}

macro_rules! dump_map {
    ($($map:ident),*) => {
        $(
            impl<K: Dump, V: Dump> Dump for $map<K, V> {
                fn dump_text(&self) -> String {
                    let parts: Vec<String> = self
                        .iter()
                        .map(|(key, value)| MapEntry { key, value }.dump_text())
                        .collect();
                    format!("{{{}}}", parts.join(", "))
                }

                fn dump_items(&self) -> Option<DumpItems<'_>> {
                    Some(Box::new(
                        self.iter()
                            .map(|(key, value)| Box::new(MapEntry { key, value }) as Box<dyn Dump + '_>),
                    ))
                }
            }
        )*
    };
}

dump_map!(BTreeMap, HashMap);
