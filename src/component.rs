//! Component types.
//!
//! Every tuple is generic over one component type `T: Component`. The trait
//! carries everything a tuple needs from its components: equality, hashing,
//! the 32-bit ordered-hash contribution, string conversion and the type tag
//! used in display names (`i` in `tup4i`).
//!
//! | Type | Tag | `component_code` |
//! |------|-----|------------------|
//! | `i8` / `i16` / `i32` | `b` / `s` / `i` | value |
//! | `i64` | `l` | `v ^ (v >>> 32)` |
//! | `f32` | `f` | canonical bits |
//! | `f64` | `d` | canonical bits folded |
//! | `bool` | `bool` | `1231` / `1237` |
//! | `char` | `c` | code point |
//! | `String` | `str` | polynomial over UTF-16 units |
//! | `BigInt` | `bigi` | magnitude words times signum |
//! | `BigDecimal` | `bigd` | `31 * unscaled + scale` |
//! | `Obj<T>` | (none) | folded FNV-1a of `T: Hash` |
//!
//! Floats display as `1.5`, `1.0E10`, `1.0E-7`, `NaN`, `Infinity`: plain
//! decimal for zero and magnitudes in `[1e-3, 1e7)`, scientific otherwise.

use core::fmt::{self, Write};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

/// A value usable as a tuple component.
pub trait Component: Clone {
    /// Lowercase type tag appended to display names.
    const TAG: &'static str;

    /// Component equality. Must be reflexive and agree with `component_hash`.
    fn component_eq(&self, other: &Self) -> bool;

    /// Feed this component into a `Hasher`.
    fn component_hash<H: Hasher>(&self, state: &mut H);

    /// 32-bit hash folded into `TupleView::ordered_hash`.
    fn component_code(&self) -> i32;

    /// String conversion used by tuple `Display` impls.
    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

// =============================================================================
// Primitives
// =============================================================================

macro_rules! impl_small_int_component {
    ($($ty:ty => $tag:literal),* $(,)?) => {
        $(
            impl Component for $ty {
                const TAG: &'static str = $tag;

                #[inline]
                fn component_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn component_hash<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state)
                }

                #[inline]
                fn component_code(&self) -> i32 {
                    i32::from(*self)
                }

                fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_small_int_component!(i8 => "b", i16 => "s", i32 => "i");

impl Component for i64 {
    const TAG: &'static str = "l";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    #[inline]
    fn component_code(&self) -> i32 {
        fold_u64(*self as u64)
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Component for bool {
    const TAG: &'static str = "bool";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    #[inline]
    fn component_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Component for char {
    const TAG: &'static str = "c";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    #[inline]
    fn component_code(&self) -> i32 {
        u32::from(*self) as i32
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Floats compare by canonical bit pattern: every NaN equals every other NaN
// and 0.0 differs from -0.0.

#[inline]
fn f32_bits(v: f32) -> u32 {
    if v.is_nan() { f32::NAN.to_bits() } else { v.to_bits() }
}

#[inline]
fn f64_bits(v: f64) -> u64 {
    if v.is_nan() { f64::NAN.to_bits() } else { v.to_bits() }
}

#[inline]
fn fold_u64(v: u64) -> i32 {
    (v ^ (v >> 32)) as i32
}

/// Rewrites `{:e}` output (`1e10`, `1.5e-7`) as `1.0E10`, `1.5E-7`.
struct ScientificWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    seen_point: bool,
}

impl Write for ScientificWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            match c {
                '.' => {
                    self.seen_point = true;
                    self.f.write_char('.')?;
                }
                'e' => {
                    if !self.seen_point {
                        self.f.write_str(".0")?;
                    }
                    self.f.write_char('E')?;
                }
                c => self.f.write_char(c)?,
            }
        }
        Ok(())
    }
}

macro_rules! float_formatter {
    ($name:ident, $ty:ty) => {
        fn $name(v: $ty, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if v.is_nan() {
                return f.write_str("NaN");
            }
            if v.is_infinite() {
                return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
            }
            let magnitude = if v < 0.0 { -v } else { v };
            if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
                // Debug keeps the `.0` and stays decimal in this range.
                return fmt::Debug::fmt(&v, f);
            }
            write!(ScientificWriter { f, seen_point: false }, "{:e}", v)
        }
    };
}

float_formatter!(fmt_f32, f32);
float_formatter!(fmt_f64, f64);

impl Component for f32 {
    const TAG: &'static str = "f";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        f32_bits(*self) == f32_bits(*other)
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(f32_bits(*self))
    }

    #[inline]
    fn component_code(&self) -> i32 {
        f32_bits(*self) as i32
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_f32(*self, f)
    }
}

impl Component for f64 {
    const TAG: &'static str = "d";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        f64_bits(*self) == f64_bits(*other)
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(f64_bits(*self))
    }

    #[inline]
    fn component_code(&self) -> i32 {
        fold_u64(f64_bits(*self))
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_f64(*self, f)
    }
}

// =============================================================================
// Heap-backed components
// =============================================================================

#[cfg(feature = "alloc")]
impl Component for alloc::string::String {
    const TAG: &'static str = "str";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    fn component_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

#[cfg(feature = "bigint")]
impl Component for num_bigint::BigInt {
    const TAG: &'static str = "bigi";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    fn component_code(&self) -> i32 {
        // Most significant word first.
        let code = self
            .magnitude()
            .to_u32_digits()
            .iter()
            .rev()
            .fold(0i32, |h, word| h.wrapping_mul(31).wrapping_add(*word as i32));
        match self.sign() {
            num_bigint::Sign::Minus => code.wrapping_neg(),
            num_bigint::Sign::NoSign => 0,
            num_bigint::Sign::Plus => code,
        }
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "bigdecimal")]
impl Component for bigdecimal::BigDecimal {
    const TAG: &'static str = "bigd";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self == other
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self, state)
    }

    fn component_code(&self) -> i32 {
        // BigDecimal equality ignores trailing zeros, so the code must too.
        let (unscaled, scale) = self.normalized().as_bigint_and_exponent();
        31i32.wrapping_mul(unscaled.component_code()).wrapping_add(scale as i32)
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// =============================================================================
// Generic objects
// =============================================================================

/// Wrapper that turns any `Clone + Eq + Hash + Debug` value into a component.
///
/// Tuples of `Obj<T>` carry no type tag: `Tup2<Obj<T>>` displays as `tup2(..)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Obj<T>(pub T);

impl<T> Obj<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Obj(value)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Obj<T> {
    #[inline]
    fn from(value: T) -> Self {
        Obj(value)
    }
}

impl<T> Deref for Obj<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Obj<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Component for Obj<T> {
    const TAG: &'static str = "";

    #[inline]
    fn component_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    #[inline]
    fn component_hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }

    fn component_code(&self) -> i32 {
        let mut hasher = FnvHasher::new();
        self.0.hash(&mut hasher);
        fold_u64(hasher.finish())
    }

    fn fmt_component(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

// =============================================================================
// FNV-1a Hasher
// =============================================================================

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// 64-bit FNV-1a `Hasher`. Deterministic across runs, unlike `RandomState`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FnvHasher(u64);

impl FnvHasher {
    #[inline]
    pub(crate) const fn new() -> Self {
        FnvHasher(FNV_OFFSET)
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 ^= *b as u64;
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_codes() {
        assert_eq!(7i8.component_code(), 7);
        assert_eq!((-3i16).component_code(), -3);
        assert_eq!(42i32.component_code(), 42);
        // Long.hashCode(1L << 32) == 1
        assert_eq!((1i64 << 32).component_code(), 1);
        // Long.hashCode(-1L) == 0
        assert_eq!((-1i64).component_code(), 0);
    }

    #[test]
    fn test_bool_and_char_codes() {
        assert_eq!(true.component_code(), 1231);
        assert_eq!(false.component_code(), 1237);
        assert_eq!('a'.component_code(), 97);
    }

    #[test]
    fn test_float_equality_is_reflexive() {
        assert!(f64::NAN.component_eq(&f64::NAN));
        assert!(f32::NAN.component_eq(&(-f32::NAN)));
        assert!(!0.0f64.component_eq(&-0.0));
        assert!(1.5f32.component_eq(&1.5));
        // Float.floatToIntBits(1.0f) == 0x3f800000
        assert_eq!(1.0f32.component_code(), 0x3f80_0000);
        // Double.hashCode(1.0) == 1072693248
        assert_eq!(1.0f64.component_code(), 1_072_693_248);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_string_code() {
        use alloc::string::String;
        assert_eq!(String::new().component_code(), 0);
        assert_eq!(String::from("ab").component_code(), 97 * 31 + 98);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_code() {
        use num_bigint::BigInt;
        assert_eq!(BigInt::from(0).component_code(), 0);
        assert_eq!(BigInt::from(5).component_code(), 5);
        assert_eq!(BigInt::from(-5).component_code(), -5);
        // BigInteger.valueOf(1L << 32).hashCode() == 31
        assert_eq!(BigInt::from(1i64 << 32).component_code(), 31);
    }

    #[test]
    fn test_obj_code_is_deterministic() {
        let a = Obj((1u8, "k"));
        let b = Obj((1u8, "k"));
        assert!(a.component_eq(&b));
        assert_eq!(a.component_code(), b.component_code());
        assert_eq!(*a, (1u8, "k"));
    }

    #[test]
    fn test_fnv_matches_reference() {
        let mut h = FnvHasher::new();
        h.write(b"a");
        assert_eq!(h.finish(), 0xaf63dc4c8601ec8c);
    }
}
